//! DNS ACL Infrastructure Layer
pub mod acl;
