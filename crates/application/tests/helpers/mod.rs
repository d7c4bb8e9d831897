mod mock_acl;

pub use mock_acl::{blocked, MockAclEngine, RecordingSink};
