//! Configuration module for dnsacl
//!
//! - `root`: Main configuration and CLI overrides
//! - `acl`: Rule sets, policies and filter backend selection
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod acl;
pub mod errors;
pub mod logging;
pub mod root;

pub use acl::{AclConfig, PolicyConfig, RuleSetConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
