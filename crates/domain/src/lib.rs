//! DNS ACL Domain Layer
pub mod acl;
pub mod config;
pub mod errors;
pub mod network;
pub mod query_type;
pub mod zone;

pub use acl::{AclQuery, AclStats, Decision, PolicyAction, RuleRef};
pub use config::{
    AclConfig, CliOverrides, Config, ConfigError, LoggingConfig, PolicyConfig, RuleSetConfig,
};
pub use errors::DomainError;
pub use network::{
    expand_keywords, normalize_network, parse_ipv4_network, parse_network_list, strip_comment,
    NetworkKeyword, ANY_NETWORK, PRIVATE_NETWORKS,
};
pub use query_type::{parse_query_code, QtypeMatch};
pub use zone::{normalize_name, normalize_zone, ZoneList};
