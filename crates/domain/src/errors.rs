use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Illegal source address '{0}'")]
    InvalidSourceAddress(String),

    #[error("Unrecognized filter backend: {0}")]
    UnrecognizedFilterBackend(String),

    #[error("Failed to insert {network} into filter: {reason}")]
    FilterInsertFailure { network: String, reason: String },

    #[error("Illegal CIDR notation '{0}'")]
    InvalidCidr(String),

    #[error("Unexpected token '{0}'; expect legal QTYPE")]
    InvalidQueryType(String),

    #[error("Unexpected action '{0}'; expect 'allow' or 'block'")]
    InvalidAction(String),

    #[error("No network is specified")]
    EmptyNetworkList,

    #[error("Unable to load networks from {path}: {reason}")]
    NetworkListLoad { path: String, reason: String },

    #[error("Rule set has no zones and no enclosing zones to inherit")]
    NoZones,

    #[error("Configuration error: {0}")]
    Config(String),
}
