use async_trait::async_trait;
use dnsacl_domain::{AclConfig, AclQuery, Decision, DomainError};

/// Application-layer port for the ACL engine.
///
/// `evaluate` is synchronous: the live rule sets are immutable and held in
/// memory, so the hot path takes no locks and performs no I/O. `reload` is
/// async because compiling rule sets may read network list files.
#[async_trait]
pub trait AclEnginePort: Send + Sync {
    /// Decide whether `query` is blocked.
    ///
    /// Fails with `InvalidSourceAddress` when a matching rule set has to
    /// look at a source address that does not parse. The error is scoped to
    /// this query only.
    fn evaluate(&self, query: &AclQuery<'_>) -> Result<Decision, DomainError>;

    /// Compile `config` into a fresh rule-set collection and swap it in.
    /// On failure the previous collection stays live.
    async fn reload(&self, config: &AclConfig) -> Result<(), DomainError>;

    fn rule_set_count(&self) -> usize;

    fn policy_count(&self) -> usize;
}
