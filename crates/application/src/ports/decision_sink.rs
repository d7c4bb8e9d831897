use dnsacl_domain::{AclStats, Decision};

/// Receives every decision for observability (counters keyed by zone).
pub trait DecisionSink: Send + Sync {
    fn record(&self, decision: &Decision);

    /// A query that failed evaluation and was refused.
    fn record_refused(&self);

    fn stats(&self) -> AclStats;
}
