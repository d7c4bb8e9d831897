use crate::ports::{AclEnginePort, DecisionSink};
use dnsacl_domain::{AclQuery, Decision, DomainError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs one query through the engine and reports the outcome to the sink.
pub struct EvaluateQueryUseCase {
    engine: Arc<dyn AclEnginePort>,
    sink: Arc<dyn DecisionSink>,
}

impl EvaluateQueryUseCase {
    pub fn new(engine: Arc<dyn AclEnginePort>, sink: Arc<dyn DecisionSink>) -> Self {
        Self { engine, sink }
    }

    pub fn execute(&self, query: &AclQuery<'_>) -> Result<Decision, DomainError> {
        match self.engine.evaluate(query) {
            Ok(decision) => {
                if let Decision::Blocked { zone, rule } = &decision {
                    debug!(
                        name = %query.name,
                        source = %query.source,
                        qtype = query.qtype,
                        zone = %zone,
                        rule = %rule,
                        "Query blocked"
                    );
                }
                self.sink.record(&decision);
                Ok(decision)
            }
            Err(e) => {
                warn!(
                    name = %query.name,
                    source = %query.source,
                    error = %e,
                    "Query refused"
                );
                self.sink.record_refused();
                Err(e)
            }
        }
    }
}
