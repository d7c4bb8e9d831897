use crate::ports::DecisionSink;
use dnsacl_domain::AclStats;
use std::sync::Arc;

pub struct GetAclStatsUseCase {
    sink: Arc<dyn DecisionSink>,
}

impl GetAclStatsUseCase {
    pub fn new(sink: Arc<dyn DecisionSink>) -> Self {
        Self { sink }
    }

    pub fn execute(&self) -> AclStats {
        self.sink.stats()
    }
}
