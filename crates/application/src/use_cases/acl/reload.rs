use crate::ports::AclEnginePort;
use dnsacl_domain::{AclConfig, DomainError};
use std::sync::Arc;
use tracing::{error, info, instrument};

pub struct ReloadAclUseCase {
    engine: Arc<dyn AclEnginePort>,
}

impl ReloadAclUseCase {
    pub fn new(engine: Arc<dyn AclEnginePort>) -> Self {
        Self { engine }
    }

    #[instrument(skip(self, config))]
    pub async fn execute(&self, config: &AclConfig) -> Result<(), DomainError> {
        if let Err(e) = self.engine.reload(config).await {
            error!(error = %e, "ACL reload rejected; previous rule sets remain active");
            return Err(e);
        }

        info!(
            rule_sets = self.engine.rule_set_count(),
            policies = self.engine.policy_count(),
            "ACL reloaded"
        );
        Ok(())
    }
}
