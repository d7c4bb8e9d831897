use dnsacl_application::ports::{AclEnginePort, DecisionSink};
use dnsacl_application::use_cases::{EvaluateQueryUseCase, GetAclStatsUseCase, ReloadAclUseCase};
use dnsacl_domain::{AclConfig, DomainError};
use dnsacl_infrastructure::acl::{AclEngine, AclMetrics, RuleSets};
use std::sync::Arc;

/// Engine, metrics and the use cases wired over them.
pub struct AclServices {
    pub engine: Arc<AclEngine>,
    pub evaluate: EvaluateQueryUseCase,
    pub reload: ReloadAclUseCase,
    pub stats: GetAclStatsUseCase,
}

impl AclServices {
    /// Start on an empty rule collection and load `config` through the
    /// reload path, the same one a live configuration change takes.
    pub async fn load(config: &AclConfig) -> Result<Self, DomainError> {
        let engine = Arc::new(AclEngine::new(RuleSets::default()));
        let metrics: Arc<dyn DecisionSink> = Arc::new(AclMetrics::new());
        let port: Arc<dyn AclEnginePort> = engine.clone();

        let services = Self {
            evaluate: EvaluateQueryUseCase::new(port.clone(), metrics.clone()),
            reload: ReloadAclUseCase::new(port),
            stats: GetAclStatsUseCase::new(metrics),
            engine,
        };
        services.reload.execute(config).await?;
        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsacl_application::ports::AclEnginePort;
    use dnsacl_domain::{AclQuery, Config};

    const CONFIG: &str = r#"
        [acl]
        zones = ["example.org"]

        [[acl.rule_sets]]
        [[acl.rule_sets.policies]]
        action = "block"
        qtype = "A"
        net = ["192.168.0.0/16"]
    "#;

    #[tokio::test]
    async fn test_services_load_and_count_decisions() {
        let config = Config::from_toml(CONFIG).unwrap();
        let services = AclServices::load(&config.acl).await.unwrap();
        assert_eq!(services.engine.rule_set_count(), 1);

        let blocked = services
            .evaluate
            .execute(&AclQuery::new("192.168.0.2", "www.example.org", 1))
            .unwrap();
        assert_eq!(blocked.zone(), Some("example.org."));

        let allowed = services
            .evaluate
            .execute(&AclQuery::new("192.167.0.2", "www.example.org", 1))
            .unwrap();
        assert!(!allowed.is_blocked());

        assert!(services
            .evaluate
            .execute(&AclQuery::new("nonsense", "www.example.org", 1))
            .is_err());

        let stats = services.stats.execute();
        assert_eq!((stats.allowed, stats.blocked, stats.refused), (1, 1, 1));
        assert_eq!(stats.blocked_by_zone, vec![("example.org.".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_services_reject_bad_config() {
        let mut config = Config::from_toml(CONFIG).unwrap();
        config.acl.default_backend = "radix".to_string();

        assert!(AclServices::load(&config.acl).await.is_err());
    }
}
