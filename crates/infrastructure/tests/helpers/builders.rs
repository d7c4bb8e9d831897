#![allow(dead_code)]
use dnsacl_domain::{AclConfig, AclQuery, PolicyConfig, RuleSetConfig};

/// Builder for ACL configurations used across the engine tests
pub struct AclConfigBuilder {
    config: AclConfig,
}

impl AclConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AclConfig::default(),
        }
    }

    pub fn zones(mut self, zones: &[&str]) -> Self {
        self.config.zones = zones.iter().map(|z| z.to_string()).collect();
        self
    }

    pub fn backend(mut self, backend: &str) -> Self {
        self.config.default_backend = backend.to_string();
        self
    }

    /// Append a rule set for `zones` (empty inherits the enclosing zones).
    pub fn rule_set(mut self, zones: &[&str], policies: Vec<PolicyConfig>) -> Self {
        self.config.rule_sets.push(RuleSetConfig {
            zones: zones.iter().map(|z| z.to_string()).collect(),
            policies,
        });
        self
    }

    pub fn build(self) -> AclConfig {
        self.config
    }
}

pub fn allow(qtype: &str, net: &[&str]) -> PolicyConfig {
    PolicyConfig::new("allow", qtype, net)
}

pub fn block(qtype: &str, net: &[&str]) -> PolicyConfig {
    PolicyConfig::new("block", qtype, net)
}

pub const TYPE_A: u16 = 1;
pub const TYPE_MX: u16 = 15;
pub const TYPE_AAAA: u16 = 28;

pub fn query<'a>(source: &'a str, name: &'a str, qtype: u16) -> AclQuery<'a> {
    AclQuery::new(source, name, qtype)
}
