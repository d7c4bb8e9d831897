use super::engine::RuleSets;
use super::filter::FilterBackend;
use super::interfaces::local_ipv4_networks;
use super::policy::{PolicyRule, ZoneRuleSet};
use dnsacl_domain::{
    expand_keywords, parse_network_list, AclConfig, DomainError, PolicyAction, PolicyConfig,
    QtypeMatch,
};
use std::path::Path;
use tracing::{debug, info};

/// Compile an [`AclConfig`] into a complete [`RuleSets`] collection.
///
/// All-or-nothing: the first bad policy (unknown action, type or backend,
/// malformed or empty network list, unreadable file) aborts the whole
/// compile and nothing is returned.
pub async fn compile_rule_sets(config: &AclConfig) -> Result<RuleSets, DomainError> {
    let default_backend: FilterBackend = config.default_backend.parse()?;

    let mut sets = Vec::with_capacity(config.rule_sets.len());
    for (set_idx, rule_set) in config.rule_sets.iter().enumerate() {
        let mut policies = Vec::with_capacity(rule_set.policies.len());
        for policy in &rule_set.policies {
            policies.push(compile_policy(policy, default_backend).await?);
        }

        let set = ZoneRuleSet::build(&rule_set.zones, &config.zones, policies)?;
        debug!(
            rule_set = set_idx,
            zones = set.zones().len(),
            policies = set.policies().len(),
            "Rule set compiled"
        );
        sets.push(set);
    }

    let rule_sets = RuleSets::new(sets);
    info!(
        rule_sets = rule_sets.len(),
        policies = rule_sets.policy_count(),
        "ACL compiled"
    );
    Ok(rule_sets)
}

async fn compile_policy(
    policy: &PolicyConfig,
    default_backend: FilterBackend,
) -> Result<PolicyRule, DomainError> {
    let action: PolicyAction = policy.action.parse()?;
    let qtype: QtypeMatch = policy.qtype.parse()?;
    let backend = match &policy.backend {
        Some(name) => name.parse()?,
        None => default_backend,
    };

    let networks = resolve_networks(policy).await?;
    let rule = PolicyRule::build(action, qtype, backend, &networks)?;

    debug!(
        action = %action,
        qtype = %qtype,
        backend = %backend,
        networks = networks.len(),
        "Policy compiled"
    );
    Ok(rule)
}

/// Concrete CIDR strings for a policy: the `file` contents if one is named,
/// otherwise the `net` list with keywords expanded.
pub async fn resolve_networks(policy: &PolicyConfig) -> Result<Vec<String>, DomainError> {
    let networks = match &policy.file {
        Some(path) => load_network_file(path).await?,
        None => expand_keywords(&policy.net, local_ipv4_networks),
    };
    if networks.is_empty() {
        return Err(DomainError::EmptyNetworkList);
    }
    Ok(networks)
}

/// Read a network list file: one entry per line, `#` comments allowed.
pub async fn load_network_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DomainError> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::NetworkListLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    let networks = parse_network_list(&text);
    debug!(path = %path.display(), networks = networks.len(), "Network list loaded");
    Ok(networks)
}
