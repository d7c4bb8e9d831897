use super::compiler::compile_rule_sets;
use super::policy::ZoneRuleSet;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use dnsacl_application::ports::AclEnginePort;
use dnsacl_domain::{normalize_name, AclConfig, AclQuery, Decision, DomainError, RuleRef};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{error, info};

/// A complete, immutable rule-set collection in declaration order.
///
/// Built once per configuration load and shared read-only by every
/// evaluation; replaced wholesale on reload.
#[derive(Debug, Default)]
pub struct RuleSets {
    sets: Vec<ZoneRuleSet>,
}

impl RuleSets {
    pub fn new(sets: Vec<ZoneRuleSet>) -> Self {
        Self { sets }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneRuleSet> {
        self.sets.iter()
    }

    pub fn policy_count(&self) -> usize {
        self.sets.iter().map(|set| set.policies().len()).sum()
    }

    /// Decide whether `query` is blocked.
    ///
    /// Only the rule sets whose matching zone is the most specific one for
    /// the queried name take part (a set for `a.example.org` shadows one for
    /// `example.org` when asking about `x.a.example.org`). Those are walked
    /// in declaration order: the first block is final, anything else falls
    /// through to the next set and finally to `Allowed`. A name under no
    /// configured zone is allowed without looking at any policy.
    pub fn evaluate(&self, query: &AclQuery<'_>) -> Result<Decision, DomainError> {
        let name = normalize_name(query.name);

        let mut candidates: SmallVec<[(usize, &Arc<str>); 4]> = SmallVec::new();
        for (idx, set) in self.sets.iter().enumerate() {
            let Some(zone) = set.matching_zone(&name) else {
                continue;
            };
            match candidates.first().map(|(_, best)| zone.len().cmp(&best.len())) {
                Some(Ordering::Less) => {}
                Some(Ordering::Equal) => candidates.push((idx, zone)),
                Some(Ordering::Greater) | None => {
                    candidates.clear();
                    candidates.push((idx, zone));
                }
            }
        }

        for (idx, zone) in candidates {
            if let Some(policy) = self.sets[idx].should_block(query)? {
                return Ok(Decision::Blocked {
                    zone: Arc::clone(zone),
                    rule: RuleRef {
                        rule_set: idx,
                        policy,
                    },
                });
            }
        }

        Ok(Decision::Allowed)
    }
}

/// The ACL engine.
///
/// Evaluation reads the current `RuleSets` through `ArcSwap`: no locks on
/// the query path, and an evaluation that started before a reload finishes
/// on the collection it loaded. `reload()` compiles a complete new
/// collection first and only then swaps it in, so a failed compile leaves
/// the live rules untouched.
pub struct AclEngine {
    rule_sets: ArcSwap<RuleSets>,
}

impl AclEngine {
    pub fn new(rule_sets: RuleSets) -> Self {
        Self {
            rule_sets: ArcSwap::from_pointee(rule_sets),
        }
    }

    /// Compile `config` and start an engine on it.
    pub async fn from_config(config: &AclConfig) -> Result<Self, DomainError> {
        info!("ACL compilation started");
        let rule_sets = compile_rule_sets(config).await?;
        info!(
            rule_sets = rule_sets.len(),
            policies = rule_sets.policy_count(),
            "AclEngine initialized"
        );
        Ok(Self::new(rule_sets))
    }

    /// The collection currently serving queries.
    pub fn snapshot(&self) -> Arc<RuleSets> {
        self.rule_sets.load_full()
    }

    /// Replace the live collection in one step.
    pub fn swap(&self, rule_sets: RuleSets) -> Arc<RuleSets> {
        self.rule_sets.swap(Arc::new(rule_sets))
    }
}

#[async_trait]
impl AclEnginePort for AclEngine {
    #[inline]
    fn evaluate(&self, query: &AclQuery<'_>) -> Result<Decision, DomainError> {
        self.rule_sets.load().evaluate(query)
    }

    async fn reload(&self, config: &AclConfig) -> Result<(), DomainError> {
        info!("ACL reload started");

        let rule_sets = compile_rule_sets(config).await.map_err(|e| {
            error!(error = %e, "ACL reload failed");
            e
        })?;

        let sets = rule_sets.len();
        self.swap(rule_sets);

        info!(rule_sets = sets, "ACL reload completed");
        Ok(())
    }

    fn rule_set_count(&self) -> usize {
        self.rule_sets.load().len()
    }

    fn policy_count(&self) -> usize {
        self.rule_sets.load().policy_count()
    }
}
