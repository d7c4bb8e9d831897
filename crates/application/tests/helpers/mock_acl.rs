#![allow(dead_code)]

use async_trait::async_trait;
use dnsacl_application::ports::{AclEnginePort, DecisionSink};
use dnsacl_domain::{AclConfig, AclQuery, AclStats, Decision, DomainError, RuleRef};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn blocked(zone: &str) -> Decision {
    Decision::Blocked {
        zone: Arc::from(zone),
        rule: RuleRef {
            rule_set: 0,
            policy: 0,
        },
    }
}

// ============================================================================
// Mock AclEngine
// ============================================================================

/// Returns a scripted decision per source address; unknown sources are allowed.
pub struct MockAclEngine {
    decisions: Mutex<BTreeMap<String, Result<Decision, DomainError>>>,
    fail_reload: Mutex<bool>,
    reloads: AtomicUsize,
    rule_sets: AtomicUsize,
}

impl MockAclEngine {
    pub fn new() -> Self {
        Self {
            decisions: Mutex::new(BTreeMap::new()),
            fail_reload: Mutex::new(false),
            reloads: AtomicUsize::new(0),
            rule_sets: AtomicUsize::new(0),
        }
    }

    pub fn with_decision(self, source: &str, decision: Result<Decision, DomainError>) -> Self {
        self.decisions
            .lock()
            .unwrap()
            .insert(source.to_string(), decision);
        self
    }

    pub fn set_fail_reload(&self, fail: bool) {
        *self.fail_reload.lock().unwrap() = fail;
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AclEnginePort for MockAclEngine {
    fn evaluate(&self, query: &AclQuery<'_>) -> Result<Decision, DomainError> {
        self.decisions
            .lock()
            .unwrap()
            .get(query.source)
            .cloned()
            .unwrap_or(Ok(Decision::Allowed))
    }

    async fn reload(&self, config: &AclConfig) -> Result<(), DomainError> {
        if *self.fail_reload.lock().unwrap() {
            return Err(DomainError::UnrecognizedFilterBackend("radix".to_string()));
        }
        self.reloads.fetch_add(1, Ordering::SeqCst);
        self.rule_sets.store(config.rule_sets.len(), Ordering::SeqCst);
        Ok(())
    }

    fn rule_set_count(&self) -> usize {
        self.rule_sets.load(Ordering::SeqCst)
    }

    fn policy_count(&self) -> usize {
        0
    }
}

// ============================================================================
// Recording DecisionSink
// ============================================================================

#[derive(Default)]
pub struct RecordingSink {
    decisions: Mutex<Vec<Decision>>,
    refused: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decisions(&self) -> Vec<Decision> {
        self.decisions.lock().unwrap().clone()
    }

    pub fn refused(&self) -> usize {
        self.refused.load(Ordering::SeqCst)
    }
}

impl DecisionSink for RecordingSink {
    fn record(&self, decision: &Decision) {
        self.decisions.lock().unwrap().push(decision.clone());
    }

    fn record_refused(&self) {
        self.refused.fetch_add(1, Ordering::SeqCst);
    }

    fn stats(&self) -> AclStats {
        let decisions = self.decisions.lock().unwrap();
        let blocked = decisions.iter().filter(|d| d.is_blocked()).count() as u64;
        AclStats {
            allowed: decisions.len() as u64 - blocked,
            refused: self.refused() as u64,
            blocked,
            blocked_by_zone: vec![],
        }
    }
}
