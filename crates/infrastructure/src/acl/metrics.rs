use dashmap::DashMap;
use dnsacl_application::ports::DecisionSink;
use dnsacl_domain::{AclStats, Decision};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Decision counters.
///
/// `allowed` / `refused` are plain atomics; blocked queries are counted per
/// zone in a DashMap so concurrent workers only contend on the same zone.
#[derive(Clone)]
pub struct AclMetrics {
    allowed: Arc<AtomicU64>,
    refused: Arc<AtomicU64>,
    blocked_by_zone: Arc<DashMap<Arc<str>, u64, FxBuildHasher>>,
}

impl AclMetrics {
    pub fn new() -> Self {
        Self {
            allowed: Arc::new(AtomicU64::new(0)),
            refused: Arc::new(AtomicU64::new(0)),
            blocked_by_zone: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    pub fn allowed(&self) -> u64 {
        self.allowed.load(Ordering::Relaxed)
    }

    pub fn refused(&self) -> u64 {
        self.refused.load(Ordering::Relaxed)
    }

    pub fn blocked_for_zone(&self, zone: &str) -> u64 {
        self.blocked_by_zone.get(zone).map(|c| *c).unwrap_or(0)
    }

    pub fn blocked(&self) -> u64 {
        self.blocked_by_zone.iter().map(|entry| *entry.value()).sum()
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.allowed.store(0, Ordering::Relaxed);
        self.refused.store(0, Ordering::Relaxed);
        self.blocked_by_zone.clear();
    }
}

impl Default for AclMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSink for AclMetrics {
    fn record(&self, decision: &Decision) {
        match decision {
            Decision::Allowed => {
                self.allowed.fetch_add(1, Ordering::Relaxed);
            }
            Decision::Blocked { zone, .. } => {
                *self.blocked_by_zone.entry(Arc::clone(zone)).or_insert(0) += 1;
            }
        }
    }

    fn record_refused(&self) {
        self.refused.fetch_add(1, Ordering::Relaxed);
    }

    fn stats(&self) -> AclStats {
        let mut blocked_by_zone: Vec<(String, u64)> = self
            .blocked_by_zone
            .iter()
            .map(|entry| (entry.key().to_string(), *entry.value()))
            .collect();
        blocked_by_zone.sort();

        AclStats {
            allowed: self.allowed(),
            refused: self.refused(),
            blocked: blocked_by_zone.iter().map(|(_, count)| count).sum(),
            blocked_by_zone,
        }
    }
}
