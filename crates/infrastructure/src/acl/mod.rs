//! Zone-scoped access control for DNS queries.
//!
//! ```text
//! AclConfig ─compile─▶ RuleSets [ZoneRuleSet [PolicyRule (AddressFilter)]]
//!                          ▲
//! AclEngine ── ArcSwap ────┘   evaluate(query) → Decision
//! ```

pub mod compiler;
pub mod engine;
pub mod filter;
pub mod interfaces;
pub mod metrics;
pub mod policy;

pub use compiler::{compile_rule_sets, load_network_file, resolve_networks};
pub use engine::{AclEngine, RuleSets};
pub use filter::{AddressFilter, AddressSet, BloomFilter, FilterBackend, LinearFilter, TrieFilter};
pub use metrics::AclMetrics;
pub use policy::{PolicyRule, ZoneRuleSet};
