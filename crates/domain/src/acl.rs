use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// What a matching policy does with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyAction {
    Allow,
    Block,
}

impl PolicyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyAction::Allow => "allow",
            PolicyAction::Block => "block",
        }
    }
}

impl fmt::Display for PolicyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(PolicyAction::Allow),
            "block" => Ok(PolicyAction::Block),
            _ => Err(DomainError::InvalidAction(s.to_string())),
        }
    }
}

/// Everything the engine needs to know about one inbound query.
#[derive(Debug, Clone, Copy)]
pub struct AclQuery<'a> {
    /// Source address as received from the transport; parsed lazily.
    pub source: &'a str,
    pub name: &'a str,
    pub qtype: u16,
    pub question_count: usize,
}

impl<'a> AclQuery<'a> {
    /// A single-question query.
    pub fn new(source: &'a str, name: &'a str, qtype: u16) -> Self {
        Self {
            source,
            name,
            qtype,
            question_count: 1,
        }
    }

    pub fn with_question_count(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }
}

/// Position of the policy that produced a block: rule set index, then
/// policy index within that set, both in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleRef {
    pub rule_set: usize,
    pub policy: usize,
}

impl fmt::Display for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rule_set, self.policy)
    }
}

/// Outcome of evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Blocked { zone: Arc<str>, rule: RuleRef },
}

impl Decision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Blocked { .. })
    }

    pub fn zone(&self) -> Option<&str> {
        match self {
            Decision::Blocked { zone, .. } => Some(zone),
            Decision::Allowed => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allowed => write!(f, "ALLOWED"),
            Decision::Blocked { zone, rule } => write!(f, "BLOCKED zone={} rule={}", zone, rule),
        }
    }
}

/// Counters reported by a decision sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AclStats {
    pub allowed: u64,
    pub refused: u64,
    pub blocked: u64,
    /// Blocked counts per zone, sorted by zone name.
    pub blocked_by_zone: Vec<(String, u64)>,
}
