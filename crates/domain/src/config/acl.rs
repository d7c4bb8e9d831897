use serde::{Deserialize, Serialize};

/// Access-control configuration
///
/// ```toml
/// [acl]
/// zones = ["example.org"]
/// default_backend = "trie"
///
/// [[acl.rule_sets]]
/// zones = ["a.example.org"]
///
/// [[acl.rule_sets.policies]]
/// action = "allow"
/// qtype = "ANY"
/// net = ["PRIVATE"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AclConfig {
    /// Zones of the enclosing server block. Rule sets that name no zones
    /// inherit these (default: the root zone).
    #[serde(default = "default_zones")]
    pub zones: Vec<String>,

    /// Filter backend used by policies that do not pick one
    /// (default: "trie"). Options: "linear", "trie", "bloom"
    #[serde(default = "default_backend")]
    pub default_backend: String,

    /// Rule sets, evaluated in declaration order
    #[serde(default)]
    pub rule_sets: Vec<RuleSetConfig>,
}

impl Default for AclConfig {
    fn default() -> Self {
        Self {
            zones: default_zones(),
            default_backend: default_backend(),
            rule_sets: vec![],
        }
    }
}

fn default_zones() -> Vec<String> {
    vec![".".to_string()]
}

fn default_backend() -> String {
    "trie".to_string()
}

/// One `acl [ZONES...] { ... }` block
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleSetConfig {
    /// Zones this rule set protects; empty inherits `AclConfig::zones`
    #[serde(default)]
    pub zones: Vec<String>,

    /// Policies, first match wins
    #[serde(default)]
    pub policies: Vec<PolicyConfig>,
}

/// `ACTION type QTYPE net SOURCE...` or `ACTION type QTYPE file PATH`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PolicyConfig {
    /// "allow" or "block"
    pub action: String,

    /// Record type mnemonic, `TYPEnnn`, or "ANY" / "*"
    #[serde(default = "default_qtype")]
    pub qtype: String,

    /// CIDRs, bare addresses, or the keywords PRIVATE, LOCAL, ANY, *
    #[serde(default)]
    pub net: Vec<String>,

    /// File with one network per line (`#` comments allowed)
    #[serde(default)]
    pub file: Option<String>,

    /// Overrides `AclConfig::default_backend` for this policy
    #[serde(default)]
    pub backend: Option<String>,
}

fn default_qtype() -> String {
    "ANY".to_string()
}

impl PolicyConfig {
    /// Convenience constructor for an inline `net` policy.
    pub fn new(action: &str, qtype: &str, net: &[&str]) -> Self {
        Self {
            action: action.to_string(),
            qtype: qtype.to_string(),
            net: net.iter().map(|n| n.to_string()).collect(),
            file: None,
            backend: None,
        }
    }

    pub fn with_backend(mut self, backend: &str) -> Self {
        self.backend = Some(backend.to_string());
        self
    }
}
