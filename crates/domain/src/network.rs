use crate::errors::DomainError;
use ipnetwork::Ipv4Network;
use std::str::FromStr;

/// All addresses reserved for private networks (RFC 1918).
pub const PRIVATE_NETWORKS: [&str; 3] = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];

/// The single network covering the whole IPv4 space.
pub const ANY_NETWORK: &str = "0.0.0.0/0";

/// Symbolic address sets usable in a policy's `net` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKeyword {
    /// The three RFC 1918 blocks.
    Private,
    /// IPv4 networks bound to local interfaces at load time.
    Local,
    /// `ANY` or `*`: every IPv4 address.
    Any,
}

impl NetworkKeyword {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "*" => Some(NetworkKeyword::Any),
            t if t.eq_ignore_ascii_case("ANY") => Some(NetworkKeyword::Any),
            t if t.eq_ignore_ascii_case("PRIVATE") => Some(NetworkKeyword::Private),
            t if t.eq_ignore_ascii_case("LOCAL") => Some(NetworkKeyword::Local),
            _ => None,
        }
    }
}

/// Expand keywords in a raw `net` list into concrete CIDR strings.
///
/// `local` is only invoked when `LOCAL` appears. `ANY` short-circuits the
/// whole list to [`ANY_NETWORK`], since nothing else can widen it further.
pub fn expand_keywords<S, F>(raw: &[S], mut local: F) -> Vec<String>
where
    S: AsRef<str>,
    F: FnMut() -> Vec<String>,
{
    let mut nets = Vec::with_capacity(raw.len());
    for token in raw {
        let token = token.as_ref().trim();
        match NetworkKeyword::parse(token) {
            Some(NetworkKeyword::Any) => return vec![ANY_NETWORK.to_string()],
            Some(NetworkKeyword::Private) => {
                nets.extend(PRIVATE_NETWORKS.iter().map(|n| n.to_string()))
            }
            Some(NetworkKeyword::Local) => nets.extend(local()),
            None if token.is_empty() => {}
            None => nets.push(token.to_string()),
        }
    }
    nets
}

/// Append `/32` to a bare address.
pub fn normalize_network(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains('/') {
        raw.to_string()
    } else {
        format!("{}/32", raw)
    }
}

/// Parse an IPv4 CIDR (or bare address) and clear its host bits.
///
/// `10.1.2.3/8` → `10.0.0.0/8`. IPv6 input is rejected.
pub fn parse_ipv4_network(raw: &str) -> Result<Ipv4Network, DomainError> {
    let normalized = normalize_network(raw);
    let parsed = Ipv4Network::from_str(&normalized)
        .map_err(|_| DomainError::InvalidCidr(raw.trim().to_string()))?;
    Ipv4Network::new(parsed.network(), parsed.prefix())
        .map_err(|_| DomainError::InvalidCidr(raw.trim().to_string()))
}

/// Drop everything after `#` and surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// Parse the contents of a network list file: one entry per line, `#`
/// comments and blank lines ignored.
pub fn parse_network_list(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_comment)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
