//! Address-membership filters.
//!
//! Three interchangeable backends answer "is this address inside any of the
//! networks added to me". The engine only sees [`AddressFilter`]; which
//! backend a policy uses is decided when the rule is built.

pub mod bloom;
pub mod linear;
pub mod trie;

pub use bloom::BloomFilter;
pub use linear::LinearFilter;
pub use trie::TrieFilter;

use dnsacl_domain::DomainError;
use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Capability shared by every backend.
///
/// `insert` receives a network with its host bits already cleared and must
/// tolerate duplicates. `contains` never fails.
pub trait AddressSet {
    fn insert(&mut self, network: Ipv4Network);

    fn contains(&self, addr: Ipv4Addr) -> bool;

    /// Number of networks added (duplicates may be counted).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Backend selector, as named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterBackend {
    Linear,
    Trie,
    Bloom,
}

impl FilterBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterBackend::Linear => "linear",
            FilterBackend::Trie => "trie",
            FilterBackend::Bloom => "bloom",
        }
    }
}

impl fmt::Display for FilterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterBackend {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "naive" => Ok(FilterBackend::Linear),
            "trie" => Ok(FilterBackend::Trie),
            "bloom" | "probabilistic" | "cuckoo" => Ok(FilterBackend::Bloom),
            _ => Err(DomainError::UnrecognizedFilterBackend(s.to_string())),
        }
    }
}

/// A policy's address set, one of the closed set of backends.
#[derive(Debug)]
pub enum AddressFilter {
    Linear(LinearFilter),
    Trie(TrieFilter),
    Bloom(BloomFilter),
}

impl AddressFilter {
    /// An empty filter of the given kind, sized for `expected` networks.
    pub fn new(backend: FilterBackend, expected: usize) -> Self {
        match backend {
            FilterBackend::Linear => AddressFilter::Linear(LinearFilter::with_capacity(expected)),
            FilterBackend::Trie => AddressFilter::Trie(TrieFilter::new()),
            FilterBackend::Bloom => AddressFilter::Bloom(BloomFilter::with_expected(expected)),
        }
    }

    /// Build a filter holding all of `networks`.
    pub fn build(backend: FilterBackend, networks: &[Ipv4Network]) -> Result<Self, DomainError> {
        let mut filter = Self::new(backend, networks.len());
        for network in networks {
            filter.add(network.ip(), network.prefix())?;
        }
        Ok(filter)
    }

    pub fn backend(&self) -> FilterBackend {
        match self {
            AddressFilter::Linear(_) => FilterBackend::Linear,
            AddressFilter::Trie(_) => FilterBackend::Trie,
            AddressFilter::Bloom(_) => FilterBackend::Bloom,
        }
    }

    /// Add `network/prefix_len`. Host bits below the prefix are ignored.
    pub fn add(&mut self, network: Ipv4Addr, prefix_len: u8) -> Result<(), DomainError> {
        let parsed = Ipv4Network::new(network, prefix_len)
            .and_then(|n| Ipv4Network::new(n.network(), prefix_len))
            .map_err(|e| DomainError::FilterInsertFailure {
                network: format!("{}/{}", network, prefix_len),
                reason: e.to_string(),
            })?;
        self.inner_mut().insert(parsed);
        Ok(())
    }

    #[inline]
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.inner().contains(addr)
    }

    /// IPv4 sources are checked directly and IPv4-mapped IPv6 sources are
    /// unmapped first. Any other IPv6 source is in no filter.
    #[inline]
    pub fn contains_ip(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.contains(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped().is_some_and(|v4| self.contains(v4)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner().is_empty()
    }

    fn inner(&self) -> &dyn AddressSet {
        match self {
            AddressFilter::Linear(f) => f,
            AddressFilter::Trie(f) => f,
            AddressFilter::Bloom(f) => f,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn AddressSet {
        match self {
            AddressFilter::Linear(f) => f,
            AddressFilter::Trie(f) => f,
            AddressFilter::Bloom(f) => f,
        }
    }
}
