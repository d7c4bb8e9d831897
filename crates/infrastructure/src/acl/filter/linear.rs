use super::AddressSet;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

/// Plain list of networks; `contains` scans every entry.
///
/// Cheapest to build and the reference behaviour the other backends are
/// checked against. Also backs the non-host entries of the bloom backend.
#[derive(Debug, Clone, Default)]
pub struct LinearFilter {
    networks: Vec<Ipv4Network>,
}

impl LinearFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            networks: Vec::with_capacity(capacity),
        }
    }
}

impl AddressSet for LinearFilter {
    fn insert(&mut self, network: Ipv4Network) {
        self.networks.push(network);
    }

    #[inline]
    fn contains(&self, addr: Ipv4Addr) -> bool {
        self.networks.iter().any(|network| network.contains(addr))
    }

    fn len(&self) -> usize {
        self.networks.len()
    }
}
