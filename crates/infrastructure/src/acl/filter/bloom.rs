use super::linear::LinearFilter;
use super::AddressSet;
use ipnetwork::Ipv4Network;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Smallest number of host entries a filter is sized for. Keeps tiny lists
/// from ending up with a handful of bits and a high false-positive rate.
pub const MIN_CAPACITY: usize = 500;

/// Target false-positive probability at full capacity.
pub const FALSE_POSITIVE_RATE: f64 = 0.01;

/// Atomic Bloom filter over raw 4-byte address keys
struct AtomicBloom {
    bits: Vec<AtomicU64>,
    num_bits: usize,
    num_hashes: usize,
}

impl AtomicBloom {
    fn new(capacity: usize, fp_rate: f64) -> Self {
        let num_bits = Self::optimal_num_bits(capacity, fp_rate);
        let num_hashes = Self::optimal_num_hashes(capacity, num_bits);
        let num_words = num_bits.div_ceil(64);
        let bits = (0..num_words).map(|_| AtomicU64::new(0)).collect();
        Self {
            bits,
            num_bits,
            num_hashes,
        }
    }

    #[inline]
    fn check(&self, key: &[u8; 4]) -> bool {
        (0..self.num_hashes).all(|i| {
            let bit_idx = self.bit_index(key, i);
            let word = self.bits[bit_idx / 64].load(Ordering::Relaxed);
            (word & (1u64 << (bit_idx % 64))) != 0
        })
    }

    #[inline]
    fn set(&self, key: &[u8; 4]) {
        for i in 0..self.num_hashes {
            let bit_idx = self.bit_index(key, i);
            self.bits[bit_idx / 64].fetch_or(1u64 << (bit_idx % 64), Ordering::Relaxed);
        }
    }

    fn bit_index(&self, key: &[u8; 4], seed: usize) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        seed.hash(&mut hasher);
        (hasher.finish() as usize) % self.num_bits
    }

    fn optimal_num_bits(capacity: usize, fp_rate: f64) -> usize {
        let m = -1.0 * (capacity as f64) * fp_rate.ln() / (2.0_f64.ln().powi(2));
        (m.ceil() as usize).max(64)
    }

    fn optimal_num_hashes(capacity: usize, num_bits: usize) -> usize {
        let k = (num_bits as f64 / capacity as f64) * 2.0_f64.ln();
        k.ceil().max(1.0) as usize
    }
}

/// Approximate set for large lists of single addresses.
///
/// `/32` entries go into a Bloom filter keyed by the address octets
/// (expected O(1) lookup, false positives bounded by sizing, never false
/// negatives). Anything wider cannot be represented that way and falls
/// back to a [`LinearFilter`]. `contains` is true if either side says so.
///
/// The bit words are atomics, so a built filter can be shared across
/// threads and read concurrently without locking.
pub struct BloomFilter {
    hosts: AtomicBloom,
    subnets: LinearFilter,
    capacity: usize,
    host_count: usize,
}

impl BloomFilter {
    /// Size for `expected` entries: one and a half times the count, never
    /// less than [`MIN_CAPACITY`].
    pub fn with_expected(expected: usize) -> Self {
        let capacity = (expected + expected / 2).max(MIN_CAPACITY);
        Self {
            hosts: AtomicBloom::new(capacity, FALSE_POSITIVE_RATE),
            subnets: LinearFilter::new(),
            capacity,
            host_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Host entries held approximately.
    pub fn host_count(&self) -> usize {
        self.host_count
    }

    /// Subnet entries held in the exact fallback list.
    pub fn subnet_count(&self) -> usize {
        self.subnets.len()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloomFilter")
            .field("capacity", &self.capacity)
            .field("host_count", &self.host_count)
            .field("subnet_count", &self.subnets.len())
            .finish()
    }
}

impl AddressSet for BloomFilter {
    fn insert(&mut self, network: Ipv4Network) {
        if network.prefix() < 32 {
            self.subnets.insert(network);
            return;
        }

        let key = network.ip().octets();
        if self.hosts.check(&key) {
            // Already present (or a false positive); setting again is a no-op.
            return;
        }
        self.hosts.set(&key);
        self.host_count += 1;
        if self.host_count == self.capacity + 1 {
            warn!(
                capacity = self.capacity,
                "Bloom filter over capacity; false-positive rate will exceed target"
            );
        }
    }

    #[inline]
    fn contains(&self, addr: Ipv4Addr) -> bool {
        self.hosts.check(&addr.octets()) || self.subnets.contains(addr)
    }

    fn len(&self) -> usize {
        self.host_count + self.subnets.len()
    }
}
