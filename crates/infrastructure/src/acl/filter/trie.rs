use super::AddressSet;
use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

const ROOT: usize = 0;
const TOP_BIT: u32 = 0x8000_0000;

/// A node in the binary prefix trie. Children are indexes into the arena.
#[derive(Debug, Clone, Copy, Default)]
struct TrieNode {
    /// `children[0]` follows a 0 bit, `children[1]` a 1 bit.
    children: [Option<u32>; 2],
    /// A network ends here: every address below this node is contained.
    terminal: bool,
}

/// Binary trie over the 32 bits of an IPv4 address, most significant first.
///
/// Inserting `N/len` walks `len` bits from the root, creating nodes as
/// needed, and marks the last node terminal. `10.0.0.0/8` → 8 edges
/// (0,0,0,0,1,0,1,0) then `terminal = true`.
///
/// Lookup walks the address bits and answers true at the first terminal
/// node it visits, i.e. plain containment by any covering network, not
/// longest-prefix selection. Falling off the tree means not contained.
/// A `/0` marks the root itself, which matches everything.
///
/// Nodes live in one `Vec` so building a large trie does not allocate per
/// node; the structure is read-only once the owning rule is built.
#[derive(Debug, Clone)]
pub struct TrieFilter {
    nodes: Vec<TrieNode>,
    networks: usize,
}

impl TrieFilter {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            networks: 0,
        }
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child_or_insert(&mut self, node: usize, bit: usize) -> usize {
        if let Some(child) = self.nodes[node].children[bit] {
            return child as usize;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children[bit] = Some(child as u32);
        child
    }
}

impl Default for TrieFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSet for TrieFilter {
    fn insert(&mut self, network: Ipv4Network) {
        let mut bits = u32::from(network.network());
        let mut node = ROOT;
        for _ in 0..network.prefix() {
            let bit = usize::from(bits & TOP_BIT != 0);
            node = self.child_or_insert(node, bit);
            bits <<= 1;
        }
        self.nodes[node].terminal = true;
        self.networks += 1;
    }

    #[inline]
    fn contains(&self, addr: Ipv4Addr) -> bool {
        let mut bits = u32::from(addr);
        let mut node = ROOT;
        for _ in 0..32 {
            let current = &self.nodes[node];
            if current.terminal {
                return true;
            }
            let bit = usize::from(bits & TOP_BIT != 0);
            match current.children[bit] {
                Some(child) => node = child as usize,
                None => return false,
            }
            bits <<= 1;
        }
        self.nodes[node].terminal
    }

    fn len(&self) -> usize {
        self.networks
    }
}
