/*!
# Node Representation

Vertices are identified by `Node = u32` and numbered `1..=n`, as in the adjacency-list text format.
The value `0` never denotes a vertex, which keeps `Node` usable directly as an index into
bitsets of size `n + 1` without any shifting.
*/

use bitvec::vec::BitVec;

/// Vertices are numbered `1..=n`
pub type Node = u32;

/// Node-Value that is never a valid vertex
pub const INVALID_NODE: Node = 0;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, indexed directly by the node value (bit `0` is unused)
pub type NodeBitSet = BitVec;

/// Returns an empty [`NodeBitSet`] that can hold all nodes `1..=n`
pub fn node_bitset_unset(n: NumNodes) -> NodeBitSet {
    BitVec::repeat(false, n as usize + 1)
}

/// Returns an iterator over all vertices `1..=n`
pub fn node_range(n: NumNodes) -> std::ops::RangeInclusive<Node> {
    1..=n
}
