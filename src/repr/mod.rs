/*!
# Graph Representations

Graphs are stored as one [`Neighborhood`] per vertex `1..=n`.
Neighborhoods are *ordered* sequences that may contain the same neighbor several times
(parallel edges). The stored order is meaningful: traversal-driven algorithms such as
[`Fleury`](crate::algo::Fleury) break ties by it, so removing a neighbor never reorders the rest.

Available representations:
- [`AdjList`]: neighborhoods stored as `Vec<Node>`,
- [`SparseAdjList`]: neighborhoods stored inline as `SmallVec<[Node; 8]>`, preferable for sparse graphs.
*/

use crate::{ops::*, *};

mod multigraph;
mod neighborhood;

pub use multigraph::*;
pub use neighborhood::*;

/// Trait for methods on the ordered Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the neighbors in their stored order
    fn as_slice(&self) -> &[Node];

    /// Returns the number of neighbors in the Neighborhood (counting multiplicity)
    fn num_of_neighbors(&self) -> NumNodes {
        self.as_slice().len() as NumNodes
    }

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> std::iter::Copied<std::slice::Iter<'_, Node>> {
        self.as_slice().iter().copied()
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.as_slice().contains(&v)
    }

    /// Returns how often `v` is in the Neighborhood
    fn multiplicity_of(&self, v: Node) -> NumNodes {
        self.neighbors().filter(|&u| u == v).count() as NumNodes
    }

    /// Appends a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, u: Node);

    /// Removes the first occurrence of `u` while keeping the order of all other neighbors.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;
}
