use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V, i.e. `1..=n`.
    /// The range does not borrow `self` and hence may be used where mutable references are needed.
    fn vertices(&self) -> RangeInclusive<Node> {
        node_range(self.number_of_nodes())
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset_unset(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_node(&self, u: Node) -> bool {
        (1..=self.number_of_nodes()).contains(&u)
    }

    /// Returns `Err(MissingVertexError)` if `u` is not a vertex of the graph
    fn check_node(&self, u: Node) -> GraphResult<()> {
        if self.contains_node(u) {
            Ok(())
        } else {
            Err(MissingVertexError::new(u, self.number_of_nodes()))
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, i.e. the sum of all degrees divided by two.
    ///
    /// Under- or over-counts if the adjacency is not symmetric.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in their stored order.
    /// Parallel edges yield the same neighbor multiple times.
    /// ** Panics if `u` is not in `1..=n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Checked variant of [`AdjacencyList::neighbors_of`]
    fn try_neighbors_of(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check_node(u)?;
        Ok(self.neighbors_of(u))
    }

    /// Returns the number of edge-endpoints at `u` (counting multiplicity)
    /// ** Panics if `u` is not in `1..=n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the first neighbor of `u` in stored order if it exists
    /// ** Panics if `u` is not in `1..=n` **
    fn first_neighbor_of(&self, u: Node) -> Option<Node> {
        self.neighbors_of(u).next()
    }

    /// Returns an iterator over the degrees of all vertices in order `1..=n`
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over edges incident to `u` in stored order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u` is not in `1..=n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, every edge of a symmetric graph is reported exactly once
    /// (parallel edges once per copy).
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if `v` occurs in the neighborhood of `u`.
    /// Returns *false* (and does not panic) if `u` is not a vertex of the graph.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns how often `v` occurs in the neighborhood of `u` (`0` if `u` is unknown)
    fn edge_multiplicity(&self, u: Node, v: Node) -> NumNodes;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    /// ** Panics if `u` is not in `1..=n` **
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes `1..=n`
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges.
/// Every operation keeps the adjacency symmetric.
pub trait GraphEdgeEditing: GraphNew + GraphNodeOrder {
    /// Adds one copy of the edge `{u, v}` to the graph, appending to both neighborhoods.
    /// ** Panics if `u` or `v` is not in `1..=n` or `u == v` **
    fn add_edge(&mut self, u: Node, v: Node);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes one occurrence of `v` from the neighborhood of `u` and one occurrence of `u`
    /// from the neighborhood of `v`, keeping the stored order of the remaining neighbors.
    /// A side without such an occurrence is left untouched.
    ///
    /// Returns `Ok(true)` if `v` was a neighbor of `u` before.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<bool>;

    /// Removes one copy of the edge `{u, v}`; see [`GraphEdgeEditing::try_remove_edge`].
    /// Removing an edge that does not exist is permitted and a no-op.
    fn remove_edge(&mut self, u: Node, v: Node) -> GraphResult<()> {
        self.try_remove_edge(u, v).map(|_| ())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
