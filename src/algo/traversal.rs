/*!
Graph traversal iterators.

[`TraversalSearch`] maintains an explicit frontier of nodes to visit and a bitset of
discovered nodes. The frontier type decides the order:

- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**

Parallel edges are harmless: a node is pushed at most once.
*/

use super::*;
use std::collections::VecDeque;

/// Abstraction for the traversal frontier data structure.
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
/// Yields every node reachable from the start node exactly once, the start node first.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
}

/// A breadth-first search iterator using a queue (`VecDeque`).
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>>;

/// A depth-first search iterator using a stack (`Vec`).
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start` is not in `1..=n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        Self {
            graph,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Returns *true* if `u` was already discovered by the search
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Number of nodes discovered so far (including those still on the frontier)
    pub fn number_of_visited_nodes(&self) -> NumNodes {
        self.visited.count_ones() as NumNodes
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.replace(v as usize, true) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.graph.len() - self.visited.count_ones()),
        )
    }
}

/// Traversal algorithms exposed directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first-search order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}
