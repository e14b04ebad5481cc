/*!
# Circuits

A [`Circuit`] is the sequence of vertices visited by a walk; consecutive vertices are joined by
an edge of the source graph. [`CircuitValidation::is_eulerian_circuit`] checks that a walk is
closed, uses only existing edges, never reuses an edge and covers the whole graph.
*/

use std::fmt::Display;

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// An ordered sequence of vertices produced by a walk through a graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Circuit(Vec<Node>);

impl Circuit {
    /// Wraps the visited vertices of a walk
    pub fn new(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }

    /// Returns the visited vertices in walk order
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    /// Number of visited vertices (start vertex included)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the start vertex of the walk
    pub fn start(&self) -> Option<Node> {
        self.0.first().copied()
    }

    /// Returns *true* if the walk is non-empty and ends where it starts
    pub fn is_closed(&self) -> bool {
        !self.0.is_empty() && self.0.first() == self.0.last()
    }

    /// Number of traversed edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.0.len().saturating_sub(1) as NumEdges
    }

    /// Returns the traversed edges in walk order and orientation
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.0.iter().copied().tuple_windows().map(|(u, v)| Edge(u, v))
    }
}

impl From<Vec<Node>> for Circuit {
    fn from(nodes: Vec<Node>) -> Self {
        Self(nodes)
    }
}

impl AsRef<[Node]> for Circuit {
    fn as_ref(&self) -> &[Node] {
        &self.0
    }
}

impl Display for Circuit {
    /// Formats the walk as `1 -> 2 -> 3 -> 1`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" -> "))
    }
}

/// Validation of walks against a source graph
pub trait CircuitValidation: AdjacencyTest + GraphEdgeOrder {
    /// Returns *true* if `circuit` is an Eulerian circuit of the graph:
    /// - it is non-empty and closed,
    /// - every step `(u, v)` follows an edge of the graph,
    /// - no edge `{u, v}` is used twice (in either orientation),
    /// - the number of distinct used edges equals the number of edges of the graph.
    ///
    /// Edges are identified by their unordered endpoints, hence parallel edges are
    /// indistinguishable and at most one copy of them can ever be accounted for.
    fn is_eulerian_circuit(&self, circuit: &[Node]) -> bool {
        if circuit.is_empty() || circuit.first() != circuit.last() {
            debug!(len = circuit.len(), "walk is not closed");
            return false;
        }

        let mut visited_edges: FxHashSet<Edge> = Default::default();
        for (&u, &v) in circuit.iter().tuple_windows() {
            if !self.has_edge(u, v) {
                debug!(u, v, "walk uses a missing edge");
                return false;
            }

            if !visited_edges.insert(Edge(u, v).normalized()) {
                debug!(u, v, "walk reuses an edge");
                return false;
            }
        }

        visited_edges.len() == self.number_of_edges() as usize
    }
}

impl<G: AdjacencyTest + GraphEdgeOrder> CircuitValidation for G {}

#[cfg(test)]
mod test {
    use super::*;

    fn triangle() -> AdjList {
        MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]])
    }

    #[test]
    fn circuit_accessors() {
        let circuit = Circuit::new(vec![1, 2, 3, 1]);
        assert!(circuit.is_closed());
        assert_eq!(circuit.start(), Some(1));
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.number_of_edges(), 3);
        assert_eq!(
            circuit.edges().collect_vec(),
            vec![Edge(1, 2), Edge(2, 3), Edge(3, 1)]
        );
        assert_eq!(circuit.to_string(), "1 -> 2 -> 3 -> 1");

        assert!(!Circuit::default().is_closed());
        assert_eq!(Circuit::default().number_of_edges(), 0);
        assert_eq!(Circuit::from(vec![4]).to_string(), "4");
    }

    #[test]
    fn valid_triangle_circuits() {
        let graph = triangle();
        assert!(graph.is_eulerian_circuit(&[1, 2, 3, 1]));
        assert!(graph.is_eulerian_circuit(&[1, 3, 2, 1]));
        assert!(graph.is_eulerian_circuit(&[2, 1, 3, 2]));
    }

    #[test]
    fn rejects_open_or_empty_walks() {
        let graph = triangle();
        assert!(!graph.is_eulerian_circuit(&[]));
        assert!(!graph.is_eulerian_circuit(&[1, 2, 3]));
    }

    #[test]
    fn rejects_missing_edges() {
        let graph = AdjList::from_edges(4, [(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(!graph.is_eulerian_circuit(&[1, 3, 2, 1]));
        assert!(!graph.is_eulerian_circuit(&[9, 9]));
    }

    #[test]
    fn rejects_reused_edges() {
        let graph = triangle();
        assert!(!graph.is_eulerian_circuit(&[1, 2, 1]));
        assert!(!graph.is_eulerian_circuit(&[1, 2, 3, 1, 2, 3, 1]));
    }

    #[test]
    fn rejects_partial_cover() {
        let graph = AdjList::from_edges(5, [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]);
        assert!(!graph.is_eulerian_circuit(&[1, 2, 3, 1]));
        assert!(graph.is_eulerian_circuit(&[1, 2, 3, 4, 5, 3, 1]));
    }

    #[test]
    fn single_vertex_circuit() {
        let graph = AdjList::new(1);
        assert!(graph.is_eulerian_circuit(&[1]));
    }

    #[test]
    fn parallel_edges_cannot_be_covered() {
        let graph: AdjList = MultiGraph::from_neighborhoods([vec![2, 2], vec![1, 1]]);
        assert!(!graph.is_eulerian_circuit(&[1, 2, 1]));
    }
}
