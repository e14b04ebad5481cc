use std::fmt::Debug;

use super::*;

/// An undirected, loop-free multigraph over the vertices `1..=n`.
///
/// The graph is value-like: [`Clone`] produces a deep copy that shares no neighborhood with
/// its source, so algorithms mutate private clones and never the caller's graph.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MultiGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
}

/// Representation using a `Vec<Node>` per vertex
pub type AdjList = MultiGraph<ArrNeighborhood>;

/// Representation using an inline `SmallVec` per vertex
pub type SparseAdjList = MultiGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> MultiGraph<Nbs> {
    /// Builds a graph from already parsed neighborhoods, the `i`-th entry (0-indexed) being
    /// the neighborhood of vertex `i + 1`.
    ///
    /// The neighborhoods are taken as they are: it is up to the caller to only reference
    /// vertices `1..=n` and to keep the adjacency symmetric.
    pub fn from_neighborhoods<I, N>(neighborhoods: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: IntoIterator<Item = Node>,
        Nbs: FromIterator<Node>,
    {
        Self {
            nbs: neighborhoods
                .into_iter()
                .map(|nb| nb.into_iter().collect())
                .collect(),
        }
    }

    #[inline]
    fn slot(u: Node) -> usize {
        debug_assert_ne!(u, INVALID_NODE);
        u as usize - 1
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for MultiGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for MultiGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        let endpoints: NumEdges = self.nbs.iter().map(|nb| nb.num_of_neighbors()).sum();
        endpoints / 2
    }
}

impl<Nbs: Neighborhood> AdjacencyList for MultiGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[Self::slot(u)].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[Self::slot(u)].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> NeighborsSlice for MultiGraph<Nbs> {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[Self::slot(u)].as_slice()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for MultiGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.contains_node(u) && self.nbs[Self::slot(u)].has_neighbor(v)
    }

    fn edge_multiplicity(&self, u: Node, v: Node) -> NumNodes {
        if self.contains_node(u) {
            self.nbs[Self::slot(u)].multiplicity_of(v)
        } else {
            0
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for MultiGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::default(); n as usize],
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for MultiGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(
            self.contains_node(u) && self.contains_node(v),
            "edge {} references an unknown vertex",
            Edge(u, v)
        );
        assert_ne!(u, v, "self-loops are not supported");

        self.nbs[Self::slot(u)].add_neighbor(v);
        self.nbs[Self::slot(v)].add_neighbor(u);
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let removed = self.nbs[Self::slot(u)].try_remove_neighbor(v);
        if u != v {
            self.nbs[Self::slot(v)].try_remove_neighbor(u);
        }
        Ok(removed)
    }
}

impl<Nbs: Neighborhood> Debug for MultiGraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.nbs
                    .iter()
                    .enumerate()
                    .map(|(i, nb)| (i + 1, nb.as_slice())),
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn triangle<Nbs: Neighborhood + FromIterator<Node>>() -> MultiGraph<Nbs> {
        MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]])
    }

    #[test]
    fn clone_is_independent() {
        let graph: AdjList = triangle();
        let mut clone = graph.clone();

        clone.remove_edge(1, 2).unwrap();
        assert!(!clone.has_edge(1, 2));
        assert!(!clone.has_edge(2, 1));

        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(clone.number_of_edges(), 2);
    }

    #[test]
    fn remove_single_copy_of_parallel_edge() {
        let mut graph: SparseAdjList = MultiGraph::from_neighborhoods([vec![2, 3, 2], vec![1, 1], vec![1]]);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edge_multiplicity(1, 2), 2);

        assert!(graph.try_remove_edge(2, 1).unwrap());
        assert_eq!(graph.edge_multiplicity(1, 2), 1);
        assert_eq!(graph.edge_multiplicity(2, 1), 1);
        assert_eq!(graph.as_neighbors_slice(1), &[3, 2]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn remove_missing_edge_is_permissive() {
        let mut graph: AdjList = MultiGraph::from_neighborhoods([vec![2], vec![1], vec![]]);
        assert!(!graph.try_remove_edge(1, 3).unwrap());
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.as_neighbors_slice(1), &[2]);
    }

    #[test]
    fn remove_unknown_vertex_fails() {
        let mut graph: AdjList = triangle();
        assert_eq!(
            graph.remove_edge(1, 4),
            Err(MissingVertexError::new(4, 3))
        );
        assert_eq!(
            graph.remove_edge(0, 1),
            Err(MissingVertexError::new(0, 3))
        );
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn edge_queries() {
        let graph: AdjList = triangle();
        assert!(graph.has_edge(1, 3));
        assert!(!graph.has_edge(1, 1));
        assert!(!graph.has_edge(9, 1));
        assert!(!graph.has_edge(0, 1));
        assert!(graph.has_edge(3, 2) && graph.has_edge(2, 3));

        assert_eq!(graph.ordered_edges(true), vec![Edge(1, 2), Edge(1, 3), Edge(2, 3)]);
        assert_eq!(graph.degrees().collect_vec(), vec![2, 2, 2]);
        assert_eq!(graph.first_neighbor_of(2), Some(1));
        assert!(graph.try_neighbors_of(4).is_err());
        assert_eq!(graph.try_neighbors_of(3).unwrap().collect_vec(), vec![1, 2]);
    }

    #[test]
    fn from_edges_appends_in_order() {
        let graph = AdjList::from_edges(4, [(1, 2), (3, 1), (1, 4), (2, 3)]);
        assert_eq!(graph.as_neighbors_slice(1), &[2, 3, 4]);
        assert_eq!(graph.as_neighbors_slice(3), &[1, 2]);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.vertices_with_neighbors().collect_vec(), vec![1, 2, 3, 4]);
        assert_eq!(graph.max_degree(), 3);
    }

    #[test]
    fn debug_lists_neighborhoods() {
        let graph: AdjList = MultiGraph::from_neighborhoods([vec![2], vec![1]]);
        assert_eq!(format!("{graph:?}"), "{1: [2], 2: [1]}");
    }

    #[test]
    #[should_panic]
    fn add_self_loop_panics() {
        let mut graph = AdjList::new(2);
        graph.add_edge(2, 2);
    }
}
