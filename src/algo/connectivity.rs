use itertools::Itertools;

use super::*;

/// Connectivity queries on undirected (multi-)graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns *true* if every vertex is reachable from vertex `1`.
    ///
    /// A graph without vertices is vacuously connected; a graph with isolated vertices
    /// (but more than one vertex) is not.
    fn is_connected(&self) -> bool {
        match self.vertices().next() {
            None => true,
            Some(start) => self.dfs(start).count() == self.len(),
        }
    }

    /// Returns the connected components of the graph, each as an ascending list of nodes.
    /// Components are ordered by their smallest node.
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut assigned = self.vertex_bitset_unset();
        let mut components = Vec::new();

        for u in self.vertices() {
            if assigned[u as usize] {
                continue;
            }

            let component = self.dfs(u).sorted().collect_vec();
            for &v in &component {
                assigned.set(v as usize, true);
            }
            components.push(component);
        }

        components
    }

    /// Returns the number of connected components (isolated vertices count as one each)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().len() as NumNodes
    }
}

impl<G: AdjacencyList> Connectivity for G {}
