use super::*;

/// Tests for the existence of an Eulerian circuit
pub trait Eulerian: AdjacencyList + Sized {
    /// Returns an iterator over all vertices of odd degree in ascending order
    fn odd_degree_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) % 2 == 1)
    }

    /// Returns *true* if the graph admits an Eulerian circuit, i.e. if every vertex has even
    /// degree and the graph is connected.
    ///
    /// Isolated vertices count towards connectivity: an edgeless graph is only Eulerian if it
    /// has at most one vertex.
    fn is_eulerian(&self) -> bool {
        if let Some(u) = self.odd_degree_vertices().next() {
            trace!(u, degree = self.degree_of(u), "odd degree");
            return false;
        }

        self.is_connected()
    }
}

impl<G: AdjacencyList> Eulerian for G {}
