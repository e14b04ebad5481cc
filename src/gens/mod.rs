/*!
# Substructure Generators

Utility methods to add common motifs to an existing graph:

- **Paths**
- **Cycles**
- **Cliques**

Every call appends fresh edges, so connecting the same nodes twice creates parallel edges.
Useful when building test instances with known Eulerian properties: a union of edge-disjoint
cycles has only even degrees.

# Example

```rust
use eulerian::{prelude::*, gens::*};

let mut g = AdjList::new(5);
g.connect_path([1, 2, 3]);
g.connect_cycle([3, 4, 5]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(3, 5), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use crate::prelude::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. Fewer than three nodes are connected as a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given (distinct) nodes into a **clique**.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied());

        if nodes.len() > 2 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0]);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_and_cycle() {
        let mut g = AdjList::new(4);
        g.connect_path([1, 2, 3, 4]);
        assert_eq!(g.number_of_edges(), 3);

        let mut g = AdjList::new(4);
        g.connect_cycle([1, 2, 3, 4]);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.degrees().all(|d| d == 2));
        assert!(g.has_edge(4, 1));
    }

    #[test]
    fn short_cycle_is_a_path() {
        let mut g = AdjList::new(2);
        g.connect_cycle([1, 2]);
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn clique() {
        let mut g = AdjList::new(5);
        g.connect_clique([1, 3, 5]);
        assert_eq!(g.ordered_edges(true), vec![Edge(1, 3), Edge(1, 5), Edge(3, 5)]);
        assert_eq!(g.degree_of(2), 0);
    }
}
