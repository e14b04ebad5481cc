/*!
# Fleury's Algorithm

Builds an Eulerian circuit greedily: starting at a given vertex, repeatedly walk along an edge
of the current vertex that is *not* a bridge of the remaining graph and delete it. A bridge is
only crossed if the current vertex offers nothing else. The walk never backtracks.

Every step re-runs a bridge test on a clone of the working graph, so a single circuit costs
`O(m^2 (n + m))` which is fine for the small graphs this crate targets.

# Example
```
use eulerian::{prelude::*, algo::*};

let graph: AdjList = MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]]);
let circuit = graph.fleury_circuit(1).unwrap();

assert_eq!(circuit.as_slice(), &[1, 2, 3, 1]);
assert!(graph.is_eulerian_circuit(circuit.as_slice()));
```
*/

use itertools::Itertools;
use rayon::prelude::*;

use super::*;

/// Order in which the neighbors of the current vertex are offered to the bridge test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// First suitable neighbor in stored order
    #[default]
    StoredOrder,
    /// Smallest suitable neighbor
    Ascending,
}

/// Notion of "bridge" used when choosing the next edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeCheck {
    /// An edge is a bridge if its endpoints are disconnected after removing it
    /// (see [`Bridges::is_bridge_of_component`]). Always yields an Eulerian circuit on an
    /// Eulerian graph.
    #[default]
    Component,
    /// Uses [`Bridges::is_bridge`] on the whole working graph. As soon as one vertex has used up
    /// all its edges the working graph is disconnected and no edge counts as a bridge anymore,
    /// so the walk may get stuck before covering every edge.
    WholeGraph,
}

/// Configurable circuit builder implementing Fleury's algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Fleury {
    tie_break: TieBreak,
    bridge_check: BridgeCheck,
}

impl Fleury {
    /// Creates a builder with stored-order tie breaking and component-local bridge checks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }

    /// Updates the [`TieBreak`], consuming and returning `self` for chaining.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.set_tie_break(tie_break);
        self
    }

    pub fn set_bridge_check(&mut self, bridge_check: BridgeCheck) {
        self.bridge_check = bridge_check;
    }

    /// Updates the [`BridgeCheck`], consuming and returning `self` for chaining.
    pub fn bridge_check(mut self, bridge_check: BridgeCheck) -> Self {
        self.set_bridge_check(bridge_check);
        self
    }

    /// Walks from `start` until the current vertex has no unused edge left and returns the walk.
    ///
    /// The graph itself is never modified; all deletions happen on a private clone.
    /// On an Eulerian graph the result is an Eulerian circuit of length `m + 1`.
    /// Fails if `start` is not a vertex of the graph.
    pub fn run<G>(&self, graph: &G, start: Node) -> GraphResult<Circuit>
    where
        G: Bridges,
    {
        graph.check_node(start)?;

        let mut working = graph.clone();
        let mut circuit = vec![start];
        let mut current = start;

        while working.degree_of(current) > 0 {
            let next = self.next_vertex(&working, current)?;

            working.remove_edge(current, next)?;
            circuit.push(next);
            current = next;
        }

        debug!(start, edges = circuit.len() - 1, "walk finished");

        Ok(Circuit::new(circuit))
    }

    /// Runs [`Fleury::run`] once for every start vertex `1..=n`, in order.
    /// The first failing run aborts the whole computation.
    pub fn run_from_every_vertex<G>(&self, graph: &G) -> GraphResult<Vec<(Node, Circuit)>>
    where
        G: Bridges,
    {
        graph
            .vertices()
            .map(|start| self.run(graph, start).map(|circuit| (start, circuit)))
            .collect()
    }

    /// Like [`Fleury::run_from_every_vertex`], but every start vertex is processed by its own
    /// rayon task on an independent clone. The result is in ascending order of start vertices.
    pub fn par_run_from_every_vertex<G>(&self, graph: &G) -> GraphResult<Vec<(Node, Circuit)>>
    where
        G: Bridges + Sync,
    {
        graph
            .vertices()
            .collect_vec()
            .into_par_iter()
            .map(|start| self.run(graph, start).map(|circuit| (start, circuit)))
            .collect()
    }

    fn next_vertex<G>(&self, working: &G, current: Node) -> GraphResult<Node>
    where
        G: Bridges,
    {
        let mut candidates = working.neighbors_of(current).collect_vec();
        if self.tie_break == TieBreak::Ascending {
            candidates.sort_unstable();
        }

        for &v in &candidates {
            let is_bridge = match self.bridge_check {
                BridgeCheck::Component => working.is_bridge_of_component(current, v)?,
                BridgeCheck::WholeGraph => working.is_bridge(current, v)?,
            };

            if !is_bridge {
                return Ok(v);
            }
        }

        // only bridges left, the first one is as good as any other
        trace!(current, next = candidates[0], "crossing a bridge");
        Ok(candidates[0])
    }
}

/// Eulerian circuit construction exposed directly on graphs
pub trait EulerianCircuit: Bridges {
    /// Builds a circuit from `start` with the default [`Fleury`] configuration
    fn fleury_circuit(&self, start: Node) -> GraphResult<Circuit> {
        Fleury::new().run(self, start)
    }
}

impl<G: Bridges> EulerianCircuit for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::random_eulerian_graph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn bowtie() -> AdjList {
        MultiGraph::from_neighborhoods([
            vec![2, 3],
            vec![1, 3],
            vec![1, 2, 4, 5],
            vec![3, 5],
            vec![3, 4],
        ])
    }

    #[test]
    fn triangle_circuit() {
        let graph: AdjList = MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]]);
        let circuit = graph.fleury_circuit(1).unwrap();
        assert_eq!(circuit.as_slice(), &[1, 2, 3, 1]);
        assert!(graph.is_eulerian_circuit(circuit.as_slice()));

        assert_eq!(graph.fleury_circuit(3).unwrap().as_slice(), &[3, 1, 2, 3]);
    }

    #[test]
    fn isolated_vertex_circuit() {
        let graph = AdjList::new(1);
        let circuit = graph.fleury_circuit(1).unwrap();
        assert_eq!(circuit.as_slice(), &[1]);
        assert!(graph.is_eulerian_circuit(circuit.as_slice()));
    }

    #[test]
    fn bowtie_avoids_dead_end() {
        let graph = bowtie();
        let circuit = graph.fleury_circuit(1).unwrap();
        assert_eq!(circuit.as_slice(), &[1, 2, 3, 4, 5, 3, 1]);
        assert!(graph.is_eulerian_circuit(circuit.as_slice()));
    }

    #[test]
    fn whole_graph_check_gets_stuck() {
        let graph = bowtie();
        let circuit = Fleury::new()
            .bridge_check(BridgeCheck::WholeGraph)
            .run(&graph, 1)
            .unwrap();
        assert_eq!(circuit.as_slice(), &[1, 2, 3, 1]);
        assert!(!graph.is_eulerian_circuit(circuit.as_slice()));
    }

    #[test]
    fn ascending_tie_break() {
        let graph: AdjList =
            MultiGraph::from_neighborhoods([vec![4, 2], vec![1, 3], vec![2, 4], vec![3, 1]]);
        assert_eq!(graph.fleury_circuit(1).unwrap().as_slice(), &[1, 4, 3, 2, 1]);
        assert_eq!(
            Fleury::new()
                .tie_break(TieBreak::Ascending)
                .run(&graph, 1)
                .unwrap()
                .as_slice(),
            &[1, 2, 3, 4, 1]
        );
    }

    #[test]
    fn unknown_start_is_an_error() {
        let graph = bowtie();
        assert_eq!(graph.fleury_circuit(6), Err(MissingVertexError::new(6, 5)));
        assert_eq!(graph.fleury_circuit(0), Err(MissingVertexError::new(0, 5)));
    }

    #[test]
    fn graph_is_not_modified() {
        let graph = bowtie();
        let before = graph.clone();
        let _ = graph.fleury_circuit(3).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn complete_graphs_of_odd_order() {
        for n in [3, 5, 7] {
            let mut graph = AdjList::new(n);
            graph.connect_clique(1..=n);
            assert!(graph.is_eulerian());

            for (start, circuit) in Fleury::new().run_from_every_vertex(&graph).unwrap() {
                assert_eq!(circuit.start(), Some(start));
                assert_eq!(circuit.len() as NumEdges, graph.number_of_edges() + 1);
                assert!(graph.is_eulerian_circuit(circuit.as_slice()));
            }
        }
    }

    #[test]
    fn random_eulerian_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        for n in [3, 5, 8, 12] {
            for cycles in [1, 2, 4] {
                let graph = random_eulerian_graph(rng, n, cycles);
                assert!(graph.is_eulerian());

                for tie_break in [TieBreak::StoredOrder, TieBreak::Ascending] {
                    let fleury = Fleury::new().tie_break(tie_break);
                    for start in graph.vertices() {
                        let circuit = fleury.run(&graph, start).unwrap();
                        assert!(circuit.is_closed());
                        assert!(graph.is_eulerian_circuit(circuit.as_slice()));
                    }
                }
            }
        }
    }

    #[test]
    fn every_start_vertex_yields_a_circuit() {
        let isolated: AdjList = MultiGraph::from_neighborhoods([Vec::<Node>::new()]);
        let circuits = Fleury::new().run_from_every_vertex(&isolated).unwrap();
        assert_eq!(circuits, vec![(1, Circuit::new(vec![1]))]);

        let mut graph = AdjList::new(5);
        graph.connect_clique(1..=5);
        let fleury = Fleury::new();
        for circuits in [
            fleury.run_from_every_vertex(&graph).unwrap(),
            fleury.par_run_from_every_vertex(&graph).unwrap(),
        ] {
            assert_eq!(
                circuits.iter().map(|(start, _)| *start).collect_vec(),
                graph.vertices().collect_vec()
            );
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);
        let graph = random_eulerian_graph(rng, 10, 3);
        let fleury = Fleury::new();
        assert_eq!(
            fleury.run_from_every_vertex(&graph).unwrap(),
            fleury.par_run_from_every_vertex(&graph).unwrap()
        );
    }
}
