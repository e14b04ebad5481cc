//! Seeded random instances shared by the unit tests

use itertools::Itertools;
use rand::{Rng, seq::SliceRandom};

use crate::{gens::*, prelude::*};

/// Creates a multigraph on `1..=n` with `m` random edges (self-loops are re-drawn, parallel
/// edges may occur). For `n < 2` the graph is edgeless.
pub(crate) fn random_multigraph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> AdjList {
    let mut graph = AdjList::new(n);
    if n < 2 {
        return graph;
    }

    for _ in 0..m {
        let u = rng.random_range(1..=n);
        let v = loop {
            let v = rng.random_range(1..=n);
            if v != u {
                break v;
            }
        };
        graph.add_edge(u, v);
    }

    graph
}

/// Creates a connected simple graph on `1..=n` (`n >= 3`) with only even degrees: a Hamiltonian
/// cycle over a random permutation plus up to `extra_cycles` random cycles of length at least
/// three. Cycles that would create a parallel edge are re-drawn a few times and then skipped.
pub(crate) fn random_eulerian_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    extra_cycles: usize,
) -> AdjList {
    assert!(n >= 3);
    let mut graph = AdjList::new(n);

    let mut nodes = (1..=n).collect_vec();
    nodes.shuffle(rng);
    graph.connect_cycle(nodes.iter().copied());

    for _ in 0..extra_cycles {
        for _attempt in 0..20 {
            nodes.shuffle(rng);
            let len = rng.random_range(3..=n as usize);
            let cycle = &nodes[..len];

            let is_new = cycle
                .iter()
                .circular_tuple_windows()
                .all(|(&u, &v)| !graph.has_edge(u, v));
            if is_new {
                graph.connect_cycle(cycle.iter().copied());
                break;
            }
        }
    }

    graph
}
