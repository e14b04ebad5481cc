/*!
# Analysis Reports

Drives the full analysis of a graph and renders it as text:

1. test whether the graph is Eulerian,
2. if it is not, enumerate its bridges,
3. if it is, build a circuit from every start vertex with [`Fleury`] and validate each one.

```
use eulerian::{prelude::*, report::*};

let graph: AdjList = MultiGraph::from_neighborhoods([vec![2], vec![1]]);
let analysis = Analyzer::new().analyze(&graph).unwrap();

assert!(!analysis.is_eulerian);
assert_eq!(analysis.to_string(), "Is eulerian: false\n(1, 2) is a bridge\n(2, 1) is a bridge\n");
```
*/

use std::fmt::Display;

use tracing::{debug, info};

use crate::{algo::*, prelude::*};

/// Circuit built from a single start vertex together with its validation verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitReport {
    pub start: Node,
    pub circuit: Circuit,
    pub is_valid: bool,
}

/// Result of [`Analyzer::analyze`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub is_eulerian: bool,
    /// Bridges of a non-Eulerian graph (empty for Eulerian graphs)
    pub bridges: Vec<Edge>,
    /// One circuit per start vertex of an Eulerian graph (empty otherwise)
    pub circuits: Vec<CircuitReport>,
}

impl Analysis {
    /// Returns *true* if every produced circuit passed validation
    pub fn all_circuits_valid(&self) -> bool {
        self.circuits.iter().all(|c| c.is_valid)
    }
}

impl Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Is eulerian: {}", self.is_eulerian)?;

        for bridge in &self.bridges {
            writeln!(f, "{bridge} is a bridge")?;
        }

        for report in &self.circuits {
            writeln!(
                f,
                "Starting from {}: {} ({})",
                report.start, report.circuit, report.is_valid
            )?;
        }

        Ok(())
    }
}

/// Configurable driver of the whole analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    bridge_strategy: BridgeStrategy,
    fleury: Fleury,
    parallel: bool,
}

impl Analyzer {
    /// Creates an analyzer scanning all vertex pairs for bridges and building circuits
    /// sequentially with the default [`Fleury`] configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bridge_strategy(&mut self, strategy: BridgeStrategy) {
        self.bridge_strategy = strategy;
    }

    /// Updates the [`BridgeStrategy`], consuming and returning `self` for chaining.
    pub fn bridge_strategy(mut self, strategy: BridgeStrategy) -> Self {
        self.set_bridge_strategy(strategy);
        self
    }

    pub fn set_fleury(&mut self, fleury: Fleury) {
        self.fleury = fleury;
    }

    /// Updates the circuit builder, consuming and returning `self` for chaining.
    pub fn fleury(mut self, fleury: Fleury) -> Self {
        self.set_fleury(fleury);
        self
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    /// If *true*, circuits for different start vertices are built concurrently.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Analyzes the graph; see the [module documentation](self).
    pub fn analyze<G>(&self, graph: &G) -> GraphResult<Analysis>
    where
        G: Bridges + GraphEdgeOrder + Sync,
    {
        let is_eulerian = graph.is_eulerian();
        info!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            is_eulerian,
            "analyzing graph"
        );

        if !is_eulerian {
            let bridges = graph.bridges_with(self.bridge_strategy);
            debug!(strategy = ?self.bridge_strategy, bridges = bridges.len(), "bridges found");
            return Ok(Analysis {
                is_eulerian,
                bridges,
                circuits: Vec::new(),
            });
        }

        let circuits = if self.parallel {
            self.fleury.par_run_from_every_vertex(graph)?
        } else {
            self.fleury.run_from_every_vertex(graph)?
        };

        let circuits = circuits
            .into_iter()
            .map(|(start, circuit)| {
                let is_valid = graph.is_eulerian_circuit(circuit.as_slice());
                CircuitReport {
                    start,
                    circuit,
                    is_valid,
                }
            })
            .collect();

        Ok(Analysis {
            is_eulerian,
            bridges: Vec::new(),
            circuits,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle_report() {
        let graph: AdjList = MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]]);
        let analysis = Analyzer::new().analyze(&graph).unwrap();

        assert!(analysis.is_eulerian);
        assert!(analysis.bridges.is_empty());
        assert!(analysis.all_circuits_valid());
        assert_eq!(
            analysis.to_string(),
            "Is eulerian: true\n\
             Starting from 1: 1 -> 2 -> 3 -> 1 (true)\n\
             Starting from 2: 2 -> 1 -> 3 -> 2 (true)\n\
             Starting from 3: 3 -> 1 -> 2 -> 3 (true)\n"
        );
    }

    #[test]
    fn two_triangles_report() {
        let graph: AdjList = MultiGraph::from_neighborhoods([
            vec![2, 3],
            vec![1, 3],
            vec![1, 2, 4],
            vec![3, 5, 6],
            vec![4, 6],
            vec![4, 5],
        ]);

        let analysis = Analyzer::new().analyze(&graph).unwrap();
        assert!(!analysis.is_eulerian);
        assert_eq!(analysis.bridges, vec![Edge(3, 4), Edge(4, 3)]);
        assert!(analysis.circuits.is_empty());

        let analysis = Analyzer::new()
            .bridge_strategy(BridgeStrategy::LowLink)
            .analyze(&graph)
            .unwrap();
        assert_eq!(analysis.to_string(), "Is eulerian: false\n(3, 4) is a bridge\n");
    }

    #[test]
    fn isolated_vertex_report() {
        let graph = AdjList::new(1);
        let analysis = Analyzer::new().parallel(true).analyze(&graph).unwrap();
        assert_eq!(
            analysis.to_string(),
            "Is eulerian: true\nStarting from 1: 1 (true)\n"
        );
    }

    #[test]
    fn invalid_circuits_are_reported() {
        let graph: AdjList = MultiGraph::from_neighborhoods([
            vec![2, 3],
            vec![1, 3],
            vec![1, 2, 4, 5],
            vec![3, 5],
            vec![3, 4],
        ]);

        let analysis = Analyzer::new()
            .fleury(Fleury::new().bridge_check(BridgeCheck::WholeGraph))
            .analyze(&graph)
            .unwrap();
        assert!(analysis.is_eulerian);
        assert!(!analysis.all_circuits_valid());
        assert!(!analysis.circuits[0].is_valid);

        let analysis = Analyzer::new().analyze(&graph).unwrap();
        assert!(analysis.all_circuits_valid());
        assert_eq!(analysis.circuits.len(), 5);
    }
}
