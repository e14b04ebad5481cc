/*!
`eulerian` analyzes small **undirected, loop-free multigraphs** given as adjacency lists and answers two questions:

- does the graph admit an **Eulerian circuit** (a closed walk using every edge exactly once)? If so, one is built
  from every start vertex with **Fleury's algorithm** and validated against the graph;
- if not, which edges are **bridges** (their removal disconnects the graph)?

# Representation

We represent **nodes** as `u32` numbered `1..=n`, exactly as they appear in the adjacency-list text format.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; `Edge::normalized` turns it into the canonical key of
the unordered pair.

A graph ([`MultiGraph`](crate::repr::MultiGraph)) stores one *ordered* neighborhood per vertex. Parallel edges appear
as repeated neighbors and the stored order decides tie breaks in Fleury's algorithm.

# Design

Graphs are values: algorithms that need to delete edges (bridge tests, Fleury's walk) do so on a private clone and
never on the caller's graph. All queries are implemented as traits on the graph itself, while configurable algorithms
([`Fleury`](crate::algo::Fleury), [`Analyzer`](crate::report::Analyzer), [`AdjListReader`](crate::io::AdjListReader))
are structs using the *Builder* / *Setter* pattern.

Queries naming a vertex outside of `1..=n` fail with [`MissingVertexError`](crate::error::MissingVertexError).

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the graph representations,
- [`algo`] includes connectivity, bridges, the Eulerian test, Fleury's algorithm and circuit validation,
- [`io`] reads and writes the adjacency-list text format,
- [`report`] runs the complete analysis and renders it as text.

In most use-cases, `use eulerian::{prelude::*, algo::*};` suffices for your needs.

```
use eulerian::{prelude::*, algo::*};

let graph: AdjList = MultiGraph::from_neighborhoods([vec![2, 3], vec![1, 3], vec![1, 2]]);
assert!(graph.is_eulerian());

let circuit = graph.fleury_circuit(1).unwrap();
assert_eq!(circuit.to_string(), "1 -> 2 -> 3 -> 1");
assert!(graph.is_eulerian_circuit(circuit.as_slice()));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod report;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `eulerian::prelude` includes definitions for nodes and edges, errors, all basic graph operation traits as well as
/// all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
