/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use eulerian::algo::*;
```
and gain access to traversal, connectivity, bridges, the Eulerian test, Fleury's algorithm and
circuit validation.

Most algorithms are provided as traits implemented for every suitable graph, so they are called
directly on the graph (`graph.is_eulerian()`, `graph.is_bridge(u, v)`, ...). Algorithms that
can be configured, such as [`Fleury`], are plain structs using the builder/setter pattern.

No algorithm modifies the graph it is called on: whenever edges have to be deleted, a private
clone is mutated instead.
*/

mod bridges;
mod circuit;
mod connectivity;
mod eulerian;
mod fleury;
mod traversal;

use crate::prelude::*;
use tracing::{debug, trace};

pub use bridges::*;
pub use circuit::*;
pub use connectivity::*;
pub use eulerian::*;
pub use fleury::*;
pub use traversal::*;
