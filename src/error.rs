/*!
# Errors

The core only distinguishes *caller contract violations*: a query names a vertex that is not
part of the graph. Such queries fail with [`MissingVertexError`] instead of panicking on an
unchecked lookup. Structural preconditions (e.g. a symmetric adjacency) are documented on the
respective methods and never checked at runtime.
*/

use thiserror::Error;

use crate::node::*;

/// A vertex outside of `1..=n` was passed to a graph query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("vertex {vertex} is not part of the graph (expected 1..={number_of_nodes})")]
pub struct MissingVertexError {
    /// The offending vertex id
    pub vertex: Node,
    /// Number of nodes of the queried graph
    pub number_of_nodes: NumNodes,
}

impl MissingVertexError {
    pub fn new(vertex: Node, number_of_nodes: NumNodes) -> Self {
        Self {
            vertex,
            number_of_nodes,
        }
    }
}

/// Shorthand for results of checked graph queries
pub type GraphResult<T> = std::result::Result<T, MissingVertexError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_names_vertex() {
        let err = MissingVertexError::new(7, 5);
        assert_eq!(
            err.to_string(),
            "vertex 7 is not part of the graph (expected 1..=5)"
        );
    }
}
