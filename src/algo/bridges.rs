use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// How bridges of a graph are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeStrategy {
    /// Test every ordered vertex pair by removing the edge in a clone and re-checking
    /// connectivity. Every bridge `{u, v}` is reported twice, as `(u, v)` and `(v, u)`.
    #[default]
    PairScan,
    /// Single depth-first search with discovery/low-link numbers.
    /// Every bridge is reported once, normalized.
    LowLink,
}

/// Bridge (isthmus) queries.
///
/// Bridges are only reported relative to a connected graph: on a disconnected graph no edge
/// is considered a bridge.
pub trait Bridges: AdjacencyList + AdjacencyTest + GraphEdgeEditing + Clone + Sized {
    /// Returns *true* if removing one copy of the edge `{u, v}` disconnects the graph.
    ///
    /// Returns `Ok(false)` if the graph is not connected in the first place or if `{u, v}` is
    /// not an edge. Fails if `u` or `v` is not a vertex of the graph.
    fn is_bridge(&self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if !self.is_connected() {
            trace!(u, v, "graph is disconnected, no bridges");
            return Ok(false);
        }

        let mut clone = self.clone();
        clone.remove_edge(u, v)?;
        Ok(!clone.is_connected())
    }

    /// Returns *true* if removing one copy of the edge `{u, v}` leaves no path between `u` and
    /// `v`, independently of whether the rest of the graph is connected.
    ///
    /// Coincides with [`Bridges::is_bridge`] on connected graphs. Returns `Ok(false)` if
    /// `{u, v}` is not an edge.
    fn is_bridge_of_component(&self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if !self.has_edge(u, v) {
            return Ok(false);
        }

        let mut clone = self.clone();
        clone.remove_edge(u, v)?;
        Ok(!clone.dfs(u).any(|w| w == v))
    }

    /// Returns all ordered pairs `(u, v)` with `u != v` for which [`Bridges::is_bridge`] holds,
    /// in lexicographic order.
    ///
    /// Pairs that are not adjacent are skipped without cloning, which yields the same result on
    /// symmetric graphs.
    fn bridge_pairs(&self) -> Vec<Edge> {
        if !self.is_connected() {
            return Vec::new();
        }

        let pairs = self
            .vertices()
            .cartesian_product(self.vertices())
            .filter(|&(u, v)| u != v && self.has_edge(u, v))
            .filter(|&(u, v)| {
                let mut clone = self.clone();
                clone.remove_edge(u, v).is_ok() && !clone.is_connected()
            })
            .map(Edge::from)
            .collect_vec();

        debug!(bridges = pairs.len(), "pair scan finished");
        pairs
    }

    /// Computes all bridges with a single low-link depth-first search.
    /// Returns normalized edges in ascending order; parallel edges are never bridges.
    fn compute_bridges(&self) -> Vec<Edge> {
        if !self.is_connected() {
            return Vec::new();
        }

        let bridges = BridgeSearch::new(self).compute();
        debug!(bridges = bridges.len(), "low-link search finished");
        bridges
    }

    /// Enumerates bridges with the given [`BridgeStrategy`]
    fn bridges_with(&self, strategy: BridgeStrategy) -> Vec<Edge> {
        match strategy {
            BridgeStrategy::PairScan => self.bridge_pairs(),
            BridgeStrategy::LowLink => self.compute_bridges(),
        }
    }
}

impl<G> Bridges for G where G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + Clone {}

struct BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G> BridgeSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len() + 1],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<Edge> {
        for u in self.graph.vertices_with_neighbors().collect_vec() {
            if self.visited.replace(u as usize, true) {
                continue;
            }

            self.compute_node(INVALID_NODE, u);
        }

        self.bridges.sort_unstable();
        self.bridges
    }

    fn compute_node(&mut self, parent: Node, u: Node) -> NodeInfo {
        let graph = self.graph;
        self.time += 1;

        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };

        // only one copy of the tree edge to the parent is ignored, further copies close a cycle
        let mut skipped_parent = false;
        for v in graph.neighbors_of(u) {
            if v == parent && !skipped_parent {
                skipped_parent = true;
                continue;
            }

            if !self.visited.replace(v as usize, true) {
                let info_v = self.compute_node(u, v);

                self.nodes_info[u as usize].update_low(info_v.low);

                if info_v.low > self.nodes_info[u as usize].discovery {
                    self.bridges.push(Edge(u, v).normalized());
                }
            } else {
                let v_disc = self.nodes_info[v as usize].discovery;
                self.nodes_info[u as usize].update_low(v_disc);
            }
        }

        self.nodes_info[u as usize]
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}
