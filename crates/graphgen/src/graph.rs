use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// Node identifier, an index in `0..node_count`.
pub type NodeId = usize;

/// Graph shape consumed by the layouts: node weights are the [`NodeId`]s.
pub type LayoutGraph = StableGraph<NodeId, (), Directed>;

/// A directed connection `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

/// Generated graph: nodes `0..node_count` plus a directed edge list.
///
/// Edges are stored grouped by source in ascending order. The set of nodes
/// picked as multi-connection nodes is kept alongside so callers can check
/// degree bounds without re-deriving the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph {
    node_count: usize,
    edges: Vec<Edge>,
    multi: BTreeSet<NodeId>,
}

impl DiGraph {
    pub(crate) fn from_parts(node_count: usize, edges: Vec<Edge>, multi: BTreeSet<NodeId>) -> Self {
        debug_assert!(edges
            .iter()
            .all(|e| e.source < node_count && e.target < node_count));
        Self {
            node_count,
            edges,
            multi,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> Range<NodeId> {
        0..self.node_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether `node` was selected to receive multiple outgoing edges.
    pub fn is_multi(&self, node: NodeId) -> bool {
        self.multi.contains(&node)
    }

    pub fn multi_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.multi.iter().copied()
    }

    /// Targets of `node` in the order they were drawn.
    pub fn targets(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges
            .iter()
            .filter(move |e| e.source == node)
            .map(|e| e.target)
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.targets(node).count()
    }

    /// Every node with its sorted targets, ordered by node.
    pub fn connections(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        let mut out: BTreeMap<NodeId, Vec<NodeId>> =
            self.nodes().map(|n| (n, Vec::new())).collect();
        for edge in &self.edges {
            out.entry(edge.source).or_default().push(edge.target);
        }
        for targets in out.values_mut() {
            targets.sort_unstable();
        }
        out
    }

    /// Converts into a petgraph graph whose `NodeIndex::index()` equals the
    /// [`NodeId`].
    pub fn to_stable_graph(&self) -> LayoutGraph {
        let mut g = LayoutGraph::with_capacity(self.node_count, self.edges.len());
        for id in self.nodes() {
            g.add_node(id);
        }
        for edge in &self.edges {
            g.add_edge(NodeIndex::new(edge.source), NodeIndex::new(edge.target), ());
        }
        g
    }
}
