//! Presentation structure for wait-for graph rendering.
//!
//! The display layer wants a flat node/edge listing with stable string
//! identifiers, not the adjacency form the analyzer consumes. This
//! module is that boundary contract: one node per process (id `P<i>`),
//! one directed edge per wait entry, in relation row order. Pure and
//! total — a [`WaitRelation`] already guarantees every index is valid.

use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};

use crate::graph::wait::WaitRelation;

/// A single process node, identified as `P<index>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Stable display identifier, e.g. `"P0"`.
    pub id: String,
}

/// A directed wait edge between two process nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// The waiting process, e.g. `"P0"`.
    pub source: String,
    /// The process being waited on, e.g. `"P1"`.
    pub target: String,
}

/// Node/edge listing of a wait-for relation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    /// One node per process, in index order.
    pub nodes: Vec<GraphNode>,
    /// One edge per wait entry, in relation row order.
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    /// Shape a relation into its presentation listing.
    #[must_use]
    pub fn from_relation(relation: &WaitRelation) -> Self {
        let nodes = (0..relation.process_count())
            .map(|i| GraphNode { id: format!("P{i}") })
            .collect();

        let edges = (0..relation.process_count())
            .flat_map(|source| {
                relation.waits_on(source).iter().map(move |&target| GraphEdge {
                    source: format!("P{source}"),
                    target: format!("P{target}"),
                })
            })
            .collect();

        Self { nodes, edges }
    }

    /// Build a petgraph view of the relation for consumers that want to
    /// run graph algorithms over the presentation structure.
    ///
    /// Node weights are the `P<i>` identifiers; node indices coincide
    /// with process indices because nodes are added in index order.
    #[must_use]
    pub fn digraph(relation: &WaitRelation) -> DiGraph<String, ()> {
        let mut graph = DiGraph::<String, ()>::new();

        let indices: Vec<_> = (0..relation.process_count())
            .map(|i| graph.add_node(format!("P{i}")))
            .collect();

        for source in 0..relation.process_count() {
            for &target in relation.waits_on(source) {
                graph.add_edge(indices[source], indices[target], ());
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::algo::is_cyclic_directed;

    fn relation(rows: Vec<Vec<usize>>) -> WaitRelation {
        WaitRelation::from_rows(rows).expect("test rows in range")
    }

    #[test]
    fn one_node_per_process_in_index_order() {
        let data = GraphData::from_relation(&relation(vec![vec![], vec![], vec![]]));
        let ids: Vec<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["P0", "P1", "P2"]);
        assert!(data.edges.is_empty());
    }

    #[test]
    fn one_edge_per_wait_entry_in_row_order() {
        let data = GraphData::from_relation(&relation(vec![vec![2, 1], vec![], vec![0]]));
        let pairs: Vec<_> = data
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("P0", "P2"), ("P0", "P1"), ("P2", "P0")]);
    }

    #[test]
    fn self_loop_becomes_an_edge() {
        let data = GraphData::from_relation(&relation(vec![vec![0]]));
        assert_eq!(data.edges.len(), 1);
        assert_eq!(data.edges[0].source, data.edges[0].target);
    }

    #[test]
    fn empty_relation_renders_empty() {
        let data = GraphData::from_relation(&relation(vec![]));
        assert!(data.nodes.is_empty());
        assert!(data.edges.is_empty());
    }

    #[test]
    fn digraph_mirrors_the_relation() {
        let rel = relation(vec![vec![1], vec![2], vec![0]]);
        let graph = GraphData::digraph(&rel);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(is_cyclic_directed(&graph));
    }

    #[test]
    fn serializes_to_stable_json() {
        let data = GraphData::from_relation(&relation(vec![vec![1], vec![]]));
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["nodes"][0]["id"], "P0");
        assert_eq!(json["edges"][0]["source"], "P0");
        assert_eq!(json["edges"][0]["target"], "P1");

        let back: GraphData = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, data);
    }
}
