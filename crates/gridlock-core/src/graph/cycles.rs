//! Cycle detection over the wait-for relation.
//!
//! # Design
//!
//! Standard tri-color depth-first search. A node is Gray while it sits on
//! the active recursion path and Black once every path out of it has been
//! explored. An edge into a Gray node is a back-edge — the active path
//! loops back on itself — so the search short-circuits `true`. Edges into
//! Black nodes are cross/forward edges and carry no cycle.
//!
//! Clearing a node to Black (rather than resetting it to White) when its
//! neighbors are exhausted is what distinguishes "finished, no path back"
//! from "still being explored"; dropping that distinction produces false
//! negatives on multi-component graphs.
//!
//! The traversal is started from every White node, so a cycle hiding in a
//! later component is found even after an acyclic component has been
//! fully explored. O(n + e) overall.

use tracing::instrument;

use crate::graph::wait::WaitRelation;

/// DFS colors for cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet visited.
    White,
    /// Currently on the DFS stack (in progress).
    Gray,
    /// Fully processed (all descendants visited).
    Black,
}

/// Returns `true` if the wait-for relation contains any cycle.
///
/// Existence only — the deadlock verdict does not require cycle
/// membership, and stopping at the first back-edge keeps the common
/// acyclic case cheap.
#[instrument(skip_all, fields(processes = relation.process_count(), edges = relation.edge_count()))]
#[must_use]
pub fn has_cycle(relation: &WaitRelation) -> bool {
    let n = relation.process_count();
    let mut color = vec![Color::White; n];

    for process in 0..n {
        if color[process] == Color::White && dfs_has_cycle(relation, process, &mut color) {
            return true;
        }
    }

    false
}

/// DFS that returns `true` as soon as any back-edge is found.
fn dfs_has_cycle(relation: &WaitRelation, node: usize, color: &mut [Color]) -> bool {
    color[node] = Color::Gray;

    for &neighbor in relation.waits_on(node) {
        match color[neighbor] {
            Color::White => {
                if dfs_has_cycle(relation, neighbor, color) {
                    return true;
                }
            }
            Color::Gray => return true, // Back edge found — cycle exists.
            Color::Black => {}          // Already fully processed, no cycle through this edge.
        }
    }

    color[node] = Color::Black;
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(rows: Vec<Vec<usize>>) -> WaitRelation {
        WaitRelation::from_rows(rows).expect("test rows in range")
    }

    #[test]
    fn empty_relation_has_no_cycle() {
        assert!(!has_cycle(&relation(vec![])));
    }

    #[test]
    fn isolated_processes_have_no_cycle() {
        assert!(!has_cycle(&relation(vec![vec![], vec![], vec![]])));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        assert!(has_cycle(&relation(vec![vec![0]])));
        assert!(has_cycle(&relation(vec![vec![], vec![1], vec![]])));
    }

    #[test]
    fn three_process_ring_detected() {
        // Scenario B: 0 → 1 → 2 → 0.
        assert!(has_cycle(&relation(vec![vec![1], vec![2], vec![0]])));
    }

    #[test]
    fn chain_without_back_edge_is_acyclic() {
        // Scenario C: 0 → 1, nothing else.
        assert!(!has_cycle(&relation(vec![vec![1], vec![], vec![]])));
    }

    #[test]
    fn directed_path_is_acyclic() {
        let rows: Vec<Vec<usize>> = (0..6).map(|i| if i < 5 { vec![i + 1] } else { vec![] }).collect();
        assert!(!has_cycle(&relation(rows)));
    }

    #[test]
    fn mutual_wait_detected() {
        assert!(has_cycle(&relation(vec![vec![1], vec![0]])));
    }

    #[test]
    fn cycle_behind_acyclic_component_detected() {
        // Component {0,1,2} is an acyclic chain explored first; the
        // cycle lives in the disconnected component {3,4}.
        assert!(has_cycle(&relation(vec![
            vec![1],
            vec![2],
            vec![],
            vec![4],
            vec![3],
        ])));
    }

    #[test]
    fn diamond_is_acyclic() {
        // 0 → {1,2} → 3: node 3 is reached twice but never while Gray.
        assert!(!has_cycle(&relation(vec![
            vec![1, 2],
            vec![3],
            vec![3],
            vec![],
        ])));
    }

    #[test]
    fn cross_edge_into_finished_node_is_not_a_cycle() {
        // 1 → 0 is explored after 0's component is Black.
        assert!(!has_cycle(&relation(vec![vec![2], vec![0], vec![]])));
    }

    #[test]
    fn duplicate_wait_entries_are_harmless() {
        assert!(!has_cycle(&relation(vec![vec![1, 1, 1], vec![]])));
        assert!(has_cycle(&relation(vec![vec![1, 1], vec![0]])));
    }
}
