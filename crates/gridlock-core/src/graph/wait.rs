//! The validated wait-for relation.

use crate::error::RelationError;

/// A directed wait-for relation over a dense process set `0..n`.
///
/// Row `i` lists the processes that `i` is blocked waiting on, in input
/// order. Construction validates every referenced index, so a built
/// relation is valid by construction and the traversal in
/// [`crate::graph::cycles`] never has to range-check neighbors.
///
/// Self-loops are accepted input — a process waiting on itself is a
/// one-node cycle, which is exactly what the detector reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitRelation {
    edges: Vec<Vec<usize>>,
}

impl WaitRelation {
    /// Build a relation from per-process wait lists.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::NeighborOutOfRange`] for the first wait
    /// entry naming a process outside `[0, rows.len())`.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self, RelationError> {
        let n = rows.len();
        for (process, waits) in rows.iter().enumerate() {
            if let Some(&neighbor) = waits.iter().find(|&&w| w >= n) {
                return Err(RelationError::NeighborOutOfRange {
                    process,
                    neighbor,
                    process_count: n,
                });
            }
        }
        Ok(Self { edges: rows })
    }

    /// Number of processes `n`.
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.edges.len()
    }

    /// The processes that `process` is waiting on.
    ///
    /// # Panics
    ///
    /// Panics if `process >= self.process_count()`.
    #[must_use]
    pub fn waits_on(&self, process: usize) -> &[usize] {
        &self.edges[process]
    }

    /// Total number of wait edges across all processes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}
