//! Typed validation errors for the analyzer inputs.
//!
//! Both analyzers are total over validated input: every error here is
//! raised while *constructing* a [`crate::state::BankerState`] or a
//! [`crate::graph::wait::WaitRelation`], never while an algorithm runs.
//! An infeasible allocation state is not an error — it is the `Unsafe`
//! verdict.

use std::fmt;

use thiserror::Error;

/// Which resource matrix a shape violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// The declared maximum demand matrix.
    MaxNeed,
    /// The currently-held allocation matrix.
    Allocation,
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxNeed => write!(f, "max-need"),
            Self::Allocation => write!(f, "allocation"),
        }
    }
}

/// A resource-allocation state that fails shape or invariant validation.
///
/// Every variant carries the offending indices and values so the message
/// pinpoints which row/resource violated which constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// The `available` vector does not have one entry per resource type.
    #[error("available vector has {found} entries, expected {expected} (one per resource type)")]
    AvailableLength {
        /// Declared resource count `m`.
        expected: usize,
        /// Entries actually supplied.
        found: usize,
    },

    /// A matrix does not have exactly one row per process.
    #[error("{matrix} matrix has {found} rows, expected {expected} (one per process)")]
    RowCount {
        /// The matrix with the wrong number of rows.
        matrix: MatrixKind,
        /// Declared process count `n`.
        expected: usize,
        /// Rows actually supplied.
        found: usize,
    },

    /// A matrix row does not have one entry per resource type.
    #[error("{matrix} row {row} has {found} entries, expected {expected}")]
    RowWidth {
        /// The matrix containing the malformed row.
        matrix: MatrixKind,
        /// Zero-based process index of the row.
        row: usize,
        /// Declared resource count `m`.
        expected: usize,
        /// Entries actually supplied.
        found: usize,
    },

    /// A process holds more of a resource than it declared it could ever need.
    #[error(
        "process {process} holds {allocation} of resource {resource} \
         but declared a maximum of {max_need}"
    )]
    AllocationExceedsMax {
        /// Zero-based process index.
        process: usize,
        /// Zero-based resource index.
        resource: usize,
        /// The allocated amount.
        allocation: u64,
        /// The declared ceiling it exceeds.
        max_need: u64,
    },
}

/// A wait-for relation that references a process outside the declared set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// A wait list names a process index not in `[0, n)`.
    #[error(
        "process {process} waits on process {neighbor}, \
         but only processes 0..{process_count} exist"
    )]
    NeighborOutOfRange {
        /// The process whose wait list is malformed.
        process: usize,
        /// The out-of-range index it names.
        neighbor: usize,
        /// The declared process count `n`.
        process_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_error_messages_name_the_violation() {
        let err = StateError::AllocationExceedsMax {
            process: 2,
            resource: 1,
            allocation: 5,
            max_need: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("process 2"), "message: {msg}");
        assert!(msg.contains("resource 1"), "message: {msg}");
        assert!(msg.contains('5') && msg.contains('3'), "message: {msg}");
    }

    #[test]
    fn row_width_error_names_matrix_and_row() {
        let err = StateError::RowWidth {
            matrix: MatrixKind::Allocation,
            row: 4,
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("allocation row 4"), "message: {msg}");
    }

    #[test]
    fn relation_error_names_both_endpoints() {
        let err = RelationError::NeighborOutOfRange {
            process: 0,
            neighbor: 7,
            process_count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("process 0"), "message: {msg}");
        assert!(msg.contains("process 7"), "message: {msg}");
        assert!(msg.contains("0..3"), "message: {msg}");
    }
}
