//! Validated resource-allocation state for the Banker safety check.
//!
//! # Overview
//!
//! [`BankerState`] is a witness type: constructing one runs every shape
//! and invariant check the safety algorithm relies on, so the algorithm
//! itself ([`crate::banker::check_safety`]) is total and never fails.
//!
//! Validation checks, in order:
//!
//! 1. `available` has exactly `m` entries.
//! 2. `max_need` and `allocation` each have exactly `n` rows.
//! 3. Every row of both matrices has exactly `m` entries.
//! 4. `allocation[i][j] <= max_need[i][j]` for all `i, j`.
//!
//! The need matrix is *not* stored — it is derived fresh on each call to
//! [`BankerState::need`], guaranteed non-negative by check 4.

use crate::error::{MatrixKind, StateError};

/// One non-negative count per resource type.
pub type ResourceVector = Vec<u64>;

/// One [`ResourceVector`] row per process.
pub type ResourceMatrix = Vec<ResourceVector>;

/// A validated `(available, max_need, allocation)` triple.
///
/// Immutable after construction; the safety checker takes it by shared
/// reference and owns its own working copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankerState {
    available: ResourceVector,
    max_need: ResourceMatrix,
    allocation: ResourceMatrix,
}

impl BankerState {
    /// Validate and wrap a resource-allocation state.
    ///
    /// `n` is the declared process count and `m` the declared resource
    /// count; every dimension is checked against them rather than
    /// inferred, so a missing or extra row is reported as such.
    ///
    /// # Errors
    ///
    /// Returns the first [`StateError`] found, scanning `available`
    /// first, then `max_need`, then `allocation`, rows in index order.
    pub fn new(
        n: usize,
        m: usize,
        available: ResourceVector,
        max_need: ResourceMatrix,
        allocation: ResourceMatrix,
    ) -> Result<Self, StateError> {
        if available.len() != m {
            return Err(StateError::AvailableLength {
                expected: m,
                found: available.len(),
            });
        }

        check_matrix_shape(&max_need, MatrixKind::MaxNeed, n, m)?;
        check_matrix_shape(&allocation, MatrixKind::Allocation, n, m)?;

        for (i, (max_row, alloc_row)) in max_need.iter().zip(&allocation).enumerate() {
            for (j, (&max, &alloc)) in max_row.iter().zip(alloc_row).enumerate() {
                if alloc > max {
                    return Err(StateError::AllocationExceedsMax {
                        process: i,
                        resource: j,
                        allocation: alloc,
                        max_need: max,
                    });
                }
            }
        }

        Ok(Self {
            available,
            max_need,
            allocation,
        })
    }

    /// Number of processes `n`.
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.max_need.len()
    }

    /// Number of resource types `m`.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.available.len()
    }

    /// The currently available resources.
    #[must_use]
    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// The declared maximum demand of each process.
    #[must_use]
    pub fn max_need(&self) -> &ResourceMatrix {
        &self.max_need
    }

    /// The resources currently held by each process.
    #[must_use]
    pub fn allocation(&self) -> &ResourceMatrix {
        &self.allocation
    }

    /// Compute the need matrix: `need[i][j] = max_need[i][j] - allocation[i][j]`.
    ///
    /// Non-negative by the construction invariant.
    #[must_use]
    pub fn need(&self) -> ResourceMatrix {
        self.max_need
            .iter()
            .zip(&self.allocation)
            .map(|(max_row, alloc_row)| {
                max_row
                    .iter()
                    .zip(alloc_row)
                    .map(|(&max, &alloc)| max - alloc)
                    .collect()
            })
            .collect()
    }
}

fn check_matrix_shape(
    matrix: &ResourceMatrix,
    kind: MatrixKind,
    n: usize,
    m: usize,
) -> Result<(), StateError> {
    if matrix.len() != n {
        return Err(StateError::RowCount {
            matrix: kind,
            expected: n,
            found: matrix.len(),
        });
    }

    for (row, entries) in matrix.iter().enumerate() {
        if entries.len() != m {
            return Err(StateError::RowWidth {
                matrix: kind,
                row,
                expected: m,
                found: entries.len(),
            });
        }
    }

    Ok(())
}
