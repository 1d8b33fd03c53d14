//! Banker's-algorithm safety check.
//!
//! # Overview
//!
//! Given a validated [`BankerState`], decide whether some ordering of
//! process completions exists in which every process can eventually
//! obtain its full declared demand. The search simulates completions:
//! a process whose remaining need fits in the free pool runs to
//! completion and returns everything it holds.
//!
//! # Design
//!
//! - **Deterministic tie-break**: each round picks the *lowest-index*
//!   eligible process, so identical inputs always produce the identical
//!   safe sequence. The eligibility scan stays a linear scan — process
//!   counts are human-entered and small, so a priority structure would
//!   buy nothing and cost determinism clarity.
//! - **Infeasibility is a verdict, not an error**: the function is
//!   total; an exhausted round with unfinished processes yields
//!   [`SafetyVerdict::Unsafe`].
//! - **O(n² · m)**: at most `n` rounds, each scanning up to `n`
//!   processes and comparing `m`-wide vectors.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::state::BankerState;

// ---------------------------------------------------------------------------
// SafetyVerdict
// ---------------------------------------------------------------------------

/// Outcome of the safety search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum SafetyVerdict {
    /// A completion order exists; `sequence` is one such order, a
    /// permutation of all process indices.
    Safe {
        /// Process indices in a valid completion order.
        sequence: Vec<usize>,
    },
    /// No completion order exists — granting maximum demands could
    /// deadlock the system.
    Unsafe,
}

impl SafetyVerdict {
    /// Returns `true` for the [`SafetyVerdict::Safe`] variant.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Safe { .. })
    }

    /// The safe completion sequence, if one exists.
    #[must_use]
    pub fn sequence(&self) -> Option<&[usize]> {
        match self {
            Self::Safe { sequence } => Some(sequence),
            Self::Unsafe => None,
        }
    }
}

impl fmt::Display for SafetyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe { sequence } => {
                let order = sequence
                    .iter()
                    .map(|i| format!("P{i}"))
                    .collect::<Vec<_>>()
                    .join(" → ");
                write!(f, "SAFE: {order}")
            }
            Self::Unsafe => write!(f, "UNSAFE: no completion order exists"),
        }
    }
}

// ---------------------------------------------------------------------------
// Safety search
// ---------------------------------------------------------------------------

/// Run the classical Banker's safety algorithm over a validated state.
///
/// Repeatedly finds the lowest-index unfinished process whose remaining
/// need fits component-wise in `work`, simulates its completion by
/// reclaiming its allocation, and appends it to the sequence. Returns
/// [`SafetyVerdict::Unsafe`] the first time a full scan finds no
/// eligible process while some remain unfinished.
#[instrument(skip_all, fields(processes = state.process_count(), resources = state.resource_count()))]
#[must_use]
pub fn check_safety(state: &BankerState) -> SafetyVerdict {
    let n = state.process_count();
    let need = state.need();
    let allocation = state.allocation();

    let mut work: Vec<u64> = state.available().to_vec();
    let mut finish = vec![false; n];
    let mut sequence = Vec::with_capacity(n);

    while sequence.len() < n {
        // Lowest eligible index wins — the tie-break that makes the
        // returned sequence reproducible.
        let eligible = (0..n).find(|&i| !finish[i] && fits(&need[i], &work));

        let Some(i) = eligible else {
            debug!(
                finished = sequence.len(),
                remaining = n - sequence.len(),
                "no eligible process; state is unsafe"
            );
            return SafetyVerdict::Unsafe;
        };

        for (w, &a) in work.iter_mut().zip(&allocation[i]) {
            *w += a;
        }
        finish[i] = true;
        sequence.push(i);
        debug!(process = i, work = ?work, "process completed, resources reclaimed");
    }

    SafetyVerdict::Safe { sequence }
}

/// Component-wise `need <= work`. Both slices are `m`-wide by the
/// [`BankerState`] construction invariant.
fn fits(need: &[u64], work: &[u64]) -> bool {
    need.iter().zip(work).all(|(n, w)| n <= w)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
