//! Property suites for the analyzers.
//!
//! Cycle detection is cross-checked against petgraph's
//! `is_cyclic_directed` as an independent oracle; the Banker check is
//! held to its determinism and replay invariants.

use proptest::collection::vec;
use proptest::prelude::*;

use gridlock_core::{BankerState, GraphData, SafetyVerdict, WaitRelation, check_safety, has_cycle};
use petgraph::algo::is_cyclic_directed;

/// Wait lists for `n` processes, every entry in range by construction.
fn arb_wait_rows(max_processes: usize) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=max_processes).prop_flat_map(|n| vec(vec(0..n, 0..=n), n))
}

/// A well-formed `(available, max_need, allocation)` triple with
/// `allocation[i][j] <= max_need[i][j]` by construction.
#[allow(clippy::type_complexity)]
fn arb_banker_inputs() -> impl Strategy<Value = (Vec<u64>, Vec<Vec<(u64, u64)>>)> {
    (1..=5usize, 1..=3usize).prop_flat_map(|(n, m)| {
        let available = vec(0..8u64, m);
        let cells = vec(
            vec((0..8u64).prop_flat_map(|max| (Just(max), 0..=max)), m),
            n,
        );
        (available, cells)
    })
}

fn build_state(available: Vec<u64>, cells: &[Vec<(u64, u64)>]) -> BankerState {
    let n = cells.len();
    let m = available.len();
    let max_need = cells
        .iter()
        .map(|row| row.iter().map(|&(max, _)| max).collect())
        .collect();
    let allocation = cells
        .iter()
        .map(|row| row.iter().map(|&(_, alloc)| alloc).collect())
        .collect();
    BankerState::new(n, m, available, max_need, allocation).expect("generated state well-formed")
}

proptest! {
    #[test]
    fn cycle_detection_agrees_with_petgraph_oracle(rows in arb_wait_rows(7)) {
        let relation = WaitRelation::from_rows(rows).expect("entries in range by construction");
        let graph = GraphData::digraph(&relation);
        prop_assert_eq!(has_cycle(&relation), is_cyclic_directed(&graph));
    }

    #[test]
    fn self_loop_always_reports_a_cycle(rows in arb_wait_rows(6), looper in 0..6usize) {
        let mut rows = rows;
        let looper = looper % rows.len();
        rows[looper].push(looper);
        let relation = WaitRelation::from_rows(rows).expect("entries in range");
        prop_assert!(has_cycle(&relation));
    }

    #[test]
    fn safety_check_is_deterministic((available, cells) in arb_banker_inputs()) {
        let state = build_state(available, &cells);
        prop_assert_eq!(check_safety(&state), check_safety(&state));
    }

    #[test]
    fn safe_sequence_replay_never_overdraws((available, cells) in arb_banker_inputs()) {
        let state = build_state(available, &cells);
        if let SafetyVerdict::Safe { sequence } = check_safety(&state) {
            // The sequence must be a permutation of all process indices.
            let mut sorted = sequence.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &(0..state.process_count()).collect::<Vec<_>>());

            // Replaying it, each process's need must fit in work at its turn.
            let need = state.need();
            let mut work = state.available().to_vec();
            for &i in &sequence {
                for (j, &w) in work.iter().enumerate() {
                    prop_assert!(need[i][j] <= w, "process {} overdraws resource {}", i, j);
                }
                for (w, &a) in work.iter_mut().zip(&state.allocation()[i]) {
                    *w += a;
                }
            }
        }
    }

    #[test]
    fn bumping_allocation_over_ceiling_is_rejected(
        (available, cells) in arb_banker_inputs(),
        pick in (0..64usize, 0..64usize),
    ) {
        let n = cells.len();
        let m = available.len();
        let (i, j) = (pick.0 % n, pick.1 % m);

        let max_need: Vec<Vec<u64>> = cells
            .iter()
            .map(|row| row.iter().map(|&(max, _)| max).collect())
            .collect();
        let mut allocation: Vec<Vec<u64>> = cells
            .iter()
            .map(|row| row.iter().map(|&(_, alloc)| alloc).collect())
            .collect();
        allocation[i][j] = max_need[i][j] + 1;

        let err = BankerState::new(n, m, available, max_need, allocation);
        prop_assert!(err.is_err());
    }
}
