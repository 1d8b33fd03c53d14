#![forbid(unsafe_code)]
//! gridlock-core: the two classical OS resource-management analyses.
//!
//! - [`graph`] — wait-for relation construction, deadlock (cycle)
//!   detection, and the node/edge presentation builder.
//! - [`banker`] — Banker's-algorithm safety check over a validated
//!   allocation state.
//! - [`state`] / [`error`] — the validation layer: witness types whose
//!   construction enforces every shape and invariant the analyzers
//!   rely on, with typed errors naming the offending row/resource.
//!
//! Both analyzers are pure, deterministic, and reentrant: each call
//! owns its working arrays and touches no shared state.
//!
//! # Conventions
//!
//! - **Errors**: typed `thiserror` enums at the validation boundary;
//!   the analyzers themselves are total and never fail.
//! - **Logging**: `tracing` macros; public entry points are
//!   instrumented.

pub mod banker;
pub mod error;
pub mod graph;
pub mod state;

pub use banker::{SafetyVerdict, check_safety};
pub use error::{MatrixKind, RelationError, StateError};
pub use graph::{GraphData, WaitRelation, has_cycle};
pub use state::{BankerState, ResourceMatrix, ResourceVector};
