//! Wait-for graph construction, cycle detection, and presentation shaping.
//!
//! # Overview
//!
//! A wait-for relation records, per process, which other processes it is
//! blocked on. A cycle in that relation is the deadlock signal.
//!
//! ```text
//! raw wait lists (Vec<Vec<usize>>)
//!        ↓  wait::WaitRelation::from_rows()   — strict index validation
//! WaitRelation
//!   ├─ cycles::has_cycle()     — tri-color DFS back-edge test
//!   └─ render::GraphData::from_relation() — node/edge structure for display
//! ```

pub mod cycles;
pub mod render;
pub mod wait;

pub use cycles::has_cycle;
pub use render::{GraphData, GraphEdge, GraphNode};
pub use wait::WaitRelation;
