//! Hiring pipeline — the one rule-bearing component of the system.
//!
//! Candidates move `applied → screening → interview → offer → hired`, one
//! stage at a time. `rejected` sits outside the order: reachable from any
//! stage, and terminal once entered. Skipping ahead is refused with a
//! warning and no state change. Backward moves are not prevented; the
//! source system behaves the same way and we keep the gap rather than
//! invent an invariant.

pub mod models;
pub mod stage;
pub mod store;

pub use stage::Stage;
pub use store::CandidateStore;
