//! Job posting store — in-memory list seeded from a fixed fixture, mutated
//! by create/update/apply. Operations resolve after the configured mock
//! latency to mimic a network round-trip; nothing is persisted.

pub mod models;
pub mod store;

pub use store::JobStore;
