//! Mock auth store — fabricates users and tokens, persists the session to
//! the local-storage file, and restores it on startup. No verification
//! happens anywhere; validation of the submitted form is the only gate.

pub mod models;
pub mod store;
pub mod validation;

pub use store::AuthStore;
