//! Repository layer: the persistent key-value state store.
//!
//! # Responsibility
//! - Define the get/set-by-key contract consumed by services.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Stores move opaque strings; JSON encoding/decoding belongs to the
//!   service layer.
//! - Store failures are transport errors; services decide whether they are
//!   fatal.

pub mod state_repo;
