//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate engine calls and store round-trips into use-case APIs.
//! - Keep presentation layers decoupled from storage details.
//!
//! # Invariants
//! - Services hydrate once at construction and write through on every
//!   mutation.
//! - Store failures are logged and tolerated; services fall back to their
//!   in-memory state instead of failing the operation.

pub mod blueprint_service;
pub mod board_service;
