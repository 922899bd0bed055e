//! Repository Ports
//!
//! Data access interfaces for the persisted JSON documents.

pub mod state_repository;

pub use state_repository::{keys, StateRepository};
