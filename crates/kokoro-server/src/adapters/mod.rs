//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports.

pub mod memory;
pub mod migrate;
pub mod postgres;

pub use memory::MemoryStateRepository;
pub use postgres::PgStateRepository;
