//! Dbslim Core - maintenance logic for single-file SQLite databases
//!
//! - **adapters**: concrete engine bindings (SQLite via rusqlite)
//! - **services**: orchestration of the maintenance operations

pub mod adapters;
pub mod services;

// Re-export commonly used types at crate root
pub use adapters::sqlite::SqliteRepository;
pub use services::{OptimizeResult, OptimizeService};
