//! Service layer - orchestration of the maintenance operations

mod optimize;

pub use optimize::{OptimizeResult, OptimizeService};
