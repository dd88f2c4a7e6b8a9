//! Optimize service - space reclamation and planner statistics refresh

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::adapters::sqlite::SqliteRepository;

/// Outcome of one optimization pass.
#[derive(Debug, Serialize)]
pub struct OptimizeResult {
    pub original_size: u64,
    pub new_size: u64,
    /// Free pages reported by the engine before the rebuild (0 when the
    /// maintenance commands failed).
    pub freelist_pages: i64,
}

impl OptimizeResult {
    /// Bytes reclaimed by the rebuild.
    pub fn reduction(&self) -> u64 {
        self.original_size.saturating_sub(self.new_size)
    }
}

/// Optimize service for database maintenance
pub struct OptimizeService {
    db_path: PathBuf,
}

impl OptimizeService {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Reclaim free space and refresh planner statistics.
    ///
    /// Optimization is advisory: an engine failure (lock contention, corrupt
    /// or non-database file, I/O error) is reported on stderr and folded into
    /// a zero-reduction result instead of propagating. Only the initial size
    /// lookup returns an error, which callers rule out by checking that the
    /// file exists first.
    pub fn optimize(&self, quiet: bool) -> Result<OptimizeResult> {
        let original_size = fs::metadata(&self.db_path)
            .with_context(|| format!("Failed to read file size: {}", self.db_path.display()))?
            .len();

        let freelist_pages = match self.run_maintenance(quiet) {
            Ok(pages) => pages,
            Err(e) => {
                if !quiet {
                    eprintln!("Optimization failed: {:#}", e);
                }
                return Ok(OptimizeResult {
                    original_size,
                    new_size: original_size,
                    freelist_pages: 0,
                });
            }
        };

        let new_size = fs::metadata(&self.db_path)
            .with_context(|| format!("Failed to read file size: {}", self.db_path.display()))?
            .len();

        Ok(OptimizeResult {
            original_size,
            new_size,
            freelist_pages,
        })
    }

    /// Open the database and run VACUUM then ANALYZE.
    ///
    /// The connection drops before this returns, so the final size
    /// measurement sees the rebuilt file with all locks released. Statements
    /// run in autocommit mode and are durable once they complete.
    fn run_maintenance(&self, quiet: bool) -> Result<i64> {
        let repository = SqliteRepository::open(&self.db_path)?;

        let freelist_pages = repository.freelist_count()?;

        if !quiet {
            println!("Running VACUUM...");
        }
        repository.vacuum()?;

        if !quiet {
            println!("Running ANALYZE...");
        }
        repository.analyze()?;

        Ok(freelist_pages)
    }
}
