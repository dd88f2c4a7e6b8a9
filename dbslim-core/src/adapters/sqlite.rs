//! SQLite repository implementation

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Thin wrapper over a SQLite connection for maintenance commands.
///
/// The connection closes when the repository is dropped, so any file locks
/// the engine holds are released on every exit path.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open a connection to a database file.
    ///
    /// SQLite defers reading the file header until the first statement
    /// runs, so opening a non-database file succeeds here and fails on the
    /// first maintenance command instead.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        Ok(Self { conn })
    }

    // === Maintenance operations ===

    /// Rebuild the database file, reclaiming space left by deleted and
    /// updated rows.
    ///
    /// VACUUM needs exclusive access to the file for its duration; under
    /// contention the engine's default lock behavior applies.
    pub fn vacuum(&self) -> Result<()> {
        self.conn.execute_batch("VACUUM").context("VACUUM failed")?;
        Ok(())
    }

    /// Recompute the statistics used by the query planner.
    pub fn analyze(&self) -> Result<()> {
        self.conn
            .execute_batch("ANALYZE")
            .context("ANALYZE failed")?;
        Ok(())
    }

    /// Number of unused pages currently on the freelist.
    pub fn freelist_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("PRAGMA freelist_count", [], |row| row.get(0))
            .context("Failed to read freelist count")?;
        Ok(count)
    }
}
