//! Optimize command - vacuum and analyze the database

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use dbslim_core::OptimizeService;

use crate::output;

/// JSON output structure
#[derive(Serialize)]
struct OptimizeOutput {
    original_size: u64,
    new_size: u64,
    reduction: u64,
    freelist_pages: i64,
}

pub fn run(db_path: PathBuf, quiet: bool, json: bool) -> Result<()> {
    if !quiet && !json {
        output::info(&format!("Optimizing database: {}", db_path.display()));
    }

    let service = OptimizeService::new(db_path);

    // JSON mode keeps stdout clean for the document itself
    let result = service.optimize(quiet || json)?;

    if json {
        let out = OptimizeOutput {
            original_size: result.original_size,
            new_size: result.new_size,
            reduction: result.reduction(),
            freelist_pages: result.freelist_pages,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if quiet {
        return Ok(());
    }

    let saved = result.reduction();
    let saved_pct = if result.original_size > 0 {
        (saved as f64 / result.original_size as f64) * 100.0
    } else {
        0.0
    };

    output::success("Database optimized");
    println!("Before: {}", output::format_size(result.original_size));
    println!("After: {}", output::format_size(result.new_size));
    println!("Saved: {} ({:.1}%)", output::format_size(saved), saved_pct);

    Ok(())
}
