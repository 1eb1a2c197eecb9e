//! The `memverse validate` command.

use std::path::PathBuf;

use anyhow::Result;

use memverse_core::library::{load_libraries, validate_library};

pub fn execute(library_path: PathBuf) -> Result<()> {
    let libraries = load_libraries(&library_path)?;

    let mut total_warnings = 0;

    for library in &libraries {
        println!(
            "Library: {} ({} passages)",
            library.name,
            library.passages.len()
        );

        let warnings = validate_library(library);
        for w in &warnings {
            let prefix = w
                .passage_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All passage libraries valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
