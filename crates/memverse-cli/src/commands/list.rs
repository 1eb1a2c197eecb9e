//! The `memverse list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;

use memverse_core::library::load_libraries;
use memverse_core::model::Passage;

use crate::config::load_config_from;

#[derive(Debug, Serialize)]
struct PassageRow<'a> {
    library: &'a str,
    id: &'a str,
    reference: &'a str,
    words: usize,
    tags: &'a [String],
}

impl<'a> PassageRow<'a> {
    fn new(library: &'a str, passage: &'a Passage) -> Self {
        Self {
            library,
            id: &passage.id,
            reference: &passage.reference,
            words: passage.word_count(),
            tags: &passage.tags,
        }
    }
}

pub fn execute(
    library: Option<PathBuf>,
    tag: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let library_path = match library {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.library,
    };
    let libraries = load_libraries(&library_path)?;

    let rows: Vec<PassageRow<'_>> = libraries
        .iter()
        .flat_map(|lib| lib.passages.iter().map(move |p| (lib, p)))
        .filter(|(_, p)| tag.as_deref().map_or(true, |t| p.has_tag(t)))
        .map(|(lib, p)| PassageRow::new(&lib.id, p))
        .collect();

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            if rows.is_empty() {
                println!(
                    "No passages found. Run `memverse init` to create an example library."
                );
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["Library", "ID", "Reference", "Words", "Tags"]);
            for row in &rows {
                table.add_row(vec![
                    row.library.to_string(),
                    row.id.to_string(),
                    row.reference.to_string(),
                    row.words.to_string(),
                    row.tags.join(", "),
                ]);
            }
            println!("{table}");
            println!("{} passage(s)", rows.len());
        }
    }

    Ok(())
}
