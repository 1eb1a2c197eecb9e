//! TOML passage library loader.
//!
//! Loads passage libraries from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Passage, PassageLibrary};

/// Intermediate TOML structure for parsing library files.
#[derive(Debug, Deserialize)]
struct TomlLibraryFile {
    library: TomlLibraryHeader,
    #[serde(default)]
    passages: Vec<TomlPassage>,
}

#[derive(Debug, Deserialize)]
struct TomlLibraryHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlPassage {
    id: String,
    reference: String,
    text: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Parse a single TOML file into a `PassageLibrary`.
pub fn parse_library(path: &Path) -> Result<PassageLibrary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read passage library: {}", path.display()))?;

    parse_library_str(&content, path)
}

/// Parse a TOML string into a `PassageLibrary` (useful for testing).
pub fn parse_library_str(content: &str, source_path: &Path) -> Result<PassageLibrary> {
    let parsed: TomlLibraryFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let passages = parsed
        .passages
        .into_iter()
        .map(|p| Passage {
            id: p.id,
            reference: p.reference,
            text: p.text.trim().to_string(),
            tags: p.tags,
        })
        .collect();

    Ok(PassageLibrary {
        id: parsed.library.id,
        name: parsed.library.name,
        description: parsed.library.description,
        passages,
    })
}

/// Load a library file, or every library under a directory.
pub fn load_libraries(path: &Path) -> Result<Vec<PassageLibrary>> {
    if path.is_dir() {
        load_library_directory(path)
    } else {
        Ok(vec![parse_library(path)?])
    }
}

/// Recursively load all `.toml` library files from a directory.
pub fn load_library_directory(dir: &Path) -> Result<Vec<PassageLibrary>> {
    let mut libraries = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();

        if path.is_dir() {
            libraries.extend(load_library_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_library(&path) {
                Ok(library) => libraries.push(library),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(libraries)
}

/// A warning from library validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The passage ID (if applicable).
    pub passage_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a library for common issues.
pub fn validate_library(library: &PassageLibrary) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if library.passages.is_empty() {
        warnings.push(ValidationWarning {
            passage_id: None,
            message: "library has no passages".into(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for passage in &library.passages {
        if !seen_ids.insert(&passage.id) {
            warnings.push(ValidationWarning {
                passage_id: Some(passage.id.clone()),
                message: format!("duplicate passage ID: {}", passage.id),
            });
        }
    }

    for passage in &library.passages {
        if let Err(e) = passage.parsed_reference() {
            warnings.push(ValidationWarning {
                passage_id: Some(passage.id.clone()),
                message: format!("invalid reference '{}': {e}", passage.reference),
            });
        }
    }

    for passage in &library.passages {
        if passage.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                passage_id: Some(passage.id.clone()),
                message: "text is empty".into(),
            });
        }
    }

    warnings
}

/// Find a passage by id across several libraries.
pub fn find_passage<'a>(libraries: &'a [PassageLibrary], id: &str) -> Option<&'a Passage> {
    libraries.iter().find_map(|lib| lib.find(id))
}
