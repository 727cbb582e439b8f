//! Markdown file download.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use super::DEFAULT_EXPORT_FILENAME;
use crate::catalog::PhaseDefinition;
use crate::core::ExportError;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Lowercase a title and replace each whitespace run with `-`.
///
/// Other characters (colons, ampersands) are kept as they are.
pub fn slugify(title: &str) -> String {
    WHITESPACE.replace_all(&title.to_lowercase(), "-").into_owned()
}

/// File name for a single-phase export: `phase-<id>-<slug>.md`, or
/// `phase-export.md` when no phase is selected.
pub fn export_filename(phase: Option<&PhaseDefinition>) -> String {
    match phase {
        Some(phase) => format!("phase-{}-{}.md", phase.id, slugify(&phase.title)),
        None => DEFAULT_EXPORT_FILENAME.to_string(),
    }
}

/// Write markdown to `<dir>/<filename>` exactly as given and return the path.
///
/// The directory is created if needed. No BOM or front matter is added.
pub fn download_markdown(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    let path = dir.join(filename);

    fs::create_dir_all(dir).map_err(|source| ExportError::Write { path: dir.to_path_buf(), source })?;
    fs::write(&path, content.as_bytes())
        .map_err(|source| ExportError::Write { path: path.clone(), source })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Exported markdown");
    Ok(path)
}
