//! Export actions: clipboard copy and markdown download.
//!
//! Both take a finished markdown document. Building the document is the
//! job of [`crate::markdown`]; [`phase_document`] and [`all_phases_document`]
//! pair the two for callers that start from a store snapshot.

mod clipboard;
mod download;

pub use clipboard::{copy_to_clipboard, Clipboard, MemoryClipboard, SystemClipboard};
pub use download::{download_markdown, export_filename, slugify};

use crate::catalog::PhaseDefinition;
use crate::core::FormState;
use crate::markdown::{MarkdownGenerator, PhaseExportRecord};

/// File name for the all-phases document.
pub const ALL_PHASES_FILENAME: &str = "marketing-framework.md";

/// File name used when no phase is selected.
pub const DEFAULT_EXPORT_FILENAME: &str = "phase-export.md";

/// Document content used when no phase is selected.
pub const NO_PHASE_SELECTED: &str = "No phase selected for export.";

/// MIME type of exported documents.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Markdown for the selected phase, or the "no phase selected" text.
pub fn phase_document(
    generator: &MarkdownGenerator<'_>,
    phase: Option<&PhaseDefinition>,
    form: &FormState,
) -> String {
    match phase {
        Some(phase) => generator.phase(&PhaseExportRecord::new(phase, form.clone())),
        None => NO_PHASE_SELECTED.to_string(),
    }
}

/// Markdown for every phase of a catalog.
pub fn all_phases_document(
    generator: &MarkdownGenerator<'_>,
    catalog: &[PhaseDefinition],
    form: &FormState,
) -> String {
    generator.all_phases(&PhaseExportRecord::all(catalog, form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{phase, phases};

    #[test]
    fn test_no_phase_selected() {
        let generator = MarkdownGenerator::new();
        let doc = phase_document(&generator, None, &FormState::new());
        assert_eq!(doc, NO_PHASE_SELECTED);
        assert_eq!(export_filename(None), DEFAULT_EXPORT_FILENAME);
    }

    #[test]
    fn test_phase_document() {
        let generator = MarkdownGenerator::new();
        let doc = phase_document(&generator, phase(3), &FormState::new());
        assert!(doc.starts_with("# Phase 3:"));
    }

    #[test]
    fn test_all_phases_document() {
        let generator = MarkdownGenerator::new();
        let doc = all_phases_document(&generator, phases(), &FormState::new());
        assert!(doc.contains("**Overall Progress:** 0/9 phases have form data (0%)"));
    }

    #[tokio::test]
    async fn test_export_then_copy_same_text() {
        let generator = MarkdownGenerator::new();
        let form: FormState = [("question1_0", "true")].into_iter().collect();
        let doc = phase_document(&generator, phase(1), &form);

        let dir = tempfile::tempdir().unwrap();
        let path = download_markdown(dir.path(), &export_filename(phase(1)), &doc).unwrap();

        let clipboard = MemoryClipboard::new();
        assert!(copy_to_clipboard(&clipboard, &doc).await);
        assert_eq!(clipboard.contents().unwrap(), std::fs::read_to_string(path).unwrap());
    }
}
