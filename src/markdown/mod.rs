//! Markdown export documents.
//!
//! Turns the form state of one phase (or all of them) into a markdown
//! document: the phase's answered questions grouped by section, the
//! stakeholders table, the scoring table with an overall assessment, and the
//! completion checklist. Generation is a pure function of the record and the
//! catalog; the same input always yields the same bytes.

mod generator;
pub mod scoring;
pub mod stakeholders;

pub use generator::{
    generate_all_phases_markdown, generate_phase_markdown, percent, title_case_key,
    FieldProgress, MarkdownGenerator, PhaseExportRecord, FRAMEWORK_TITLE, NO_DETAILS_NOTE,
};
