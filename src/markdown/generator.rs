//! Phase and all-phases document generation.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::catalog::{self, find_phase, PhaseDefinition};
use crate::core::{stakeholder_keys, FieldKey, FormState};

use super::{scoring, stakeholders};

/// Title of the all-phases document.
pub const FRAMEWORK_TITLE: &str = "Marketing Use Case Development Framework";

/// Shown when a phase has no details entered.
pub const NO_DETAILS_NOTE: &str = "*No specific details have been entered for this phase yet.*";

const CHECKED_MARK: &str = "✅";
const UNCHECKED_MARK: &str = "❌";
const NOT_STARTED_MARK: &str = "🔴";

static UPPERCASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])").expect("valid uppercase pattern"));
static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w").expect("valid word pattern"));

/// A phase plus the form state to render it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseExportRecord {
    /// Phase id
    pub id: u8,

    /// Phase title
    pub title: String,

    /// Phase category
    pub category: String,

    /// Form state snapshot
    pub form_data: FormState,
}

impl PhaseExportRecord {
    /// Build a record for one phase.
    pub fn new(phase: &PhaseDefinition, form_data: FormState) -> Self {
        Self {
            id: phase.id,
            title: phase.title.clone(),
            category: phase.category.clone(),
            form_data,
        }
    }

    /// Build one record per catalog phase, all sharing the same form state.
    pub fn all(catalog: &[PhaseDefinition], form_data: &FormState) -> Vec<Self> {
        catalog.iter().map(|phase| Self::new(phase, form_data.clone())).collect()
    }
}

/// Filled versus tracked fields of one phase.
///
/// Tracked fields are the phase's form fields plus the twelve shared
/// stakeholder keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldProgress {
    /// Non-blank relevant keys
    pub filled: usize,

    /// Form fields plus stakeholder keys
    pub tracked: usize,
}

impl FieldProgress {
    /// Whether any relevant key holds data.
    pub fn has_data(&self) -> bool {
        self.filled > 0
    }
}

/// Markdown generator bound to a phase catalog.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownGenerator<'a> {
    catalog: &'a [PhaseDefinition],
}

impl Default for MarkdownGenerator<'static> {
    fn default() -> Self {
        Self { catalog: catalog::phases() }
    }
}

impl MarkdownGenerator<'static> {
    /// Generator over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> MarkdownGenerator<'a> {
    /// Generator over a custom catalog.
    pub fn with_catalog(catalog: &'a [PhaseDefinition]) -> Self {
        Self { catalog }
    }

    /// The catalog phases are looked up in.
    pub fn catalog(&self) -> &'a [PhaseDefinition] {
        self.catalog
    }

    /// Render the document for one phase.
    pub fn phase(&self, record: &PhaseExportRecord) -> String {
        let phase = find_phase(self.catalog, record.id);
        if phase.is_none() {
            tracing::debug!(phase = record.id, "Phase not in catalog, rendering without schema");
        }
        let form = &record.form_data;

        let mut markdown = format!("# {}\n", record.title);

        if self.relevant_keys(phase, form).is_empty() {
            markdown.push_str("## Details\n\n");
            markdown.push_str(&format!("{NO_DETAILS_NOTE}\n\n"));
        } else {
            match phase.filter(|p| !p.form_fields.is_empty()) {
                Some(phase) => markdown.push_str(&field_sections(phase, form)),
                None => markdown.push_str(&fallback_fields(form)),
            }
        }

        if let Some(section) = stakeholders::render(form) {
            markdown.push('\n');
            markdown.push_str(&section);
        }

        if let Some(phase) = phase {
            if let Some(section) = scoring::render(phase, form) {
                markdown.push('\n');
                markdown.push_str(&section);
            }

            if let Some(section) = checklist(phase, form) {
                markdown.push_str(&section);
            }
        }

        markdown
    }

    /// Render the combined document: summary, overview, then every phase.
    pub fn all_phases(&self, records: &[PhaseExportRecord]) -> String {
        let mut markdown = format!("# {FRAMEWORK_TITLE}\n\n");

        let progress: Vec<FieldProgress> =
            records.iter().map(|record| self.field_progress(record)).collect();

        let total = records.len();
        let with_data = progress.iter().filter(|p| p.has_data()).count();

        markdown.push_str("## Executive Summary\n\n");
        markdown.push_str(&format!(
            "**Overall Progress:** {}/{} phases have form data ({}%)\n\n",
            with_data,
            total,
            percent(with_data, total)
        ));

        markdown.push_str("## Phase Overview\n\n");
        for (record, progress) in records.iter().zip(&progress) {
            let status = if progress.has_data() {
                format!(
                    "{CHECKED_MARK} In Progress ({}/{} fields)",
                    progress.filled, progress.tracked
                )
            } else {
                format!("{NOT_STARTED_MARK} Not Started")
            };
            markdown.push_str(&format!("- **Phase {}: {}** {}\n", record.id, record.title, status));
        }
        markdown.push_str("\n---\n\n");

        let documents: Vec<String> = records.iter().map(|record| self.phase(record)).collect();
        markdown.push_str(&documents.join("\n---\n\n"));

        markdown
    }

    /// How many of a phase's tracked fields hold data.
    pub fn field_progress(&self, record: &PhaseExportRecord) -> FieldProgress {
        let phase = find_phase(self.catalog, record.id);
        FieldProgress {
            filled: self.relevant_keys(phase, &record.form_data).len(),
            tracked: tracked_field_count(phase),
        }
    }

    /// Keys with non-blank values that count toward a phase's progress:
    /// the phase's own fields (or, without a schema, plain field keys) plus
    /// the shared stakeholder keys.
    fn relevant_keys<'f>(
        &self,
        phase: Option<&PhaseDefinition>,
        form: &'f FormState,
    ) -> Vec<&'f str> {
        let stakeholder = stakeholder_keys();
        form.iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, _)| key)
            .filter(|key| {
                stakeholder.iter().any(|s| s == key)
                    || match phase.filter(|p| !p.form_fields.is_empty()) {
                        Some(phase) => phase.field(key).is_some(),
                        None => is_fallback_field(key),
                    }
            })
            .collect()
    }
}

/// Render one phase with the built-in catalog.
pub fn generate_phase_markdown(record: &PhaseExportRecord) -> String {
    MarkdownGenerator::new().phase(record)
}

/// Render all phases with the built-in catalog.
pub fn generate_all_phases_markdown(records: &[PhaseExportRecord]) -> String {
    MarkdownGenerator::new().all_phases(records)
}

/// Convert a camelCase key to Title Case words: `useCaseName` -> `Use Case Name`.
pub fn title_case_key(key: &str) -> String {
    let spaced = UPPERCASE.replace_all(key, " $1");
    WORD_START.replace_all(&spaced, |caps: &Captures<'_>| caps[0].to_uppercase()).into_owned()
}

/// `round(100 * part / whole)`, 0 for an empty whole.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn field_sections(phase: &PhaseDefinition, form: &FormState) -> String {
    let mut markdown = String::new();
    for (section, fields) in phase.sections() {
        let answered: Vec<_> =
            fields.iter().filter_map(|f| form.filled(&f.id).map(|v| (f, v))).collect();
        if answered.is_empty() {
            continue;
        }

        markdown.push_str(&format!("## {section}\n\n"));
        for (field, value) in answered {
            markdown.push_str(&format!("### {}\n{}\n\n", field.label, value));
        }
    }
    markdown
}

fn fallback_fields(form: &FormState) -> String {
    let mut markdown = String::new();
    for (key, value) in form.iter() {
        if value.trim().is_empty() || !is_fallback_field(key) {
            continue;
        }
        markdown.push_str(&format!("**{}:** {}\n\n", title_case_key(key), value));
    }
    markdown
}

/// Plain field keys shown when a phase has no form schema. Stakeholder,
/// score and checklist keys are rendered by their own sections.
fn is_fallback_field(key: &str) -> bool {
    matches!(FieldKey::parse(key), FieldKey::Field(_))
        && !key.contains("owner")
        && !key.contains("support")
}

fn tracked_field_count(phase: Option<&PhaseDefinition>) -> usize {
    phase.map_or(0, |p| p.form_fields.len()) + stakeholder_keys().len()
}

fn checklist(phase: &PhaseDefinition, form: &FormState) -> Option<String> {
    let total = phase.checklist_questions.len();
    if total == 0 {
        return None;
    }

    let mut markdown = String::from("## Phase Completion Checklist\n\n");
    let mut completed = 0;
    for (index, question) in phase.checklist_questions.iter().enumerate() {
        let mark = if form.is_checked(phase.id, index) {
            completed += 1;
            CHECKED_MARK
        } else {
            UNCHECKED_MARK
        };
        markdown.push_str(&format!("{mark} {question}\n"));
    }

    markdown.push_str(&format!(
        "\n**Checklist Progress:** {}/{} items completed ({}%)\n\n",
        completed,
        total,
        percent(completed, total)
    ));
    Some(markdown)
}
