//! Process timeline: one line per phase.

use std::fmt::Write as _;

use serde::Serialize;

use crate::catalog::PhaseDefinition;
use crate::core::FormState;
use crate::markdown::{percent, FieldProgress, MarkdownGenerator, PhaseExportRecord};

/// Data status of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    /// No relevant field holds data.
    NotStarted,
    /// Some relevant field holds data.
    InProgress,
}

impl PhaseStatus {
    /// Icon used in text output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::NotStarted => "🔴",
            Self::InProgress => "✅",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
        }
    }
}

/// Timeline row for one phase.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub id: u8,
    pub title: String,
    pub category: String,
    pub status: PhaseStatus,
    pub fields: FieldProgress,
    pub checklist_done: usize,
    pub checklist_total: usize,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deliverables: Vec<String>,
}

/// Build the timeline for every catalog phase.
pub fn timeline(
    generator: &MarkdownGenerator<'_>,
    form: &FormState,
    with_deliverables: bool,
) -> Vec<TimelineEntry> {
    generator.catalog().iter().map(|phase| entry(generator, phase, form, with_deliverables)).collect()
}

fn entry(
    generator: &MarkdownGenerator<'_>,
    phase: &PhaseDefinition,
    form: &FormState,
    with_deliverables: bool,
) -> TimelineEntry {
    let fields = generator.field_progress(&PhaseExportRecord::new(phase, form.clone()));
    let status = if fields.has_data() { PhaseStatus::InProgress } else { PhaseStatus::NotStarted };
    let checklist_total = phase.checklist_questions.len();
    let checklist_done = (0..checklist_total).filter(|i| form.is_checked(phase.id, *i)).count();

    TimelineEntry {
        id: phase.id,
        title: phase.title.clone(),
        category: phase.category.clone(),
        status,
        fields,
        checklist_done,
        checklist_total,
        deliverables: if with_deliverables { phase.deliverables.clone() } else { Vec::new() },
    }
}

/// Plain-text rendering of the timeline.
pub fn render_text(entries: &[TimelineEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        let _ = writeln!(
            out,
            "{} {:>2}. [{}] {} - {}",
            entry.status.icon(),
            entry.id,
            entry.category,
            entry.title,
            entry.status.label()
        );
        let _ = writeln!(
            out,
            "      fields {}/{}, checklist {}/{}",
            entry.fields.filled, entry.fields.tracked, entry.checklist_done, entry.checklist_total
        );
        for deliverable in &entry.deliverables {
            let _ = writeln!(out, "      • {deliverable}");
        }
    }

    let started = entries.iter().filter(|e| e.status == PhaseStatus::InProgress).count();
    let _ = write!(
        out,
        "\n{}/{} phases have form data ({}%)",
        started,
        entries.len(),
        percent(started, entries.len())
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_not_started() {
        let entries = timeline(&MarkdownGenerator::new(), &FormState::new(), false);
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| e.status == PhaseStatus::NotStarted));
        assert!(entries.iter().all(|e| e.deliverables.is_empty()));
        assert_eq!(entries[0].fields, FieldProgress { filled: 0, tracked: 18 });
    }

    #[test]
    fn test_progress_and_checklist() {
        let form: FormState =
            [("useCaseName", "Churn"), ("question1_1", "true")].into_iter().collect();
        let entries = timeline(&MarkdownGenerator::new(), &form, true);

        assert_eq!(entries[0].status, PhaseStatus::InProgress);
        assert_eq!(entries[0].fields.filled, 1);
        assert_eq!(entries[0].checklist_done, 1);
        assert_eq!(entries[0].checklist_total, 3);
        assert_eq!(entries[0].deliverables[0], "Use case definition");
        assert_eq!(entries[1].status, PhaseStatus::NotStarted);
    }

    #[test]
    fn test_render_text() {
        let form: FormState = [("useCaseName", "Churn")].into_iter().collect();
        let text = render_text(&timeline(&MarkdownGenerator::new(), &form, false));

        assert!(text.starts_with("✅  1. [Ideation] Phase 1: Discovery - In Progress\n"));
        assert!(text.contains("🔴  2. [Assessment] Phase 2: Business Case Assessment - Not Started"));
        assert!(text.ends_with("1/9 phases have form data (11%)"));
    }

    #[test]
    fn test_json_shape() {
        let entries = timeline(&MarkdownGenerator::new(), &FormState::new(), false);
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["status"], "not_started");
        assert_eq!(json["fields"]["tracked"], 18);
        assert!(json.get("deliverables").is_none());
    }
}
