//! Phase detail view.

use std::fmt::Write as _;

use crate::catalog::PhaseDefinition;
use crate::core::{stakeholder_key, FormState, StakeholderAttribute, StakeholderRole};
use crate::markdown::scoring::{axis_scores, AxisScore};

const EMPTY_VALUE: &str = "(empty)";

/// Plain-text rendering of one phase with the current form values.
pub fn render_text(phase: &PhaseDefinition, form: &FormState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} [{}]", phase.title, phase.category);
    let _ = writeln!(out, "{}", "=".repeat(phase.title.chars().count()));
    let _ = writeln!(out, "{}\n", phase.description);

    list(&mut out, "Key activities", &phase.activities);
    list(&mut out, "Expected roles", &phase.expected_roles);

    for (section, fields) in phase.sections() {
        let _ = writeln!(out, "## {section}");
        for field in fields {
            let value = form.filled(&field.id).unwrap_or(EMPTY_VALUE);
            let _ = writeln!(out, "  {} ({})", field.label, field.id);
            for line in value.lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
        out.push('\n');
    }

    let scores = axis_scores(phase, form);
    if !scores.is_empty() {
        let _ = writeln!(out, "## {} Scoring", phase.scoring_title());
        for score in &scores {
            let _ = writeln!(out, "  {}", score_line(score));
        }
        out.push('\n');
    }

    if !phase.checklist_questions.is_empty() {
        let _ = writeln!(out, "## Checklist");
        for (index, question) in phase.checklist_questions.iter().enumerate() {
            let mark = if form.is_checked(phase.id, index) { "✅" } else { "❌" };
            let _ = writeln!(out, "  {mark} [{index}] {question}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## Stakeholders");
    for role in StakeholderRole::ALL {
        let values: Vec<String> = StakeholderAttribute::ALL
            .iter()
            .filter_map(|attr| {
                form.filled(&stakeholder_key(role, *attr))
                    .map(|v| format!("{}: {}", attr.suffix().to_lowercase(), v))
            })
            .collect();
        let summary = if values.is_empty() { EMPTY_VALUE.to_string() } else { values.join(", ") };
        let _ = writeln!(out, "  {}: {}", role.display_name(), summary);
    }
    out.push('\n');

    list(&mut out, "Deliverables", &phase.deliverables);

    out.trim_end().to_string()
}

fn list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "## {title}");
    for item in items {
        let _ = writeln!(out, "  • {item}");
    }
    out.push('\n');
}

fn score_line(score: &AxisScore<'_>) -> String {
    let source = if score.explicit { "" } else { " (default)" };
    format!(
        "{} ({}): {} - {}{}",
        score.axis.label,
        score.axis.id,
        score.display(),
        score.rating(),
        source
    )
}
