//! Scoring section: per-axis table plus an overall assessment.

use crate::catalog::{PhaseDefinition, ScoringAxis};
use crate::core::FormState;

/// Note shown instead of an assessment when every axis is at its default.
pub const DEFAULT_SCORES_NOTE: &str =
    "*No custom scores have been set for this phase. Default scores (3/5) are shown above.*";

/// Rating shown for a raw score outside 1-5.
pub const NO_RATING: &str = "N/A";

/// One axis with its resolved score.
#[derive(Debug, Clone)]
pub struct AxisScore<'a> {
    /// The axis
    pub axis: &'a ScoringAxis,

    /// Stored slider value, or the default
    pub raw: i64,

    /// Value after inverse flipping; used for display and averaging
    pub effective: i64,

    /// Whether `raw` came from a stored value
    pub explicit: bool,
}

impl<'a> AxisScore<'a> {
    /// Resolve an axis against the form state.
    pub fn resolve(axis: &'a ScoringAxis, form: &FormState) -> Self {
        let stored = form.stored_score(&axis.id);
        let raw = stored.unwrap_or(crate::core::DEFAULT_SCORE);
        Self { axis, raw, effective: axis.effective(raw), explicit: stored.is_some() }
    }

    /// Scale label for the raw score.
    pub fn rating(&self) -> &str {
        self.axis.rating(self.raw).unwrap_or(NO_RATING)
    }

    /// Score cell text, e.g. `4/5` or `2/5 (4 inverted)`.
    pub fn display(&self) -> String {
        if self.axis.inverse {
            format!("{}/5 ({} inverted)", self.effective, self.raw)
        } else {
            format!("{}/5", self.effective)
        }
    }
}

/// Resolve every axis of a phase.
pub fn axis_scores<'a>(phase: &'a PhaseDefinition, form: &FormState) -> Vec<AxisScore<'a>> {
    phase.scoring_axes.iter().map(|axis| AxisScore::resolve(axis, form)).collect()
}

/// Overall assessment band for an average effective score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    Strong,
    Good,
    Moderate,
    Limited,
    Low,
}

impl Assessment {
    /// Band for an average. Lower bounds are inclusive.
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            Self::Strong
        } else if average >= 3.5 {
            Self::Good
        } else if average >= 3.0 {
            Self::Moderate
        } else if average >= 2.5 {
            Self::Limited
        } else {
            Self::Low
        }
    }

    /// Interpretation text.
    pub fn interpretation(self) -> &'static str {
        match self {
            Self::Strong => "Strong potential - high priority for implementation",
            Self::Good => "Good potential - recommended for implementation",
            Self::Moderate => "Moderate potential - requires further evaluation",
            Self::Limited => "Limited potential - consider improvements or alternatives",
            Self::Low => "Low potential - not recommended for current implementation",
        }
    }
}

/// Arithmetic mean of effective scores.
pub fn average(scores: &[AxisScore<'_>]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let total: f64 = scores.iter().map(|s| s.effective as f64).sum();
    Some(total / scores.len() as f64)
}

/// Format with one decimal, rounding halves away from zero.
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Render the scoring section, or `None` if the phase has no axes.
pub fn render(phase: &PhaseDefinition, form: &FormState) -> Option<String> {
    if phase.scoring_axes.is_empty() {
        return None;
    }

    let mut markdown = format!("# {} Scoring\n", phase.scoring_title());
    markdown.push_str("| Scoring Dimension | Score | Rating | Description |\n");
    markdown.push_str("|:------------------|:------|:-------|:-------------|\n");

    let scores = axis_scores(phase, form);
    for score in &scores {
        markdown.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            score.axis.label,
            score.display(),
            score.rating(),
            score.axis.description
        ));
    }

    match average(&scores).filter(|_| scores.iter().any(|s| s.explicit)) {
        Some(avg) => {
            markdown.push_str(&format!(
                "\n**Overall Assessment:** {}/5 - {}\n\n",
                one_decimal(avg),
                Assessment::from_average(avg).interpretation()
            ));
        }
        None => {
            markdown.push_str(&format!("\n{DEFAULT_SCORES_NOTE}\n\n"));
        }
    }

    Some(markdown)
}
