//! Phase catalog.
//!
//! The nine planning phases, from discovery through optimization. Each phase
//! carries its form schema, scoring axes and completion checklist. The
//! catalog is static and read-only; everything else in the crate looks
//! phases up here by id.

mod content;

pub use content::PHASES;

/// Section label used for fields that don't name one.
pub const DEFAULT_SECTION: &str = "General";

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line input.
    Text,
    /// Multi-line text area.
    Multiline,
}

/// A data-entry field of a phase.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Form state key (unique within the phase)
    pub id: String,

    /// Question shown to the user
    pub label: String,

    /// Input kind
    pub kind: FieldKind,

    /// Example input
    pub placeholder: String,

    /// Visible rows for multiline inputs
    pub rows: u8,

    /// Grouping label
    pub section: String,
}

impl FormField {
    /// Create a single-line field.
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Text,
            placeholder: String::new(),
            rows: 1,
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Create a multi-line field.
    pub fn multiline(id: impl Into<String>, label: impl Into<String>, rows: u8) -> Self {
        Self { kind: FieldKind::Multiline, rows, ..Self::text(id, label) }
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the section label.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

/// A 1-5 scoring dimension.
#[derive(Debug, Clone)]
pub struct ScoringAxis {
    /// Axis id; the stored key is `score_<id>`
    pub id: String,

    /// Display label
    pub label: String,

    /// What the axis measures
    pub description: String,

    /// Labels for raw values 1..=5
    pub scale_labels: [String; 5],

    /// Higher raw values are worse (complexity, risk, effort)
    pub inverse: bool,
}

impl ScoringAxis {
    /// Create a regular axis.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        scale_labels: [&str; 5],
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            scale_labels: scale_labels.map(str::to_string),
            inverse: false,
        }
    }

    /// Mark the axis as inverse.
    pub fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Form state key holding this axis' raw score.
    pub fn score_key(&self) -> String {
        format!("score_{}", self.id)
    }

    /// Scale label for a raw score, if it is in range.
    pub fn rating(&self, raw: i64) -> Option<&str> {
        usize::try_from(raw)
            .ok()
            .and_then(|r| r.checked_sub(1))
            .and_then(|idx| self.scale_labels.get(idx))
            .map(String::as_str)
    }

    /// Effective score: inverse axes flip the scale (1<->5, 2<->4).
    pub fn effective(&self, raw: i64) -> i64 {
        if self.inverse {
            6_i64.saturating_sub(raw)
        } else {
            raw
        }
    }
}

/// Static definition of one planning phase.
#[derive(Debug, Clone)]
pub struct PhaseDefinition {
    /// Phase number, 1-9
    pub id: u8,

    /// Display title
    pub title: String,

    /// Category shown on the timeline
    pub category: String,

    /// Phase summary
    pub description: String,

    /// Key activities
    pub activities: Vec<String>,

    /// Roles expected to take part, e.g. "Data Scientist (Support)"
    pub expected_roles: Vec<String>,

    /// Data-entry fields in display order
    pub form_fields: Vec<FormField>,

    /// Scoring dimensions in display order
    pub scoring_axes: Vec<ScoringAxis>,

    /// Title for the scoring section
    pub scoring_title: Option<String>,

    /// Completion checklist, index-addressed
    pub checklist_questions: Vec<String>,

    /// Expected outputs
    pub deliverables: Vec<String>,
}

impl PhaseDefinition {
    /// Create a phase with no fields, axes or checklist.
    pub fn new(
        id: u8,
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            description: description.into(),
            activities: Vec::new(),
            expected_roles: Vec::new(),
            form_fields: Vec::new(),
            scoring_axes: Vec::new(),
            scoring_title: None,
            checklist_questions: Vec::new(),
            deliverables: Vec::new(),
        }
    }

    /// Set the activities.
    pub fn with_activities(mut self, activities: &[&str]) -> Self {
        self.activities = activities.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set the expected roles.
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.expected_roles = roles.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Add a form field.
    pub fn with_field(mut self, field: FormField) -> Self {
        self.form_fields.push(field);
        self
    }

    /// Add a scoring axis.
    pub fn with_axis(mut self, axis: ScoringAxis) -> Self {
        self.scoring_axes.push(axis);
        self
    }

    /// Set the scoring section title.
    pub fn with_scoring_title(mut self, title: impl Into<String>) -> Self {
        self.scoring_title = Some(title.into());
        self
    }

    /// Set the checklist questions.
    pub fn with_checklist(mut self, questions: &[&str]) -> Self {
        self.checklist_questions = questions.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Set the deliverables.
    pub fn with_deliverables(mut self, deliverables: &[&str]) -> Self {
        self.deliverables = deliverables.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Title used for the scoring heading.
    pub fn scoring_title(&self) -> &str {
        self.scoring_title.as_deref().unwrap_or(&self.category)
    }

    /// Find a form field by id.
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.form_fields.iter().find(|f| f.id == id)
    }

    /// Find a scoring axis by id.
    pub fn axis(&self, id: &str) -> Option<&ScoringAxis> {
        self.scoring_axes.iter().find(|a| a.id == id)
    }

    /// Form state key for a checklist question.
    pub fn checklist_key(&self, index: usize) -> String {
        checklist_key(self.id, index)
    }

    /// Group form fields by section, keeping first-appearance order of
    /// sections and catalog order of fields within each section.
    pub fn sections(&self) -> Vec<(&str, Vec<&FormField>)> {
        let mut sections: Vec<(&str, Vec<&FormField>)> = Vec::new();
        for field in &self.form_fields {
            match sections.iter_mut().find(|(name, _)| *name == field.section) {
                Some((_, fields)) => fields.push(field),
                None => sections.push((field.section.as_str(), vec![field])),
            }
        }
        sections
    }
}

/// Form state key for checklist question `index` of phase `phase_id`.
pub fn checklist_key(phase_id: u8, index: usize) -> String {
    format!("question{}_{}", phase_id, index)
}

/// All phases, ordered by id.
pub fn phases() -> &'static [PhaseDefinition] {
    &PHASES
}

/// Look up a phase by id.
pub fn phase(id: u8) -> Option<&'static PhaseDefinition> {
    find_phase(&PHASES, id)
}

/// Look up a phase by id in an arbitrary catalog.
pub fn find_phase(catalog: &[PhaseDefinition], id: u8) -> Option<&PhaseDefinition> {
    catalog.iter().find(|p| p.id == id)
}
