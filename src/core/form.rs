//! Form state and the typed key layer.
//!
//! Form state is a flat mapping from key to string value, exactly as it is
//! persisted. [`FieldKey`] gives those raw keys a typed shape and checks them
//! against the phase catalog, so unknown keys are stopped at the boundary
//! instead of flowing into the generator.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{FormError, FormResult};
use crate::catalog::{find_phase, PhaseDefinition};

/// Score used for an axis with no stored value.
pub const DEFAULT_SCORE: i64 = 3;

/// Stored value of a ticked checklist question.
pub const CHECKED: &str = "true";

/// Stored value of an unticked checklist question.
pub const UNCHECKED: &str = "false";

const SCORE_PREFIX: &str = "score_";

static CHECKLIST_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^question(\d+)_(\d+)$").expect("valid checklist key pattern"));

/// Flat key/value form data shared by all phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    /// Create an empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, blank or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Stored value if it has non-whitespace content.
    pub fn filled(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Whether the key holds a non-blank value.
    pub fn is_filled(&self, key: &str) -> bool {
        self.filled(key).is_some()
    }

    /// Set a value without validation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Explicitly stored score for an axis, if it parses as an integer.
    ///
    /// Leading/trailing whitespace is ignored. Blank, malformed or
    /// out-of-`i32` values count as "not set", which keeps score arithmetic
    /// in `i64` free of overflow.
    pub fn stored_score(&self, axis_id: &str) -> Option<i64> {
        self.filled(&score_key(axis_id)).and_then(|v| v.trim().parse::<i32>().ok()).map(i64::from)
    }

    /// Raw score for an axis, falling back to [`DEFAULT_SCORE`].
    pub fn raw_score(&self, axis_id: &str) -> i64 {
        self.stored_score(axis_id).unwrap_or(DEFAULT_SCORE)
    }

    /// Whether a checklist question is ticked.
    pub fn is_checked(&self, phase_id: u8, index: usize) -> bool {
        self.get(&crate::catalog::checklist_key(phase_id, index)) == Some(CHECKED)
    }

    /// Drop keys the catalog doesn't know, logging each one.
    pub fn retain_known(self, catalog: &[PhaseDefinition]) -> Self {
        let values = self
            .values
            .into_iter()
            .filter(|(key, _)| match FieldKey::resolve(key, catalog) {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Ignoring stored key");
                    false
                }
            })
            .collect();
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Form state key for an axis score.
pub fn score_key(axis_id: &str) -> String {
    format!("{SCORE_PREFIX}{axis_id}")
}

/// One of the two stakeholder records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeholderRole {
    /// Accountable owner of the phase.
    Owner,
    /// Supporting contact.
    Support,
}

impl StakeholderRole {
    /// Both roles, owner first.
    pub const ALL: [Self; 2] = [Self::Owner, Self::Support];

    /// Key prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Support => "support",
        }
    }

    /// Display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Support => "Support",
        }
    }
}

/// An attribute of a stakeholder record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StakeholderAttribute {
    Name,
    Role,
    Company,
    Team,
    Email,
    /// Involvement & responsibilities.
    Remarks,
}

impl StakeholderAttribute {
    /// All attributes in table column order.
    pub const ALL: [Self; 6] =
        [Self::Name, Self::Role, Self::Company, Self::Team, Self::Email, Self::Remarks];

    /// Key suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Company => "Company",
            Self::Team => "Team",
            Self::Email => "Email",
            Self::Remarks => "Remarks",
        }
    }
}

/// Form state key for a stakeholder attribute, e.g. `ownerEmail`.
pub fn stakeholder_key(role: StakeholderRole, attribute: StakeholderAttribute) -> String {
    format!("{}{}", role.prefix(), attribute.suffix())
}

/// All twelve stakeholder keys, owner first.
pub fn stakeholder_keys() -> Vec<String> {
    StakeholderRole::ALL
        .iter()
        .flat_map(|role| StakeholderAttribute::ALL.iter().map(|attr| stakeholder_key(*role, *attr)))
        .collect()
}

/// A form key with its family made explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey {
    /// A phase form field, by field id.
    Field(String),
    /// An axis score, by axis id.
    Score(String),
    /// A checklist question.
    Checklist { phase: u8, index: usize },
    /// A stakeholder attribute.
    Stakeholder(StakeholderRole, StakeholderAttribute),
}

impl FieldKey {
    /// Classify a raw key by its shape. Does not consult the catalog.
    pub fn parse(raw: &str) -> Self {
        for role in StakeholderRole::ALL {
            for attr in StakeholderAttribute::ALL {
                if raw == stakeholder_key(role, attr) {
                    return Self::Stakeholder(role, attr);
                }
            }
        }

        if let Some(axis) = raw.strip_prefix(SCORE_PREFIX) {
            return Self::Score(axis.to_string());
        }

        if let Some(caps) = CHECKLIST_KEY.captures(raw) {
            if let (Ok(phase), Ok(index)) = (caps[1].parse(), caps[2].parse()) {
                return Self::Checklist { phase, index };
            }
        }

        Self::Field(raw.to_string())
    }

    /// Parse a raw key and check it against the catalog.
    pub fn resolve(raw: &str, catalog: &[PhaseDefinition]) -> FormResult<Self> {
        let key = Self::parse(raw);
        key.validate(catalog)?;
        Ok(key)
    }

    /// Check that the catalog defines this key.
    pub fn validate(&self, catalog: &[PhaseDefinition]) -> FormResult<()> {
        match self {
            Self::Field(id) => {
                if catalog.iter().any(|p| p.field(id).is_some()) {
                    Ok(())
                } else {
                    Err(FormError::UnknownKey(self.to_string()))
                }
            }
            Self::Score(axis) => {
                if catalog.iter().any(|p| p.axis(axis).is_some()) {
                    Ok(())
                } else {
                    Err(FormError::UnknownKey(self.to_string()))
                }
            }
            Self::Checklist { phase, index } => {
                let def = find_phase(catalog, *phase).ok_or(FormError::UnknownPhase(*phase))?;
                if *index < def.checklist_questions.len() {
                    Ok(())
                } else {
                    Err(FormError::UnknownQuestion { phase: *phase, index: *index })
                }
            }
            Self::Stakeholder(..) => Ok(()),
        }
    }

    /// Check that a value is acceptable for this key.
    pub fn validate_value(&self, value: &str) -> FormResult<()> {
        match self {
            Self::Score(axis) => match value.trim().parse::<i64>() {
                Ok(score) if (1..=5).contains(&score) => Ok(()),
                _ => Err(FormError::InvalidScore { axis: axis.clone(), value: value.to_string() }),
            },
            Self::Checklist { .. } if value != CHECKED && value != UNCHECKED => {
                Err(FormError::InvalidChecklistValue(value.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(id) => write!(f, "{id}"),
            Self::Score(axis) => write!(f, "{}", score_key(axis)),
            Self::Checklist { phase, index } => {
                write!(f, "{}", crate::catalog::checklist_key(*phase, *index))
            }
            Self::Stakeholder(role, attr) => write!(f, "{}", stakeholder_key(*role, *attr)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::phases;

    #[test]
    fn test_filled_treats_whitespace_as_blank() {
        let state: FormState = [("a", "  \n\t"), ("b", " x ")].into_iter().collect();
        assert!(!state.is_filled("a"));
        assert_eq!(state.filled("b"), Some(" x "));
        assert!(!state.is_filled("missing"));
    }

    #[test]
    fn test_raw_score_defaults() {
        let state: FormState =
            [("score_a", "5"), ("score_b", "abc"), ("score_c", ""), ("score_d", " 2 ")]
                .into_iter()
                .collect();
        assert_eq!(state.raw_score("a"), 5);
        assert_eq!(state.raw_score("b"), DEFAULT_SCORE);
        assert_eq!(state.raw_score("c"), DEFAULT_SCORE);
        assert_eq!(state.raw_score("d"), 2);
        assert_eq!(state.raw_score("missing"), DEFAULT_SCORE);
        assert!(state.stored_score("b").is_none());
    }

    #[test]
    fn test_stored_score_outside_i32_is_not_set() {
        let state: FormState = [
            ("score_min", "-9223372036854775808"),
            ("score_max", "9223372036854775807"),
            ("score_edge", "-2147483648"),
        ]
        .into_iter()
        .collect();
        assert!(state.stored_score("min").is_none());
        assert!(state.stored_score("max").is_none());
        assert_eq!(state.raw_score("max"), DEFAULT_SCORE);
        assert_eq!(state.stored_score("edge"), Some(-2_147_483_648));

        let partial: FormState =
            [("score_half", "4.5"), ("score_suffix", "4abc")].into_iter().collect();
        assert!(partial.stored_score("half").is_none());
        assert!(partial.stored_score("suffix").is_none());
    }

    #[test]
    fn test_is_checked_requires_exact_true() {
        let state: FormState =
            [("question1_0", "true"), ("question1_1", "TRUE"), ("question1_2", "false")]
                .into_iter()
                .collect();
        assert!(state.is_checked(1, 0));
        assert!(!state.is_checked(1, 1));
        assert!(!state.is_checked(1, 2));
        assert!(!state.is_checked(2, 0));
    }

    #[test]
    fn test_parse_key_families() {
        assert_eq!(
            FieldKey::parse("ownerEmail"),
            FieldKey::Stakeholder(StakeholderRole::Owner, StakeholderAttribute::Email)
        );
        assert_eq!(FieldKey::parse("score_riskLevel"), FieldKey::Score("riskLevel".into()));
        assert_eq!(FieldKey::parse("question3_2"), FieldKey::Checklist { phase: 3, index: 2 });
        assert_eq!(FieldKey::parse("useCaseName"), FieldKey::Field("useCaseName".into()));
        assert_eq!(FieldKey::parse("question999_1"), FieldKey::Field("question999_1".into()));
    }

    #[test]
    fn test_display_round_trips_raw_key() {
        for raw in ["supportRemarks", "score_codeQuality", "question9_4", "dataModels"] {
            assert_eq!(FieldKey::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_resolve_against_catalog() {
        let catalog = phases();
        assert!(FieldKey::resolve("useCaseName", catalog).is_ok());
        assert!(FieldKey::resolve("score_deploymentRisk", catalog).is_ok());
        assert!(FieldKey::resolve("question2_4", catalog).is_ok());
        assert!(FieldKey::resolve("supportTeam", catalog).is_ok());

        assert!(matches!(
            FieldKey::resolve("favouriteColour", catalog),
            Err(FormError::UnknownKey(_))
        ));
        assert!(matches!(
            FieldKey::resolve("score_vibes", catalog),
            Err(FormError::UnknownKey(_))
        ));
        assert!(matches!(
            FieldKey::resolve("question2_5", catalog),
            Err(FormError::UnknownQuestion { phase: 2, index: 5 })
        ));
        assert!(matches!(
            FieldKey::resolve("question12_0", catalog),
            Err(FormError::UnknownPhase(12))
        ));
    }

    #[test]
    fn test_validate_value() {
        let score = FieldKey::Score("riskLevel".into());
        assert!(score.validate_value("1").is_ok());
        assert!(score.validate_value("5").is_ok());
        assert!(score.validate_value("0").is_err());
        assert!(score.validate_value("6").is_err());
        assert!(score.validate_value("high").is_err());

        let question = FieldKey::Checklist { phase: 1, index: 0 };
        assert!(question.validate_value("true").is_ok());
        assert!(question.validate_value("false").is_ok());
        assert!(matches!(
            question.validate_value("yes"),
            Err(FormError::InvalidChecklistValue(_))
        ));

        assert!(FieldKey::Field("useCaseName".into()).validate_value("").is_ok());
    }

    #[test]
    fn test_retain_known_drops_unknown_keys() {
        let state: FormState =
            [("useCaseName", "x"), ("legacyField", "y"), ("score_customerValue", "bogus")]
                .into_iter()
                .collect();
        let cleaned = state.retain_known(phases());
        assert_eq!(cleaned.len(), 2);
        assert!(cleaned.get("legacyField").is_none());
        // Known keys keep their value even when it is malformed.
        assert_eq!(cleaned.get("score_customerValue"), Some("bogus"));
    }

    #[test]
    fn test_stakeholder_keys() {
        let keys = stakeholder_keys();
        assert_eq!(keys.len(), 12);
        assert_eq!(keys[0], "ownerName");
        assert_eq!(keys[5], "ownerRemarks");
        assert_eq!(keys[11], "supportRemarks");
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let state: FormState = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"a":"1","b":"2"}"#);

        let back: FormState = serde_json::from_str(r#"{"a":"1","b":"2"}"#).unwrap();
        assert_eq!(back, state);
    }
}
