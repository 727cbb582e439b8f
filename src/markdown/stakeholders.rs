//! Stakeholders table.

use crate::core::{stakeholder_key, FormState, StakeholderAttribute, StakeholderRole};

const EMPTY_CELL: &str = "-";

/// Whether any attribute of a stakeholder record is filled in.
pub fn has_data(form: &FormState, role: StakeholderRole) -> bool {
    StakeholderAttribute::ALL.iter().any(|attr| form.is_filled(&stakeholder_key(role, *attr)))
}

/// Render the stakeholders section, or `None` if neither record has data.
pub fn render(form: &FormState) -> Option<String> {
    let roles: Vec<StakeholderRole> =
        StakeholderRole::ALL.into_iter().filter(|role| has_data(form, *role)).collect();
    if roles.is_empty() {
        return None;
    }

    let mut markdown = String::from("# Stakeholders\n");
    markdown.push_str("| Name | Role | Company | Team | Email | Involvement & Responsibilities |\n");
    markdown.push_str("|:-----|:-----|:--------|:-----|:------|:-------------------------------|\n");

    for role in roles {
        let cells: Vec<&str> = StakeholderAttribute::ALL
            .iter()
            .map(|attr| form.filled(&stakeholder_key(role, *attr)).unwrap_or(EMPTY_CELL))
            .collect();
        markdown.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    Some(markdown)
}
