use serde::{Deserialize, Serialize};

use crate::access::can_add_cost;
use crate::error::{HisaabError, Result};
use crate::models::{EntryKind, User};
use crate::settings::QuickButton;

/// A work item SANJAYA is about to log from a quick button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostDraft {
    pub date: String,
    #[serde(rename = "type")]
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub extra_charges: f64,
    pub added_by: String,
}

impl CostDraft {
    pub fn total_amount(&self) -> f64 {
        self.amount + self.extra_charges
    }
}

/// The button supplies amount and category. The description defaults to
/// the button label; negative extras are dropped.
pub fn draft_quick_cost(
    user: &User,
    button: &QuickButton,
    date: &str,
    description: Option<&str>,
    extra_charges: f64,
) -> Result<CostDraft> {
    if !can_add_cost(user) {
        return Err(HisaabError::NotAllowed {
            action: "add",
            kind: EntryKind::Cost,
            id: button.id.clone(),
        });
    }

    let description = match description.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => button.label.clone(),
    };
    Ok(CostDraft {
        date: date.to_string(),
        category: button.category.clone(),
        description,
        amount: button.amount,
        extra_charges: if extra_charges.is_finite() { extra_charges.max(0.0) } else { 0.0 },
        added_by: user.name.clone(),
    })
}
