use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::annotator::AnnotatedCost;
use crate::error::{HisaabError, Result};
use crate::fmt::plain_amount;
use crate::matcher::{AMOUNT_MARKER, REFERENCE_SEPARATOR, SETTLEMENT_PREFIX};
use crate::models::{EntryKind, User, UserRole};

/// A payment RAVI is about to record for a batch of selected work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub date: String,
    pub method: String,
    pub amount: f64,
    pub note: String,
    pub added_by: String,
    pub settled_cost_ids: Vec<String>,
}

/// `Payment for: Logo Design (Rs.500), Banner (Rs.200)`
pub fn settlement_note(costs: &[AnnotatedCost]) -> String {
    let references: Vec<String> = costs
        .iter()
        .map(|c| format!("{}{}{})", c.cost.description, AMOUNT_MARKER, plain_amount(c.total_amount())))
        .collect();
    format!("{SETTLEMENT_PREFIX}{}", references.join(REFERENCE_SEPARATOR))
}

/// Build a payment covering the selected unpaid costs, in ledger order.
/// Selected ids that are paid or unknown are skipped.
pub fn draft_settlement(
    user: &User,
    costs: &[AnnotatedCost],
    selected_ids: &HashSet<String>,
    date: &str,
    method: &str,
) -> Result<PaymentDraft> {
    if user.role != UserRole::Ravi {
        let mut ids: Vec<&str> = selected_ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        return Err(HisaabError::NotAllowed {
            action: "settle",
            kind: EntryKind::Cost,
            id: ids.join(","),
        });
    }

    let chosen: Vec<AnnotatedCost> = costs
        .iter()
        .filter(|c| !c.is_paid && selected_ids.contains(&c.cost.id))
        .copied()
        .collect();
    if chosen.is_empty() {
        return Err(HisaabError::EmptySelection);
    }

    Ok(PaymentDraft {
        date: date.to_string(),
        method: method.to_string(),
        amount: chosen.iter().map(|c| c.total_amount()).sum(),
        note: settlement_note(&chosen),
        added_by: user.name.clone(),
        settled_cost_ids: chosen.iter().map(|c| c.cost.id.clone()).collect(),
    })
}
