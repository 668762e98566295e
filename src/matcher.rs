use std::collections::HashSet;

use crate::models::PaymentEntry;

/// Notes starting with this marker list the work items a payment settles.
pub const SETTLEMENT_PREFIX: &str = "Payment for: ";
pub const REFERENCE_SEPARATOR: &str = ", ";
/// Each reference is `<description> (Rs.<amount>)`.
pub const AMOUNT_MARKER: &str = " (Rs.";

/// What the payments say has been paid: cost ids listed explicitly on
/// payments, and cost descriptions referenced by the notes of legacy
/// payments that carry no ids.
#[derive(Debug, Default, Clone)]
pub struct PaidIndex {
    pub descriptions: HashSet<String>,
    pub cost_ids: HashSet<String>,
}

impl PaidIndex {
    pub fn from_payments(payments: &[PaymentEntry]) -> Self {
        let mut index = Self::default();
        for payment in payments {
            if payment.settled_cost_ids.is_empty() {
                index
                    .descriptions
                    .extend(referenced_items(&payment.note).map(str::to_string));
            } else {
                // The note is only a comment once ids are present.
                index.cost_ids.extend(payment.settled_cost_ids.iter().cloned());
            }
        }
        index
    }

    pub fn is_paid(&self, id: &str, description: &str) -> bool {
        self.cost_ids.contains(id) || self.descriptions.contains(description)
    }
}

pub fn is_settlement_note(note: &str) -> bool {
    note.starts_with(SETTLEMENT_PREFIX)
}

/// Item names referenced by a settlement note, in note order. Notes without
/// the prefix reference nothing. A reference missing the amount marker is
/// returned whole.
pub fn referenced_items(note: &str) -> impl Iterator<Item = &str> {
    note.strip_prefix(SETTLEMENT_PREFIX)
        .into_iter()
        .flat_map(|rest| rest.split(REFERENCE_SEPARATOR))
        .map(|reference| match reference.split_once(AMOUNT_MARKER) {
            Some((name, _)) => name,
            None => {
                tracing::debug!(reference, "settlement reference has no amount marker");
                reference
            }
        })
}
