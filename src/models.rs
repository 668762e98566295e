use std::fmt;

use serde::{Deserialize, Serialize};

use crate::amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Sanjaya,
    Ravi,
    /// Also what any unrecognised role string deserializes to.
    #[default]
    #[serde(other)]
    None,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Sanjaya => "SANJAYA",
            Self::Ravi => "RAVI",
            Self::None => "NONE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Cost,
    Payment,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Cost => "COST",
            Self::Payment => "PAYMENT",
        })
    }
}

/// A piece of logged design work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEntry {
    pub id: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub amount: f64,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub extra_charges: f64,
    #[serde(default)]
    pub added_by: String,
    /// Stored flag from the source; status is always recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
}

impl CostEntry {
    pub fn total_amount(&self) -> f64 {
        self.amount + self.extra_charges
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEntry {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub amount: f64,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub added_by: String,
    /// Ids of the costs this payment settles. Empty on records written
    /// before settlements carried ids; those rely on the note.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settled_cost_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_from_source_json() {
        let json = r#"{
            "id": "c1", "date": "2024-01-01", "type": "Logo",
            "description": "Logo Design", "amount": "400", "extraCharges": 100,
            "addedBy": "Sanjaya", "paid": false
        }"#;
        let cost: CostEntry = serde_json::from_str(json).unwrap();
        assert_eq!(cost.category, "Logo");
        assert_eq!(cost.amount, 400.0);
        assert_eq!(cost.extra_charges, 100.0);
        assert_eq!(cost.total_amount(), 500.0);
        assert_eq!(cost.added_by, "Sanjaya");
    }

    #[test]
    fn test_missing_extra_charges_is_zero() {
        let json = r#"{"id": "c2", "date": "2024-01-01", "description": "Banner", "amount": 250}"#;
        let cost: CostEntry = serde_json::from_str(json).unwrap();
        assert_eq!(cost.extra_charges, 0.0);
        assert_eq!(cost.total_amount(), 250.0);
    }

    #[test]
    fn test_legacy_payment_has_no_settled_ids() {
        let json = r#"{
            "id": "p1", "date": "2024-01-02", "method": "UPI", "amount": 500,
            "note": "Payment for: Logo Design (Rs.500)", "addedBy": "Ravi"
        }"#;
        let payment: PaymentEntry = serde_json::from_str(json).unwrap();
        assert!(payment.settled_cost_ids.is_empty());
        assert_eq!(payment.method, "UPI");
    }

    #[test]
    fn test_unknown_role_is_none() {
        let role: UserRole = serde_json::from_str(r#""ADMIN""#).unwrap();
        assert_eq!(role, UserRole::None);
        let role: UserRole = serde_json::from_str(r#""RAVI""#).unwrap();
        assert_eq!(role, UserRole::Ravi);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntryKind::Cost.to_string(), "COST");
        assert_eq!(EntryKind::Payment.to_string(), "PAYMENT");
    }
}
