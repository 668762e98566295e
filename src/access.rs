use crate::models::{EntryKind, User, UserRole};
use crate::view::DisplayItem;

/// RAVI selects unpaid work to settle, and only when the host accepts
/// selections.
pub fn can_select(user: &User, item: &DisplayItem, selection_enabled: bool) -> bool {
    selection_enabled
        && user.role == UserRole::Ravi
        && item.kind() == EntryKind::Cost
        && !item.is_paid()
}

/// SANJAYA administers the ledger and may delete anything. RAVI may only
/// retract payments they recorded themselves. Other roles get nothing.
pub fn can_delete(user: &User, item: &DisplayItem) -> bool {
    match user.role {
        UserRole::Sanjaya => true,
        UserRole::Ravi => item.kind() == EntryKind::Payment && item.added_by() == user.name,
        UserRole::None => false,
    }
}

/// Work is logged by the designer.
pub fn can_add_cost(user: &User) -> bool {
    user.role == UserRole::Sanjaya
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::AnnotatedCost;
    use crate::models::{CostEntry, PaymentEntry};

    fn user(name: &str, role: UserRole) -> User {
        User {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
        }
    }

    fn cost() -> CostEntry {
        CostEntry {
            id: "c1".to_string(),
            date: "2024-01-01".to_string(),
            category: "Design".to_string(),
            description: "Logo Design".to_string(),
            amount: 500.0,
            extra_charges: 0.0,
            added_by: "Ravi".to_string(),
            paid: None,
            paid_date: None,
        }
    }

    fn payment(added_by: &str) -> PaymentEntry {
        PaymentEntry {
            id: "p1".to_string(),
            date: "2024-01-02".to_string(),
            method: "UPI".to_string(),
            amount: 500.0,
            note: String::new(),
            added_by: added_by.to_string(),
            settled_cost_ids: Vec::new(),
        }
    }

    #[test]
    fn test_ravi_selects_unpaid_cost_only() {
        let ravi = user("Ravi", UserRole::Ravi);
        let c = cost();
        let unpaid = DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: false });
        let paid = DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: true });
        let p = payment("Ravi");
        assert!(can_select(&ravi, &unpaid, true));
        assert!(!can_select(&ravi, &unpaid, false));
        assert!(!can_select(&ravi, &paid, true));
        assert!(!can_select(&ravi, &DisplayItem::Payment(&p), true));
    }

    #[test]
    fn test_sanjaya_cannot_select() {
        let c = cost();
        let unpaid = DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: false });
        assert!(!can_select(&user("Sanjaya", UserRole::Sanjaya), &unpaid, true));
    }

    #[test]
    fn test_sanjaya_deletes_anything() {
        let sanjaya = user("Sanjaya", UserRole::Sanjaya);
        let c = cost();
        let p = payment("Ravi");
        assert!(can_delete(&sanjaya, &DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: true })));
        assert!(can_delete(&sanjaya, &DisplayItem::Payment(&p)));
    }

    #[test]
    fn test_ravi_deletes_own_payments_only() {
        let ravi = user("Ravi", UserRole::Ravi);
        let c = cost();
        let own = payment("Ravi");
        let other = payment("Sanjaya");
        assert!(can_delete(&ravi, &DisplayItem::Payment(&own)));
        assert!(!can_delete(&ravi, &DisplayItem::Payment(&other)));
        assert!(!can_delete(&ravi, &DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: false })));
    }

    #[test]
    fn test_display_name_alone_grants_nothing() {
        let impostor = user("Sanjaya", UserRole::Ravi);
        let p = payment("Ravi");
        assert!(!can_delete(&impostor, &DisplayItem::Payment(&p)));
    }

    #[test]
    fn test_none_role_fails_closed() {
        let nobody = user("Ravi", UserRole::None);
        let c = cost();
        let p = payment("Ravi");
        for item in [
            DisplayItem::Cost(AnnotatedCost { cost: &c, is_paid: false }),
            DisplayItem::Payment(&p),
        ] {
            assert!(!can_select(&nobody, &item, true));
            assert!(!can_delete(&nobody, &item));
        }
    }

    #[test]
    fn test_only_sanjaya_adds_costs() {
        assert!(can_add_cost(&user("Sanjaya", UserRole::Sanjaya)));
        assert!(!can_add_cost(&user("Ravi", UserRole::Ravi)));
        assert!(!can_add_cost(&user("Sanjaya", UserRole::None)));
    }
}
