use std::collections::HashSet;

use crate::access::{can_delete, can_select};
use crate::models::User;
use crate::view::{DisplayItem, LedgerView, ViewConfig};

pub const DEFAULT_COST_LABEL: &str = "Design Work";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Paid,
    Work,
    Payment,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Work => "WORK",
            Self::Payment => "PAYMENT",
        }
    }

    /// Checkmark for settled work, debit for pending work, credit for money in.
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Paid => "\u{2713}",
            Self::Work => "-",
            Self::Payment => "+",
        }
    }
}

/// Everything a front end needs to draw one row and wire its affordances.
#[derive(Debug, Clone)]
pub struct RowView<'a> {
    pub item: DisplayItem<'a>,
    pub label: String,
    pub badge: Badge,
    pub total_amount: f64,
    /// Shown as a separate sub-label when positive.
    pub extra_charges: Option<f64>,
    pub selectable: bool,
    /// Clicking the row body toggles selection.
    pub click_to_select: bool,
    pub selected: bool,
    pub deletable: bool,
}

fn label_for(item: &DisplayItem) -> String {
    match item {
        DisplayItem::Cost(c) if c.cost.description.trim().is_empty() => DEFAULT_COST_LABEL.to_string(),
        DisplayItem::Cost(c) => c.cost.description.clone(),
        DisplayItem::Payment(p) if p.note.trim().is_empty() => format!("Payment via {}", p.method),
        DisplayItem::Payment(p) => p.note.clone(),
    }
}

fn badge_for(item: &DisplayItem) -> Badge {
    match item {
        DisplayItem::Cost(c) if c.is_paid => Badge::Paid,
        DisplayItem::Cost(_) => Badge::Work,
        DisplayItem::Payment(_) => Badge::Payment,
    }
}

pub fn build_row<'a>(
    item: DisplayItem<'a>,
    user: &User,
    selected_ids: &HashSet<String>,
    selection_enabled: bool,
) -> RowView<'a> {
    let selectable = can_select(user, &item, selection_enabled);
    let extra = item.extra_charges();
    RowView {
        label: label_for(&item),
        badge: badge_for(&item),
        total_amount: item.total_amount(),
        extra_charges: (extra > 0.0).then_some(extra),
        selectable,
        click_to_select: selectable && !item.is_paid(),
        selected: selected_ids.contains(item.id()) && !item.is_paid(),
        deletable: can_delete(user, &item),
        item,
    }
}

/// One render pass: header, rows, or the empty state.
#[derive(Debug, Clone)]
pub struct Rendered<'a> {
    pub title: &'static str,
    pub rows: Vec<RowView<'a>>,
    pub empty_hint: Option<&'static str>,
}

pub fn title(config: ViewConfig) -> &'static str {
    if config.show_paid_items {
        "Completed Work"
    } else {
        "Pending Work"
    }
}

pub fn empty_hint(config: ViewConfig) -> &'static str {
    if config.show_paid_items {
        "No work items found."
    } else {
        "No pending items. Show paid items to see completed work."
    }
}

pub fn render<'a>(
    view: &LedgerView<'a>,
    user: &User,
    selected_ids: &HashSet<String>,
    selection_enabled: bool,
) -> Rendered<'a> {
    let config = view.config();
    let rows: Vec<RowView<'a>> = view
        .items()
        .into_iter()
        .map(|item| build_row(item, user, selected_ids, selection_enabled))
        .collect();
    let empty_hint = rows.is_empty().then(|| empty_hint(config));
    Rendered {
        title: title(config),
        rows,
        empty_hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostEntry, PaymentEntry, UserRole};

    fn user(role: UserRole) -> User {
        User {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            role,
        }
    }

    fn cost(id: &str, description: &str, amount: f64, extra: f64) -> CostEntry {
        CostEntry {
            id: id.to_string(),
            date: "2024-01-01".to_string(),
            category: "Design".to_string(),
            description: description.to_string(),
            amount,
            extra_charges: extra,
            added_by: "Sanjaya".to_string(),
            paid: None,
            paid_date: None,
        }
    }

    fn payment(id: &str, note: &str) -> PaymentEntry {
        PaymentEntry {
            id: id.to_string(),
            date: "2024-01-02".to_string(),
            method: "UPI".to_string(),
            amount: 500.0,
            note: note.to_string(),
            added_by: "Ravi".to_string(),
            settled_cost_ids: Vec::new(),
        }
    }

    fn all_config() -> ViewConfig {
        ViewConfig {
            show_paid_items: true,
            show_payments: true,
        }
    }

    #[test]
    fn test_extra_charges_sub_label() {
        let costs = vec![cost("c1", "Brochure", 400.0, 100.0), cost("c2", "Card", 50.0, 0.0)];
        let view = LedgerView::new(&costs, &[], all_config());
        let out = render(&view, &user(UserRole::Sanjaya), &HashSet::new(), false);
        let brochure = out.rows.iter().find(|r| r.item.id() == "c1").unwrap();
        assert_eq!(brochure.total_amount, 500.0);
        assert_eq!(brochure.extra_charges, Some(100.0));
        let card = out.rows.iter().find(|r| r.item.id() == "c2").unwrap();
        assert_eq!(card.extra_charges, None);
    }

    #[test]
    fn test_badges_and_labels() {
        let costs = vec![cost("c1", "Logo Design", 500.0, 0.0), cost("c2", "  ", 10.0, 0.0)];
        let payments = vec![payment("p1", "Payment for: Logo Design (Rs.500)"), payment("p2", "")];
        let view = LedgerView::new(&costs, &payments, all_config());
        let out = render(&view, &user(UserRole::Sanjaya), &HashSet::new(), false);
        let by_id = |id: &str| out.rows.iter().find(|r| r.item.id() == id).unwrap().clone();

        assert_eq!(by_id("c1").badge, Badge::Paid);
        assert_eq!(by_id("c1").badge.sign(), "\u{2713}");
        assert_eq!(by_id("c2").badge, Badge::Work);
        assert_eq!(by_id("c2").label, DEFAULT_COST_LABEL);
        assert_eq!(by_id("p1").badge, Badge::Payment);
        assert_eq!(by_id("p2").label, "Payment via UPI");
    }

    #[test]
    fn test_none_role_has_no_affordances() {
        let costs = vec![cost("c1", "Logo Design", 500.0, 0.0), cost("c2", "Banner", 10.0, 0.0)];
        let payments = vec![payment("p1", "Payment for: Logo Design (Rs.500)"), payment("p2", "")];
        let view = LedgerView::new(&costs, &payments, all_config());
        let selected: HashSet<String> = ["c2".to_string()].into_iter().collect();
        let out = render(&view, &user(UserRole::None), &selected, true);
        assert_eq!(out.rows.len(), 4);
        assert!(out.rows.iter().all(|r| !r.selectable && !r.click_to_select && !r.deletable));
    }

    #[test]
    fn test_ravi_selection_state() {
        let costs = vec![cost("c1", "Logo Design", 500.0, 0.0), cost("c2", "Banner", 10.0, 0.0)];
        let payments = vec![payment("p1", "Payment for: Logo Design (Rs.500)")];
        let view = LedgerView::new(&costs, &payments, all_config());
        let selected: HashSet<String> = ["c1".to_string(), "c2".to_string()].into_iter().collect();
        let out = render(&view, &user(UserRole::Ravi), &selected, true);
        let c1 = out.rows.iter().find(|r| r.item.id() == "c1").unwrap();
        let c2 = out.rows.iter().find(|r| r.item.id() == "c2").unwrap();
        let p1 = out.rows.iter().find(|r| r.item.id() == "p1").unwrap();
        assert!(!c1.selectable && !c1.selected && !c1.click_to_select);
        assert!(c2.selectable && c2.selected && c2.click_to_select);
        assert!(p1.deletable);
        assert!(!c2.deletable);
    }

    #[test]
    fn test_empty_state_hints() {
        let costs = vec![cost("c1", "Logo Design", 500.0, 0.0)];
        let payments = vec![payment("p1", "Payment for: Logo Design (Rs.500)")];
        let pending = LedgerView::new(&costs, &payments, ViewConfig::for_role(UserRole::Ravi));
        let out = render(&pending, &user(UserRole::Ravi), &HashSet::new(), true);
        assert!(out.rows.is_empty());
        assert_eq!(out.title, "Pending Work");
        assert_eq!(out.empty_hint, Some(empty_hint(pending.config())));

        let none: Vec<CostEntry> = Vec::new();
        let completed = LedgerView::new(&none, &[], all_config());
        let out = render(&completed, &user(UserRole::Ravi), &HashSet::new(), true);
        assert_eq!(out.title, "Completed Work");
        assert_eq!(out.empty_hint, Some("No work items found."));
    }
}
