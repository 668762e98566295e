use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::annotator::{annotate, AnnotatedCost};
use crate::matcher::{is_settlement_note, PaidIndex};
use crate::models::{CostEntry, EntryKind, PaymentEntry, UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub show_paid_items: bool,
    pub show_payments: bool,
}

impl ViewConfig {
    /// Paid work is hidden by default. RAVI starts without payment rows,
    /// everyone else sees them.
    pub fn for_role(role: UserRole) -> Self {
        Self {
            show_paid_items: false,
            show_payments: role != UserRole::Ravi,
        }
    }
}

/// One row of the merged list, borrowed from the ledger for a single pass.
#[derive(Debug, Clone, Copy)]
pub enum DisplayItem<'a> {
    Cost(AnnotatedCost<'a>),
    Payment(&'a PaymentEntry),
}

impl<'a> DisplayItem<'a> {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Cost(_) => EntryKind::Cost,
            Self::Payment(_) => EntryKind::Payment,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            Self::Cost(c) => &c.cost.id,
            Self::Payment(p) => &p.id,
        }
    }

    pub fn date(&self) -> &'a str {
        match self {
            Self::Cost(c) => &c.cost.date,
            Self::Payment(p) => &p.date,
        }
    }

    pub fn added_by(&self) -> &'a str {
        match self {
            Self::Cost(c) => &c.cost.added_by,
            Self::Payment(p) => &p.added_by,
        }
    }

    /// Only costs can be paid.
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Cost(c) if c.is_paid)
    }

    pub fn extra_charges(&self) -> f64 {
        match self {
            Self::Cost(c) => c.cost.extra_charges,
            Self::Payment(_) => 0.0,
        }
    }

    pub fn total_amount(&self) -> f64 {
        match self {
            Self::Cost(c) => c.total_amount(),
            Self::Payment(p) => p.amount,
        }
    }
}

/// A payment that settles listed work. Hidden together with paid work so
/// the settlement is not shown twice.
pub fn is_settlement(payment: &PaymentEntry) -> bool {
    is_settlement_note(&payment.note) || !payment.settled_cost_ids.is_empty()
}

/// Parse the date formats seen in ledger sources.
pub fn parse_entry_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Newest first; unparseable dates after everything else.
fn newest_first(a: &Option<NaiveDateTime>, b: &Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Merge, filter and sort. Pure; call again whenever an input changes.
pub fn filter_items<'a>(
    costs: &[AnnotatedCost<'a>],
    payments: &'a [PaymentEntry],
    config: ViewConfig,
) -> Vec<DisplayItem<'a>> {
    let mut items: Vec<DisplayItem<'a>> = costs.iter().copied().map(DisplayItem::Cost).collect();
    if config.show_payments {
        items.extend(payments.iter().map(DisplayItem::Payment));
    }

    if !config.show_paid_items {
        items.retain(|item| match item {
            DisplayItem::Cost(c) => !c.is_paid,
            DisplayItem::Payment(p) => !is_settlement(p),
        });
    }

    let mut keyed: Vec<(Option<NaiveDateTime>, DisplayItem<'a>)> = items
        .into_iter()
        .map(|item| (parse_entry_date(item.date()), item))
        .collect();
    keyed.sort_by(|a, b| newest_first(&a.0, &b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// The reconciliation view over one ledger snapshot. The paid index and
/// annotations are computed once per snapshot; toggles only re-run the
/// merge.
pub struct LedgerView<'a> {
    payments: &'a [PaymentEntry],
    paid: PaidIndex,
    annotated: Vec<AnnotatedCost<'a>>,
    config: ViewConfig,
}

impl<'a> LedgerView<'a> {
    pub fn new(costs: &'a [CostEntry], payments: &'a [PaymentEntry], config: ViewConfig) -> Self {
        let paid = PaidIndex::from_payments(payments);
        let annotated = annotate(costs, &paid);
        Self {
            payments,
            paid,
            annotated,
            config,
        }
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    pub fn paid_index(&self) -> &PaidIndex {
        &self.paid
    }

    pub fn annotated_costs(&self) -> &[AnnotatedCost<'a>] {
        &self.annotated
    }

    pub fn toggle_show_paid(&mut self) {
        self.config.show_paid_items = !self.config.show_paid_items;
    }

    pub fn toggle_show_payments(&mut self) {
        self.config.show_payments = !self.config.show_payments;
    }

    pub fn items(&self) -> Vec<DisplayItem<'a>> {
        filter_items(&self.annotated, self.payments, self.config)
    }

    /// Look an entry up across the whole ledger, not just the filtered rows.
    pub fn find(&self, id: &str) -> Option<DisplayItem<'a>> {
        self.annotated
            .iter()
            .find(|c| c.cost.id == id)
            .map(|c| DisplayItem::Cost(*c))
            .or_else(|| {
                self.payments
                    .iter()
                    .find(|p| p.id == id)
                    .map(DisplayItem::Payment)
            })
    }
}
