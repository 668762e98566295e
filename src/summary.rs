use crate::annotator::AnnotatedCost;
use crate::models::PaymentEntry;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub work_count: usize,
    pub work_total: f64,
    pub pending_count: usize,
    pub pending_total: f64,
    pub payments_count: usize,
    pub payments_total: f64,
    /// Work logged minus money received. Negative means an advance.
    pub outstanding: f64,
}

pub fn summarize(costs: &[AnnotatedCost], payments: &[PaymentEntry]) -> Summary {
    let work_total: f64 = costs.iter().map(|c| c.total_amount()).sum();
    let pending: Vec<&AnnotatedCost> = costs.iter().filter(|c| !c.is_paid).collect();
    let payments_total: f64 = payments.iter().map(|p| p.amount).sum();
    Summary {
        work_count: costs.len(),
        work_total,
        pending_count: pending.len(),
        pending_total: pending.iter().map(|c| c.total_amount()).sum(),
        payments_count: payments.len(),
        payments_total,
        outstanding: work_total - payments_total,
    }
}
