use crate::matcher::PaidIndex;
use crate::models::CostEntry;

/// A cost with its recomputed paid status. The stored `paid` flag on the
/// entry is ignored.
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedCost<'a> {
    pub cost: &'a CostEntry,
    pub is_paid: bool,
}

impl AnnotatedCost<'_> {
    pub fn total_amount(&self) -> f64 {
        self.cost.total_amount()
    }
}

pub fn annotate<'a>(costs: &'a [CostEntry], paid: &PaidIndex) -> Vec<AnnotatedCost<'a>> {
    costs
        .iter()
        .map(|cost| AnnotatedCost {
            cost,
            is_paid: paid.is_paid(&cost.id, &cost.description),
        })
        .collect()
}
