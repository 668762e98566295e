use chrono::Local;

use crate::actions::{now_stamp, FileActions, Request};
use crate::cli::Session;
use crate::error::Result;
use crate::fmt::rupees;
use crate::settlement::draft_settlement;
use crate::view::{LedgerView, ViewConfig};

pub fn run(method: &str, date: Option<String>) -> Result<()> {
    let session = Session::open()?;
    let ledger = &session.ledger;
    let view = LedgerView::new(&ledger.costs, &ledger.payments, ViewConfig::for_role(session.user.role));

    let mut actions = FileActions::open(&session.data_dir, &session.user.name)?;
    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let draft = draft_settlement(
        &session.user,
        view.annotated_costs(),
        &actions.selection.ids(),
        &date,
        method,
    )?;

    let items = draft.settled_cost_ids.len();
    let amount = draft.amount;
    let note = draft.note.clone();
    actions.outbox.push(&Request::RecordPayment {
        draft,
        requested_at: now_stamp(),
    })?;
    actions.selection.clear();
    actions.selection.save()?;

    println!("Recorded payment of {} for {items} item(s) via {method}", rupees(amount));
    println!("{note}");
    Ok(())
}
