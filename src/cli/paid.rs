use comfy_table::{Cell, Table};

use crate::cli::Session;
use crate::error::Result;
use crate::view::{LedgerView, ViewConfig};

pub fn run() -> Result<()> {
    let session = Session::open()?;
    let ledger = &session.ledger;
    let view = LedgerView::new(&ledger.costs, &ledger.payments, ViewConfig::for_role(session.user.role));
    let index = view.paid_index();

    let mut descriptions: Vec<&String> = index.descriptions.iter().collect();
    descriptions.sort();
    let mut ids: Vec<&String> = index.cost_ids.iter().collect();
    ids.sort();

    let mut table = Table::new();
    table.set_header(vec!["Settled by", "Reference"]);
    for d in descriptions {
        table.add_row(vec![Cell::new("note"), Cell::new(d)]);
    }
    for id in ids {
        table.add_row(vec![Cell::new("id"), Cell::new(id)]);
    }
    println!("Paid Items\n{table}");
    Ok(())
}
