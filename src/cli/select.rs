use crate::access::can_select;
use crate::actions::{FileActions, LedgerActions};
use crate::cli::Session;
use crate::error::{HisaabError, Result};
use crate::view::{LedgerView, ViewConfig};

pub fn run(id: &str) -> Result<()> {
    let session = Session::open()?;
    let ledger = &session.ledger;
    let view = LedgerView::new(&ledger.costs, &ledger.payments, ViewConfig::for_role(session.user.role));

    let item = view
        .find(id)
        .ok_or_else(|| HisaabError::UnknownEntry(id.to_string()))?;
    if !can_select(&session.user, &item, true) {
        return Err(HisaabError::NotAllowed {
            action: "select",
            kind: item.kind(),
            id: id.to_string(),
        });
    }

    let mut actions = FileActions::open(&session.data_dir, &session.user.name)?;
    actions.on_toggle_select(id)?;
    let count = actions.selection.ids().len();
    if actions.selection.contains(id) {
        println!("Selected {id} ({count} selected)");
    } else {
        println!("Deselected {id} ({count} selected)");
    }
    Ok(())
}
