use crate::access::can_delete;
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
    let kind = item.kind();
    if !can_delete(&session.user, &item) {
        return Err(HisaabError::NotAllowed {
            action: "delete",
            kind,
            id: id.to_string(),
        });
    }

    let mut actions = FileActions::open(&session.data_dir, &session.user.name)?;
    actions.on_delete(id, kind)?;
    println!("Requested deletion of {kind} {id}");
    Ok(())
}
