use crate::actions::Outbox;
use crate::cli::Session;
use crate::error::Result;
use crate::fmt::rupees;
use crate::summary::summarize;
use crate::view::{LedgerView, ViewConfig};

pub fn run() -> Result<()> {
    let session = Session::open()?;
    let user = &session.user;

    println!("User:       {}", if user.name.is_empty() { "(not set)" } else { &user.name });
    println!("Role:       {}", user.role);
    println!("Data dir:   {}", session.data_dir.display());
    println!("Ledger:     {}", session.source.describe());
    if let Some(url) = &session.settings.sync_url {
        println!("Sync URL:   {url}");
    }

    let ledger = &session.ledger;
    let view = LedgerView::new(&ledger.costs, &ledger.payments, ViewConfig::for_role(user.role));
    let s = summarize(view.annotated_costs(), &ledger.payments);

    println!();
    println!("Work items:    {} ({})", s.work_count, rupees(s.work_total));
    println!("Pending:       {} ({})", s.pending_count, rupees(s.pending_total));
    println!("Payments:      {} ({})", s.payments_count, rupees(s.payments_total));
    println!("Outstanding:   {}", rupees(s.outstanding));
    println!("Queued:        {}", Outbox::new(&session.data_dir).read_all()?.len());
    Ok(())
}
