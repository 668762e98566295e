use chrono::Local;

use crate::actions::{now_stamp, Outbox, Request};
use crate::cli::Session;
use crate::error::{HisaabError, Result};
use crate::fmt::rupees;
use crate::quick_add::draft_quick_cost;

pub fn run(quick_id: &str, description: Option<&str>, extra: f64, date: Option<String>) -> Result<()> {
    let session = Session::open()?;
    let button = session
        .settings
        .quick_button(quick_id)
        .ok_or_else(|| HisaabError::UnknownQuickButton(quick_id.to_string()))?;

    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let draft = draft_quick_cost(&session.user, button, &date, description, extra)?;
    let summary = format!("{} ({}) on {}", draft.description, rupees(draft.total_amount()), draft.date);

    Outbox::new(&session.data_dir).push(&Request::AddCost {
        draft,
        requested_at: now_stamp(),
    })?;
    println!("Queued {summary}");
    Ok(())
}
