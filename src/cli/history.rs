use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::actions::Selection;
use crate::cli::Session;
use crate::error::Result;
use crate::fmt::{rupees, short_date};
use crate::models::UserRole;
use crate::rows::{render, Badge, RowView};
use crate::view::{LedgerView, ViewConfig};

fn amount_cell(row: &RowView) -> String {
    let amount = format!("{}{}", row.badge.sign(), rupees(row.total_amount));
    let amount = match row.badge {
        Badge::Paid => amount.green().to_string(),
        Badge::Work => amount.red().to_string(),
        Badge::Payment => amount.cyan().to_string(),
    };
    match row.extra_charges {
        Some(extra) => format!("{amount}\n+{} extra", rupees(extra)),
        None => amount,
    }
}

fn actions_cell(row: &RowView) -> String {
    let mut actions = Vec::new();
    if row.click_to_select {
        actions.push(if row.selected { "unselect" } else { "select" });
    }
    if row.deletable {
        actions.push("delete");
    }
    actions.join(" ")
}

fn select_cell(row: &RowView) -> &'static str {
    match (row.selectable, row.selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, _) => "",
    }
}

pub fn run(show_paid: bool, show_payments: bool, hide_payments: bool) -> Result<()> {
    let session = Session::open()?;
    let user = &session.user;
    let ledger = &session.ledger;

    let selection = Selection::load(&session.data_dir)?;
    let mut view = LedgerView::new(&ledger.costs, &ledger.payments, ViewConfig::for_role(user.role));
    if show_paid {
        view.toggle_show_paid();
    }
    let payments_shown = view.config().show_payments;
    if (show_payments && !payments_shown) || (hide_payments && payments_shown) {
        view.toggle_show_payments();
    }
    // The CLI always accepts selections; only Ravi ever gets them.
    let out = render(&view, user, &selection.ids(), true);

    if let Some(hint) = out.empty_hint {
        println!("{}", out.title.bold());
        println!("{hint}");
        return Ok(());
    }

    let mut table = Table::new();
    let with_select = user.role == UserRole::Ravi;
    let mut header = vec!["Type", "Date", "Item", "By", "Amount", "ID"];
    if with_select {
        header.insert(0, "Sel");
    }
    header.push("Actions");
    table.set_header(header);

    for row in &out.rows {
        let label = if row.badge == Badge::Paid {
            format!("{} {}", row.label, "(Paid)".green())
        } else {
            row.label.clone()
        };
        let mut cells = vec![
            Cell::new(row.badge.label()),
            Cell::new(short_date(row.item.date())),
            Cell::new(label),
            Cell::new(row.item.added_by()),
            Cell::new(amount_cell(row)),
            Cell::new(row.item.id()),
        ];
        if with_select {
            cells.insert(0, Cell::new(select_cell(row)));
        }
        cells.push(Cell::new(actions_cell(row)));
        table.add_row(cells);
    }

    println!("{} ({})\n{table}", out.title.bold(), out.rows.len());
    Ok(())
}
