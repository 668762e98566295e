use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::rupees;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let mut table = Table::new();
    table.set_header(vec!["ID", "Label", "Type", "Amount"]);
    for button in &settings.quick_buttons {
        table.add_row(vec![
            Cell::new(&button.id),
            Cell::new(&button.label),
            Cell::new(&button.category),
            Cell::new(rupees(button.amount)),
        ]);
    }
    println!("Quick Buttons\n{table}");
    Ok(())
}
