use std::path::PathBuf;

use crate::error::Result;
use crate::ledger::{Ledger, LedgerSource, LEDGER_JSON};
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub struct InitArgs {
    pub data_dir: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub sanjaya_email: Option<String>,
    pub ravi_email: Option<String>,
}

pub fn run(args: InitArgs) -> Result<()> {
    let mut settings = load_settings();

    if let Some(dir) = args.data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    if let Some(name) = args.name {
        settings.user_name = name;
    }
    if let Some(email) = args.email {
        settings.user_email = email;
    }
    if let Some(email) = args.sanjaya_email {
        settings.sanjaya_email = email;
    }
    if let Some(email) = args.ravi_email {
        settings.ravi_email = email;
    }

    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;
    if LedgerSource::detect(&resolved) == LedgerSource::Missing {
        let json = serde_json::to_string_pretty(&Ledger::default())?;
        std::fs::write(resolved.join(LEDGER_JSON), format!("{json}\n"))?;
    }

    let user = settings.current_user();
    println!("Initialized hisaab at {}", resolved.display());
    println!("Signed in as {} ({})", if user.name.is_empty() { "(not set)" } else { &user.name }, user.role);
    Ok(())
}
