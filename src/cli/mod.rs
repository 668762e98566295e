pub mod add;
pub mod delete;
pub mod history;
pub mod init;
pub mod paid;
pub mod quick;
pub mod select;
pub mod settle;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::ledger::{self, Ledger, LedgerSource};
use crate::models::User;
use crate::settings::{load_settings, Settings};

#[derive(Parser)]
#[command(name = "hisaab", about = "Design-work ledger between Sanjaya and Ravi.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up hisaab: choose a data directory and who you are.
    Init {
        /// Directory holding the ledger snapshot (default: ~/Documents/hisaab)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Your display name, as it appears in "added by"
        #[arg(long)]
        name: Option<String>,
        /// The e-mail you sign in with
        #[arg(long)]
        email: Option<String>,
        /// E-mail that identifies Sanjaya
        #[arg(long = "sanjaya-email")]
        sanjaya_email: Option<String>,
        /// E-mail that identifies Ravi
        #[arg(long = "ravi-email")]
        ravi_email: Option<String>,
    },
    /// Show the current user, ledger source and balances.
    Status,
    /// List work and payments, newest first.
    History {
        /// Include work that has already been paid for
        #[arg(long = "show-paid")]
        show_paid: bool,
        /// Include payment rows (default for everyone except Ravi)
        #[arg(long = "show-payments", conflicts_with = "hide_payments")]
        show_payments: bool,
        /// Leave payment rows out
        #[arg(long = "hide-payments")]
        hide_payments: bool,
    },
    /// List the work items payments have settled.
    Paid,
    /// Toggle an unpaid work item in the selection (Ravi only).
    Select {
        /// Cost id
        id: String,
    },
    /// Request deletion of a ledger entry.
    Delete {
        /// Cost or payment id
        id: String,
    },
    /// Record a payment for the selected work (Ravi only).
    Settle {
        /// Payment method, e.g. UPI, Cash, Bank
        #[arg(long, default_value = "UPI")]
        method: String,
        /// Payment date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List quick-add presets.
    Quick,
    /// Log a work item from a quick-add preset (Sanjaya only).
    Add {
        /// Quick button id, see `hisaab quick`
        quick_id: String,
        /// Description (default: the button label)
        #[arg(long)]
        description: Option<String>,
        /// Extra charges on top of the preset amount
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
        /// Work date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

/// What every ledger command needs: settings, the user, and the snapshot.
pub(crate) struct Session {
    pub settings: Settings,
    pub data_dir: PathBuf,
    pub user: User,
    pub source: LedgerSource,
    pub ledger: Ledger,
}

impl Session {
    pub fn open() -> Result<Self> {
        let settings = load_settings();
        let data_dir = PathBuf::from(&settings.data_dir);
        let source = LedgerSource::detect(&data_dir);
        let ledger = ledger::load(&source)?;
        let user = settings.current_user();
        tracing::debug!(user = %user.name, role = %user.role, "session opened");
        Ok(Self {
            settings,
            data_dir,
            user,
            source,
            ledger,
        })
    }
}
