use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::amount;
use crate::error::Result;
use crate::models::{CostEntry, PaymentEntry};

pub const LEDGER_JSON: &str = "ledger.json";
pub const COSTS_CSV: &str = "costs.csv";
pub const PAYMENTS_CSV: &str = "payments.csv";

/// A snapshot of both sides of the ledger as exported by the sync layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub costs: Vec<CostEntry>,
    #[serde(default)]
    pub payments: Vec<PaymentEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerSource {
    Json(PathBuf),
    Csv { costs: PathBuf, payments: PathBuf },
    Missing,
}

impl LedgerSource {
    /// `ledger.json` wins over a CSV pair; a CSV pair needs both files.
    pub fn detect(data_dir: &Path) -> Self {
        let json = data_dir.join(LEDGER_JSON);
        if json.exists() {
            return Self::Json(json);
        }
        let costs = data_dir.join(COSTS_CSV);
        let payments = data_dir.join(PAYMENTS_CSV);
        if costs.exists() && payments.exists() {
            return Self::Csv { costs, payments };
        }
        Self::Missing
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Json(path) => path.display().to_string(),
            Self::Csv { costs, payments } => format!("{} + {}", costs.display(), payments.display()),
            Self::Missing => "(none)".to_string(),
        }
    }
}

// Sheet exports carry every cell as text.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CostRow {
    id: String,
    date: String,
    #[serde(rename = "type", default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    extra_charges: String,
    #[serde(default)]
    added_by: String,
}

impl From<CostRow> for CostEntry {
    fn from(row: CostRow) -> Self {
        CostEntry {
            id: row.id,
            date: row.date,
            category: row.category,
            description: row.description,
            amount: amount::coerce(&row.amount),
            extra_charges: amount::coerce(&row.extra_charges),
            added_by: row.added_by,
            paid: None,
            paid_date: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentRow {
    id: String,
    date: String,
    #[serde(default)]
    method: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    note: String,
    #[serde(default)]
    added_by: String,
    #[serde(default)]
    settled_cost_ids: String,
}

impl From<PaymentRow> for PaymentEntry {
    fn from(row: PaymentRow) -> Self {
        PaymentEntry {
            id: row.id,
            date: row.date,
            method: row.method,
            amount: amount::coerce(&row.amount),
            note: row.note,
            added_by: row.added_by,
            settled_cost_ids: row
                .settled_cost_ids
                .split(';')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

fn read_csv<R, T>(path: &Path) -> Result<Vec<T>>
where
    R: serde::de::DeserializeOwned,
    T: From<R>,
{
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for record in reader.deserialize::<R>() {
        out.push(T::from(record?));
    }
    Ok(out)
}

pub fn load_json(path: &Path) -> Result<Ledger> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_csv(costs: &Path, payments: &Path) -> Result<Ledger> {
    Ok(Ledger {
        costs: read_csv::<CostRow, CostEntry>(costs)?,
        payments: read_csv::<PaymentRow, PaymentEntry>(payments)?,
    })
}

pub fn load(source: &LedgerSource) -> Result<Ledger> {
    let ledger = match source {
        LedgerSource::Json(path) => load_json(path)?,
        LedgerSource::Csv { costs, payments } => load_csv(costs, payments)?,
        LedgerSource::Missing => Ledger::default(),
    };
    tracing::debug!(
        source = %source.describe(),
        costs = ledger.costs.len(),
        payments = ledger.payments.len(),
        "loaded ledger"
    );
    Ok(ledger)
}
