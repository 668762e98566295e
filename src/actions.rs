use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{HisaabError, Result};
use crate::models::EntryKind;
use crate::quick_add::CostDraft;
use crate::settlement::PaymentDraft;

pub const OUTBOX_FILE: &str = "outbox.jsonl";
pub const SELECTION_FILE: &str = "selection.json";

/// Requests the view hands to whoever owns the ledger. Fire-and-forget:
/// the view keeps showing a row until a fresh snapshot drops it.
pub trait LedgerActions {
    fn on_delete(&mut self, id: &str, kind: EntryKind) -> Result<()>;
    fn on_toggle_select(&mut self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    Delete {
        id: String,
        kind: EntryKind,
        requested_by: String,
        requested_at: String,
    },
    RecordPayment {
        #[serde(flatten)]
        draft: PaymentDraft,
        requested_at: String,
    },
    AddCost {
        #[serde(flatten)]
        draft: CostDraft,
        requested_at: String,
    },
}

/// Append-only JSON-lines queue picked up by the sync layer.
pub struct Outbox {
    path: PathBuf,
}

impl Outbox {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(OUTBOX_FILE),
        }
    }

    pub fn push(&self, request: &Request) -> Result<()> {
        let line = serde_json::to_string(request)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{line}")?;
        tracing::info!(path = %self.path.display(), "queued request");
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<Request>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).map_err(HisaabError::from))
            .collect()
    }
}

/// The host-owned selection set, fed back into each render.
pub struct Selection {
    path: PathBuf,
    ids: Vec<String>,
}

impl Selection {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SELECTION_FILE);
        let ids = if path.exists() {
            serde_json::from_str(&std::fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, ids })
    }

    pub fn ids(&self) -> HashSet<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, format!("{}\n", serde_json::to_string_pretty(&self.ids)?))?;
        Ok(())
    }
}

/// CLI host: deletions go to the outbox, selection lives on disk.
pub struct FileActions {
    pub outbox: Outbox,
    pub selection: Selection,
    pub requested_by: String,
}

impl FileActions {
    pub fn open(data_dir: &Path, requested_by: &str) -> Result<Self> {
        Ok(Self {
            outbox: Outbox::new(data_dir),
            selection: Selection::load(data_dir)?,
            requested_by: requested_by.to_string(),
        })
    }
}

pub fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

impl LedgerActions for FileActions {
    fn on_delete(&mut self, id: &str, kind: EntryKind) -> Result<()> {
        self.outbox.push(&Request::Delete {
            id: id.to_string(),
            kind,
            requested_by: self.requested_by.clone(),
            requested_at: now_stamp(),
        })
    }

    fn on_toggle_select(&mut self, id: &str) -> Result<()> {
        self.selection.toggle(id);
        self.selection.save()
    }
}
