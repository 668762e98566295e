use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{HisaabError, Result};
use crate::models::{User, UserRole};

/// A one-tap cost preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickButton {
    pub id: String,
    pub label: String,
    #[serde(default, deserialize_with = "crate::amount::lenient")]
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub sanjaya_email: String,
    #[serde(default)]
    pub ravi_email: String,
    #[serde(default = "default_quick_buttons")]
    pub quick_buttons: Vec<QuickButton>,
    /// Where the sync layer pushes outbox requests. Not used here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_url: Option<String>,
}

fn default_quick_buttons() -> Vec<QuickButton> {
    [
        ("q1", "Social Post", 500.0, "Social Media"),
        ("q2", "Story", 200.0, "Social Media"),
        ("q3", "Logo", 2500.0, "Branding"),
        ("q4", "Banner", 800.0, "Print"),
    ]
    .into_iter()
    .map(|(id, label, amount, category)| QuickButton {
        id: id.to_string(),
        label: label.to_string(),
        amount,
        category: category.to_string(),
    })
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
            user_name: String::new(),
            user_email: String::new(),
            sanjaya_email: String::new(),
            ravi_email: String::new(),
            quick_buttons: default_quick_buttons(),
            sync_url: None,
        }
    }
}

impl Settings {
    pub fn quick_button(&self, id: &str) -> Option<&QuickButton> {
        self.quick_buttons.iter().find(|b| b.id == id)
    }

    /// Role is decided by which configured address the user signed in with.
    pub fn resolve_role(&self, email: &str) -> UserRole {
        let email = email.trim();
        if email.is_empty() {
            UserRole::None
        } else if email.eq_ignore_ascii_case(self.sanjaya_email.trim()) {
            UserRole::Sanjaya
        } else if email.eq_ignore_ascii_case(self.ravi_email.trim()) {
            UserRole::Ravi
        } else {
            UserRole::None
        }
    }

    pub fn current_user(&self) -> User {
        User {
            name: self.user_name.clone(),
            email: self.user_email.clone(),
            role: self.resolve_role(&self.user_email),
        }
    }
}

fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("HISAAB_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hisaab")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("hisaab")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "unreadable settings, using defaults");
            Settings::default()
        })
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| HisaabError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Settings {
        Settings {
            sanjaya_email: "sanjaya@studio.in".to_string(),
            ravi_email: "Ravi@Client.com".to_string(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_resolve_role_case_insensitive() {
        let s = configured();
        assert_eq!(s.resolve_role("SANJAYA@studio.in"), UserRole::Sanjaya);
        assert_eq!(s.resolve_role(" ravi@client.com "), UserRole::Ravi);
    }

    #[test]
    fn test_resolve_role_unknown_or_empty() {
        let s = configured();
        assert_eq!(s.resolve_role("someone@else.com"), UserRole::None);
        assert_eq!(s.resolve_role(""), UserRole::None);
        // Unconfigured role addresses never match an empty login.
        assert_eq!(Settings::default().resolve_role(""), UserRole::None);
    }

    #[test]
    fn test_quick_button_lookup() {
        let s = Settings::default();
        assert_eq!(s.quick_button("q3").map(|b| b.label.as_str()), Some("Logo"));
        assert!(s.quick_button("q9").is_none());
    }

    #[test]
    fn test_current_user() {
        let s = Settings {
            user_name: "Ravi".to_string(),
            user_email: "ravi@client.com".to_string(),
            ..configured()
        };
        let user = s.current_user();
        assert_eq!(user.name, "Ravi");
        assert_eq!(user.role, UserRole::Ravi);
    }

    #[test]
    fn test_load_merges_with_defaults() {
        let json = r#"{"data_dir": "/tmp/test", "user_name": "Sanjaya"}"#;
        let s: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(s.user_name, "Sanjaya");
        assert!(s.user_email.is_empty());
        assert_eq!(s.quick_buttons.len(), 4);
        assert!(s.sync_url.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            data_dir: "/tmp/test".to_string(),
            user_name: "Sanjaya".to_string(),
            sync_url: Some("https://script.example.com/exec".to_string()),
            quick_buttons: vec![],
            ..configured()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        let loaded: Settings = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.user_name, "Sanjaya");
        assert_eq!(loaded.sanjaya_email, "sanjaya@studio.in");
        assert!(loaded.quick_buttons.is_empty());
        assert_eq!(loaded.sync_url.as_deref(), Some("https://script.example.com/exec"));
    }
}
