//! Per-user dashboard settings.

use serde::{Deserialize, Serialize};

/// How the summary page derives its total user count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCountLogic {
    /// Count users from the raw ingestion files (backend default).
    #[default]
    RawFiles,
    /// Use a fixed operator-supplied count instead.
    CustomInput,
}

impl UserCountLogic {
    pub fn as_key(&self) -> &'static str {
        match self {
            UserCountLogic::RawFiles => "raw_files",
            UserCountLogic::CustomInput => "custom_input",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "raw_files" => Some(UserCountLogic::RawFiles),
            "custom_input" => Some(UserCountLogic::CustomInput),
            _ => None,
        }
    }
}

/// `GET`/`POST /api/user-settings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub user_count_logic: UserCountLogic,
    #[serde(default)]
    pub custom_user_count: Option<u32>,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            user_count_logic: UserCountLogic::RawFiles,
            custom_user_count: None,
            theme: default_theme(),
        }
    }
}

impl UserSettings {
    /// Custom-input mode requires a positive custom count.
    pub fn validate(&self) -> Result<(), String> {
        if self.user_count_logic == UserCountLogic::CustomInput {
            match self.custom_user_count {
                Some(count) if count > 0 => Ok(()),
                _ => Err("Please enter a valid positive number for custom user count".to_string()),
            }
        } else {
            Ok(())
        }
    }
}
