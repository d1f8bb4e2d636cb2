//! Configuration types for meetbot.
//!
//! `MeetbotConfig` represents `meetbot.toml` in the data directory. Every
//! field has a default, so an empty or missing file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetbotConfig {
    #[serde(default)]
    pub dialogue: DialogueConfig,

    #[serde(default)]
    pub sheets: SheetsConfig,

    #[serde(default)]
    pub telegram: TelegramConfig,
}

/// Localized answer tokens recognized by the meeting form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// Confirms the meeting at the final step.
    #[serde(default = "default_yes_token")]
    pub yes_token: String,

    /// Skips the description; at the final step any non-yes answer declines.
    #[serde(default = "default_no_token")]
    pub no_token: String,
}

fn default_yes_token() -> String {
    "да".to_string()
}

fn default_no_token() -> String {
    "нет".to_string()
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            yes_token: default_yes_token(),
            no_token: default_no_token(),
        }
    }
}

/// Google Sheets meeting store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet key. `MEETBOT_SPREADSHEET_ID` and `spreadsheet.txt` are
    /// consulted when this is unset.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    /// Worksheet (tab) holding the meeting rows.
    #[serde(default = "default_worksheet")]
    pub worksheet: String,

    /// Service-account key file, relative to the data directory unless absolute.
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Sheets API base URL (overridable for proxies and tests).
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_worksheet() -> String {
    "Meetings".to_string()
}

fn default_credentials_file() -> String {
    "credentials.json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_api_base() -> String {
    "https://sheets.googleapis.com".to_string()
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            worksheet: default_worksheet(),
            credentials_file: default_credentials_file(),
            request_timeout_secs: default_request_timeout_secs(),
            api_base: default_api_base(),
        }
    }
}

/// Telegram transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Publish the command menu with `setMyCommands` on startup.
    #[serde(default = "default_register_commands")]
    pub register_commands: bool,
}

fn default_register_commands() -> bool {
    true
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            register_commands: default_register_commands(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = MeetbotConfig::default();
        assert_eq!(config.dialogue.yes_token, "да");
        assert_eq!(config.dialogue.no_token, "нет");
        assert_eq!(config.sheets.worksheet, "Meetings");
        assert_eq!(config.sheets.credentials_file, "credentials.json");
        assert_eq!(config.sheets.request_timeout_secs, 30);
        assert!(config.sheets.spreadsheet_id.is_none());
        assert!(config.telegram.register_commands);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: MeetbotConfig = toml::from_str("").unwrap();
        assert_eq!(config.dialogue.yes_token, "да");
        assert_eq!(config.sheets.api_base, "https://sheets.googleapis.com");
    }

    #[test]
    fn test_config_deserialize_with_values() {
        let toml_str = r#"
[dialogue]
yes_token = "yes"
no_token = "no"

[sheets]
spreadsheet_id = "1AbC"
worksheet = "Schedule"
request_timeout_secs = 5

[telegram]
register_commands = false
"#;
        let config: MeetbotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dialogue.yes_token, "yes");
        assert_eq!(config.dialogue.no_token, "no");
        assert_eq!(config.sheets.spreadsheet_id.as_deref(), Some("1AbC"));
        assert_eq!(config.sheets.worksheet, "Schedule");
        assert_eq!(config.sheets.request_timeout_secs, 5);
        // Unset fields in a present section still get defaults
        assert_eq!(config.sheets.credentials_file, "credentials.json");
        assert!(!config.telegram.register_commands);
    }
}
