//! Configuration loader for meetbot.
//!
//! Reads `meetbot.toml` from the data directory and deserializes it into
//! [`MeetbotConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::{Path, PathBuf};

use meetbot_types::config::MeetbotConfig;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "meetbot.toml";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `MEETBOT_DATA_DIR` environment variable
/// 2. `~/.meetbot`
/// 3. `.meetbot` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MEETBOT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".meetbot");
    }

    PathBuf::from(".meetbot")
}

/// Resolve `path` against the data directory unless it is already absolute.
pub fn resolve_in_data_dir(data_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

/// Load configuration from `{data_dir}/meetbot.toml`.
///
/// - If the file does not exist, returns [`MeetbotConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> MeetbotConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE} found at {}, using defaults", config_path.display());
            return MeetbotConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return MeetbotConfig::default();
        }
    };

    match toml::from_str::<MeetbotConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            MeetbotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.dialogue.yes_token, "да");
        assert_eq!(config.sheets.worksheet, "Meetings");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[dialogue]
yes_token = "yes"

[sheets]
worksheet = "Schedule"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.dialogue.yes_token, "yes");
        assert_eq!(config.dialogue.no_token, "нет");
        assert_eq!(config.sheets.worksheet, "Schedule");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join(CONFIG_FILE), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.sheets.worksheet, "Meetings");
    }

    #[test]
    fn resolve_in_data_dir_relative_and_absolute() {
        let data_dir = Path::new("/srv/meetbot");
        assert_eq!(
            resolve_in_data_dir(data_dir, "credentials.json"),
            PathBuf::from("/srv/meetbot/credentials.json")
        );
        assert_eq!(
            resolve_in_data_dir(data_dir, "/etc/meetbot/key.json"),
            PathBuf::from("/etc/meetbot/key.json")
        );
    }
}
