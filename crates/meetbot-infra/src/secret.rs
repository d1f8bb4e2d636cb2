//! Secret resolution for the bot token and spreadsheet key.
//!
//! Each secret is looked up in a fixed chain, first match wins:
//! environment variable, then config value (where one exists), then a
//! plain-text file in the data directory. Values are trimmed; empty values
//! count as missing.

use std::path::{Path, PathBuf};

use secrecy::SecretString;

use meetbot_types::config::SheetsConfig;
use meetbot_types::error::ConfigError;

pub const TELEGRAM_TOKEN_ENV: &str = "MEETBOT_TELEGRAM_TOKEN";
pub const SPREADSHEET_ID_ENV: &str = "MEETBOT_SPREADSHEET_ID";

/// Bot token file inside the data directory.
pub const TOKEN_FILE: &str = "token.txt";

/// Spreadsheet key file inside the data directory.
pub const SPREADSHEET_FILE: &str = "spreadsheet.txt";

enum SecretSource {
    Env(&'static str),
    Value(Option<String>),
    File(PathBuf),
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

async fn resolve(sources: Vec<SecretSource>) -> Result<Option<String>, ConfigError> {
    for source in sources {
        let found = match source {
            SecretSource::Env(name) => std::env::var(name).ok().and_then(|v| non_empty(&v)),
            SecretSource::Value(value) => value.as_deref().and_then(non_empty),
            SecretSource::File(path) => match tokio::fs::read_to_string(&path).await {
                Ok(content) => non_empty(&content),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    return Err(ConfigError::Read {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                }
            },
        };
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}

/// Resolve the Telegram bot token. The bot cannot start without one.
pub async fn telegram_token(data_dir: &Path) -> Result<SecretString, ConfigError> {
    let sources = vec![
        SecretSource::Env(TELEGRAM_TOKEN_ENV),
        SecretSource::File(data_dir.join(TOKEN_FILE)),
    ];
    resolve(sources)
        .await?
        .map(SecretString::from)
        .ok_or_else(|| {
            ConfigError::MissingSecret(format!(
                "set {TELEGRAM_TOKEN_ENV} or create {}",
                data_dir.join(TOKEN_FILE).display()
            ))
        })
}

/// Resolve the spreadsheet key. `None` means the store stays unavailable.
pub async fn spreadsheet_id(
    data_dir: &Path,
    config: &SheetsConfig,
) -> Result<Option<String>, ConfigError> {
    resolve(vec![
        SecretSource::Env(SPREADSHEET_ID_ENV),
        SecretSource::Value(config.spreadsheet_id.clone()),
        SecretSource::File(data_dir.join(SPREADSHEET_FILE)),
    ])
    .await
}
