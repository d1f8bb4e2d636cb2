//! Application state wiring the dialogue controller to its stores.
//!
//! The controller is generic over draft/meeting store traits; AppState pins
//! it to the in-memory draft store and the Google Sheets meeting store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use meetbot_core::dialogue::DialogueController;
use meetbot_core::meeting::service::MeetingService;
use meetbot_infra::config::{load_config, resolve_in_data_dir};
use meetbot_infra::memory::InMemoryDraftStore;
use meetbot_infra::secret::spreadsheet_id;
use meetbot_infra::sheets::{
    ServiceAccountAuth, ServiceAccountKey, SheetsMeetingStore, build_http_client,
};
use meetbot_types::config::{MeetbotConfig, SheetsConfig};

/// Controller pinned to the concrete infra stores.
pub type ConcreteController = DialogueController<InMemoryDraftStore, SheetsMeetingStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<ConcreteController>,
    pub config: Arc<MeetbotConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load config and connect the meeting store.
    ///
    /// A store that cannot be reached is logged and left out; the bot keeps
    /// serving conversations and reports unsaved meetings to users.
    pub async fn init(data_dir: PathBuf) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let store = match connect_store(&data_dir, &config.sheets).await {
            Ok(Some(store)) => Some(store),
            Ok(None) => {
                tracing::warn!(
                    "no spreadsheet configured, meetings will not be saved"
                );
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Google Sheets unavailable, meetings will not be saved");
                None
            }
        };

        let controller = DialogueController::new(
            InMemoryDraftStore::new(),
            MeetingService::new(store),
            config.dialogue.clone(),
        );

        Ok(Self {
            controller: Arc::new(controller),
            config: Arc::new(config),
            data_dir,
        })
    }
}

/// Resolve the spreadsheet, load credentials and open the worksheet.
///
/// Returns `Ok(None)` when no spreadsheet id is configured anywhere.
pub async fn connect_store(
    data_dir: &Path,
    sheets: &SheetsConfig,
) -> anyhow::Result<Option<SheetsMeetingStore>> {
    let Some(id) = spreadsheet_id(data_dir, sheets).await? else {
        return Ok(None);
    };

    let credentials = resolve_in_data_dir(data_dir, &sheets.credentials_file);
    let key = ServiceAccountKey::from_file(&credentials).await?;
    let client = build_http_client(sheets)?;
    let auth = ServiceAccountAuth::new(client.clone(), key)?;
    let store = SheetsMeetingStore::connect(client, auth, sheets, id).await?;
    Ok(Some(store))
}
