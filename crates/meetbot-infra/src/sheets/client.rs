//! SheetsMeetingStore -- concrete [`MeetingStore`] backed by one worksheet of
//! a Google spreadsheet.
//!
//! The worksheet's first row is the header (`meeting_id`, `title`, ...);
//! every following row is a meeting. Rows are appended with
//! `valueInputOption=RAW` so free-form date strings are stored verbatim
//! instead of being reinterpreted by Sheets.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{RequestBuilder, Url};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use meetbot_core::meeting::store::MeetingStore;
use meetbot_types::config::SheetsConfig;
use meetbot_types::error::StoreError;
use meetbot_types::meeting::{CellValue, MEETING_COLUMNS, StoredMeeting};

use super::auth::ServiceAccountAuth;
use super::types::{
    AppendRequest, ApiErrorResponse, SpreadsheetMetadata, ValueRange, cell_to_string,
};

/// Build the HTTP client shared by authentication and Sheets calls.
pub fn build_http_client(config: &SheetsConfig) -> Result<reqwest::Client, StoreError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| StoreError::Http(format!("failed to create HTTP client: {e}")))
}

/// Google Sheets meeting table.
pub struct SheetsMeetingStore {
    client: reqwest::Client,
    auth: ServiceAccountAuth,
    api_base: Url,
    spreadsheet_id: String,
    worksheet: String,
}

impl SheetsMeetingStore {
    /// Open the spreadsheet and verify that the meeting worksheet exists.
    ///
    /// Any failure here means the bot runs without a store for this process.
    pub async fn connect(
        client: reqwest::Client,
        auth: ServiceAccountAuth,
        config: &SheetsConfig,
        spreadsheet_id: String,
    ) -> Result<Self, StoreError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| StoreError::Http(format!("invalid api_base '{}': {e}", config.api_base)))?;

        let store = Self {
            client,
            auth,
            api_base,
            spreadsheet_id,
            worksheet: config.worksheet.clone(),
        };

        let titles = store.worksheet_titles().await?;
        if !titles.iter().any(|t| t == &store.worksheet) {
            return Err(StoreError::WorksheetNotFound(store.worksheet.clone()));
        }

        tracing::info!(
            spreadsheet_id = %store.spreadsheet_id,
            worksheet = %store.worksheet,
            service_account = %store.auth.client_email(),
            "connected to Google Sheets"
        );
        Ok(store)
    }

    /// The worksheet this store reads and appends to.
    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Titles of every worksheet in the spreadsheet.
    pub async fn worksheet_titles(&self) -> Result<Vec<String>, StoreError> {
        let url = self.url(&[])?;
        let request = self
            .client
            .get(url)
            .query(&[("fields", "sheets.properties.title")]);
        let metadata: SpreadsheetMetadata = self.send(request).await?;
        Ok(metadata
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect())
    }

    /// Build `{api_base}/v4/spreadsheets/{id}/{extra...}` with each segment
    /// percent-encoded.
    fn url(&self, extra: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Http(format!("api_base '{}' cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", self.spreadsheet_id.as_str()])
            .extend(extra);
        Ok(url)
    }

    /// Attach auth, send, and decode a JSON response or a Google API error.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, StoreError> {
        let token = self.auth.access_token().await?;

        let response = request
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Map raw worksheet values to meetings, keyed by the header row.
///
/// Cells missing at the end of a short row are treated as absent fields.
pub fn rows_to_meetings(values: &[Vec<serde_json::Value>]) -> Vec<StoredMeeting> {
    let Some((header, rows)) = values.split_first() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(cell_to_string).collect();

    rows.iter()
        .map(|row| {
            let fields: HashMap<String, String> = header
                .iter()
                .zip(row.iter())
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, cell)| (name.clone(), cell_to_string(cell)))
                .collect();
            StoredMeeting::from_fields(&fields)
        })
        .collect()
}

impl MeetingStore for SheetsMeetingStore {
    async fn list_all_rows(&self) -> Result<Vec<StoredMeeting>, StoreError> {
        let url = self.url(&["values", self.worksheet.as_str()])?;
        let range: ValueRange = self.send(self.client.get(url)).await?;
        Ok(rows_to_meetings(&range.values))
    }

    async fn append_row(&self, row: &[CellValue]) -> Result<(), StoreError> {
        if row.len() != MEETING_COLUMNS.len() {
            return Err(StoreError::InvalidRow(format!(
                "expected {} cells, got {}",
                MEETING_COLUMNS.len(),
                row.len()
            )));
        }

        let segment = format!("{}:append", self.worksheet);
        let url = self.url(&["values", segment.as_str()])?;
        let request = self
            .client
            .post(url)
            .query(&[("valueInputOption", "RAW")])
            .json(&AppendRequest::single_row(row));

        let _: serde_json::Value = self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::sheets::auth::tests::{mount_token_endpoint, test_key};

    const SHEET_ID: &str = "sheet-123";

    fn config(server: &MockServer) -> SheetsConfig {
        SheetsConfig {
            api_base: server.uri(),
            ..SheetsConfig::default()
        }
    }

    async fn mount_metadata(server: &MockServer, titles: &[&str]) {
        let sheets: Vec<_> = titles
            .iter()
            .map(|t| serde_json::json!({"properties": {"title": t}}))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}")))
            .and(query_param("fields", "sheets.properties.title"))
            .and(header("authorization", "Bearer test-access-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "sheets": sheets
            })))
            .mount(server)
            .await;
    }

    async fn connect(server: &MockServer) -> Result<SheetsMeetingStore, StoreError> {
        let config = config(server);
        let client = build_http_client(&config).unwrap();
        let auth = ServiceAccountAuth::new(
            client.clone(),
            test_key(&format!("{}/token", server.uri())),
        )
        .unwrap();
        SheetsMeetingStore::connect(client, auth, &config, SHEET_ID.to_string()).await
    }

    #[tokio::test]
    async fn test_connect_finds_worksheet() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Summary", "Meetings"]).await;

        let store = connect(&server).await.unwrap();
        assert_eq!(store.worksheet(), "Meetings");
        assert_eq!(store.spreadsheet_id(), SHEET_ID);
    }

    #[tokio::test]
    async fn test_connect_missing_worksheet() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Sheet1"]).await;

        match connect(&server).await {
            Err(StoreError::WorksheetNotFound(name)) => assert_eq!(name, "Meetings"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_connect_permission_denied() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}")))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}
            })))
            .mount(&server)
            .await;

        match connect(&server).await {
            Err(StoreError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "The caller does not have permission");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_list_all_rows_maps_header() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Meetings"]).await;
        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Meetings")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "range": "Meetings!A1:Z1000",
                "majorDimension": "ROWS",
                "values": [
                    ["meeting_id", "title", "description", "datetime", "chat_ids", "reminders", "status"],
                    ["1", "Kickoff", "Agenda", "01.02.2025 09:00", "", "", "active"],
                    ["2", "Retro"]
                ]
            })))
            .mount(&server)
            .await;

        let store = connect(&server).await.unwrap();
        let rows = store.list_all_rows().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title.as_deref(), Some("Kickoff"));
        assert!(rows[0].is_active());
        assert_eq!(rows[1].meeting_id.as_deref(), Some("2"));
        assert!(rows[1].datetime.is_none());
        assert!(rows[1].status.is_none());
    }

    #[tokio::test]
    async fn test_list_all_rows_empty_sheet() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Meetings"]).await;
        Mock::given(method("GET"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Meetings")))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "range": "Meetings!A1:Z1000",
                "majorDimension": "ROWS"
            })))
            .mount(&server)
            .await;

        let store = connect(&server).await.unwrap();
        assert!(store.list_all_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_row_posts_raw_values() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Meetings"]).await;
        Mock::given(method("POST"))
            .and(path(format!("/v4/spreadsheets/{SHEET_ID}/values/Meetings:append")))
            .and(query_param("valueInputOption", "RAW"))
            .and(body_json(serde_json::json!({
                "majorDimension": "ROWS",
                "values": [[5, "Team Sync", "", "25.12.2024 14:30", "", "", "active"]]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "spreadsheetId": SHEET_ID,
                "updates": {"updatedRows": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = connect(&server).await.unwrap();
        let row: Vec<CellValue> = vec![
            5u64.into(),
            "Team Sync".into(),
            "".into(),
            "25.12.2024 14:30".into(),
            "".into(),
            "".into(),
            "active".into(),
        ];
        store.append_row(&row).await.unwrap();
    }

    #[tokio::test]
    async fn test_append_row_rejects_wrong_width() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server, 1).await;
        mount_metadata(&server, &["Meetings"]).await;

        let store = connect(&server).await.unwrap();
        let row = vec![CellValue::from("only one")];
        let result = store.append_row(&row).await;
        assert!(matches!(result, Err(StoreError::InvalidRow(_))));
    }

    #[test]
    fn test_rows_to_meetings_without_header() {
        assert!(rows_to_meetings(&[]).is_empty());
    }
}
