//! Google Sheets API v4 request/response types.
//!
//! Only the fields meetbot reads or writes are modelled.

use serde::{Deserialize, Serialize};

use meetbot_types::meeting::CellValue;

/// `GET /v4/spreadsheets/{id}?fields=sheets.properties.title`
#[derive(Debug, Deserialize)]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    pub title: String,
}

/// `GET /v4/spreadsheets/{id}/values/{range}`
///
/// Trailing empty rows and cells are omitted by the API.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Body of `POST /v4/spreadsheets/{id}/values/{range}:append`.
#[derive(Debug, Serialize)]
pub struct AppendRequest<'a> {
    #[serde(rename = "majorDimension")]
    pub major_dimension: &'static str,
    pub values: [&'a [CellValue]; 1],
}

impl<'a> AppendRequest<'a> {
    pub fn single_row(row: &'a [CellValue]) -> Self {
        Self {
            major_dimension: "ROWS",
            values: [row],
        }
    }
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
}

/// Render a cell as the text `list` shows.
pub fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_request_shape() {
        let row = vec![CellValue::Number(1), CellValue::Text("Sync".to_string())];
        let json = serde_json::to_value(AppendRequest::single_row(&row)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"majorDimension": "ROWS", "values": [[1, "Sync"]]})
        );
    }

    #[test]
    fn test_value_range_without_values() {
        let range: ValueRange =
            serde_json::from_str(r#"{"range": "Meetings!A1:Z1000", "majorDimension": "ROWS"}"#)
                .unwrap();
        assert!(range.values.is_empty());
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&serde_json::json!("x")), "x");
        assert_eq!(cell_to_string(&serde_json::json!(12)), "12");
        assert_eq!(cell_to_string(&serde_json::Value::Null), "");
    }
}
