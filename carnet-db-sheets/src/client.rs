use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the Google Sheets v4 values/batchUpdate endpoints.
/// Token acquisition (service account, OAuth, ...) is not this
/// client's business; it is handed a ready-to-use bearer token.
pub struct SheetsClient {
    http: reqwest::blocking::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
struct WriteValues<'a> {
    values: &'a [Vec<String>],
}

impl SheetsClient {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http: reqwest::blocking::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()?,
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
        })
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/{}/values/{range}{suffix}",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id
        )
    }

    /// Reads a range. Cells come back stringified; the sheet stores
    /// everything as user-entered text or numbers.
    pub fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let rsp = self
            .http
            .get(self.values_url(range, ""))
            .bearer_auth(&self.token)
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .with_context(|| format!("failed to read range {range}"))?;
        let range: ValueRange = rsp.json().context("invalid values response")?;
        Ok(range.values.into_iter().map(stringify_row).collect())
    }

    /// Overwrites a range with the given rows.
    pub fn update_values(&self, range: &str, values: &[Vec<String>]) -> Result<()> {
        self.http
            .put(self.values_url(range, ""))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.token)
            .json(&WriteValues { values })
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .with_context(|| format!("failed to update range {range}"))?;
        Ok(())
    }

    /// Appends one row after the last non-empty row of the range.
    pub fn append_row(&self, range: &str, row: Vec<String>) -> Result<()> {
        self.http
            .post(self.values_url(range, ":append"))
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(&self.token)
            .json(&WriteValues {
                values: &[row],
            })
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .context("failed to append row")?;
        Ok(())
    }

    /// Deletes the 0-based half-open row range `[start, end)` of the
    /// sheet identified by its numeric grid id.
    pub fn delete_rows(&self, sheet_gid: i64, start: u64, end: u64) -> Result<()> {
        let body = json!({
            "requests": [{
                "deleteDimension": {
                    "range": {
                        "sheetId": sheet_gid,
                        "dimension": "ROWS",
                        "startIndex": start,
                        "endIndex": end,
                    }
                }
            }]
        });
        self.http
            .post(format!(
                "{}/{}:batchUpdate",
                self.base_url.trim_end_matches('/'),
                self.spreadsheet_id
            ))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .with_context(|| format!("failed to delete rows [{start}, {end})"))?;
        Ok(())
    }
}

fn stringify_row(row: Vec<serde_json::Value>) -> Vec<String> {
    row.into_iter().map(stringify_cell).collect()
}

fn stringify_cell(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Distinguishes auth/open failures from plain transport failures so
/// the repository can map them onto its error taxonomy.
pub fn is_access_denied(err: &anyhow::Error) -> bool {
    err.downcast_ref::<reqwest::Error>()
        .and_then(reqwest::Error::status)
        .map(|status| {
            status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
                || status == reqwest::StatusCode::NOT_FOUND
        })
        .unwrap_or(false)
}
