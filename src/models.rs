// report-generation-service/src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Report identifier used when the caller did not send one.
pub const MISSING_REPORT_ID: &str = "N/A";

/// Report description as posted by the browser form.
///
/// Every field is optional on the wire: presence is a validation concern,
/// not a parsing one. `generated_date` is accepted and never consumed; the
/// renderer stamps server time instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "reporttype")]
    pub report_type: Option<String>,
    #[serde(rename = "reporttypename")]
    pub report_type_name: Option<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(rename = "clientname")]
    pub client_name: Option<String>,
    #[serde(rename = "generateddate")]
    pub generated_date: Option<String>,
    #[serde(rename = "reportid")]
    pub report_id: Option<String>,
}

impl ReportRequest {
    /// Parses a request body, matching field names case-insensitively.
    ///
    /// Returns `Ok(None)` for a literal JSON `null` body.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Option<Self>> {
        let value: Value = serde_json::from_slice(body)?;
        let value = match value {
            Value::Object(map) => Value::Object(lowercase_keys(map)),
            other => other,
        };
        serde_json::from_value(value)
    }

    pub fn report_id_or_default(&self) -> &str {
        self.report_id.as_deref().unwrap_or(MISSING_REPORT_ID)
    }
}

// Keys iterate in document order (serde_json `preserve_order`), so when two
// spellings of one field collide the later one wins.
fn lowercase_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect()
}

/// A finished document ready to be streamed back to the caller.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

impl GeneratedReport {
    pub fn docx(bytes: Vec<u8>, filename: String) -> Self {
        Self {
            bytes,
            content_type: DOCX_CONTENT_TYPE,
            filename,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}
