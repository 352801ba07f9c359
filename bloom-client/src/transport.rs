//! Save transport seam
//!
//! The auto-saver talks to the platform through [`SaveTransport`], so tests
//! can drive the debounce machinery against an in-memory implementation
//! while production uses the HTTP transport.

use crate::draft::OnboardingDraft;
use crate::error::ClientError;
use serde::Deserialize;
use shared::error::ApiResponse;

/// Server acknowledgement of a stored draft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveReceipt {
    /// Server timestamp (UTC millis)
    pub saved_at: i64,
    /// Design revision after the write, when the server reports one
    pub revision: Option<i64>,
}

#[async_trait::async_trait]
pub trait SaveTransport: Send + Sync {
    async fn save(&self, draft: &OnboardingDraft) -> Result<SaveReceipt, ClientError>;
}

/// HTTP transport: PATCH {base}/api/events/{id}/design/auto-save
pub struct HttpSaveTransport {
    http: reqwest::Client,
    base_url: String,
    event_id: i64,
}

impl HttpSaveTransport {
    pub fn new(base_url: impl Into<String>, event_id: i64) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }
        if event_id <= 0 {
            return Err(ClientError::Config("event_id must be positive".into()));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            event_id,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedDraftBody {
    design: DesignBody,
    saved_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DesignBody {
    revision: i64,
}

#[async_trait::async_trait]
impl SaveTransport for HttpSaveTransport {
    async fn save(&self, draft: &OnboardingDraft) -> Result<SaveReceipt, ClientError> {
        let url = format!(
            "{}/api/events/{}/design/auto-save",
            self.base_url, self.event_id
        );

        let response = self
            .http
            .patch(&url)
            .json(&draft.to_design_save())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let body: ApiResponse<SavedDraftBody> = response
            .json()
            .await
            .map_err(|e| ClientError::Protocol(format!("Malformed save response: {e}")))?;

        match (body.code, body.data) {
            (Some(0), Some(data)) => Ok(SaveReceipt {
                saved_at: data.saved_at,
                revision: Some(data.design.revision),
            }),
            (code, _) => Err(ClientError::Rejected {
                code: code.unwrap_or(1),
                message: body.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_draft_body_decodes_camel_case_wire() {
        // Shape of a successful auto-save response from the server
        let json = r#"{
            "code": 0,
            "message": "Draft saved",
            "data": {
                "design": {"id": 1, "eventId": 42, "revision": 3},
                "savedAt": 1700000000000
            }
        }"#;
        let body: ApiResponse<SavedDraftBody> = serde_json::from_str(json).unwrap();
        let data = body.data.unwrap();
        assert_eq!(data.saved_at, 1_700_000_000_000);
        assert_eq!(data.design.revision, 3);
    }
}
