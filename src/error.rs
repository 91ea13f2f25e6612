use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors surfaced by remote QuickBooks operations.
#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),
    #[error("http error: {0}")]
    Http(#[from] ureq::http::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing environment variable: {0}")]
    EnvVar(#[from] std::env::VarError),
    /// The access token was rejected (HTTP 401). The one-shot refresh in
    /// [`crate::RefreshableQBContext::with_reauth`] keys off this variant.
    #[error("invalid or expired access token")]
    InvalidToken,
    /// The token endpoint rejected the refresh request itself.
    #[error("token refresh rejected for this client")]
    InvalidClient,
    #[error("bad token request: {0}")]
    BadTokenRequest(String),
    /// The service rejected the request; carries the fault list verbatim.
    #[error("request rejected: {0}")]
    BadRequest(QBErrorResponse),
    #[error("no {0} matched the query")]
    NoQueryResults(&'static str),
    /// A reference was requested for an entity the server has not assigned
    /// an id to yet.
    #[error("cannot build a reference to an unsaved {0}")]
    MissingEntityId(&'static str),
    #[error("missing id or sync token on {0}")]
    MissingUpdateFields(&'static str),
}

impl APIError {
    /// True for the authorization failure that warrants a token refresh.
    #[must_use]
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, APIError::InvalidToken)
    }
}

/// Error envelope returned by the QuickBooks API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QBErrorResponse {
    pub fault: Option<Fault>,
    #[serde(rename = "time")]
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fault {
    #[serde(rename = "Error", default)]
    pub error: Vec<FaultError>,
    #[serde(rename = "type", default)]
    pub r#type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultError {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Detail")]
    pub detail: Option<String>,
    pub code: Option<String>,
    pub element: Option<String>,
}

impl std::fmt::Display for QBErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.fault {
            Some(fault) => {
                write!(f, "{}: ", fault.r#type)?;
                let mut first = true;
                for error in &fault.error {
                    if !first {
                        write!(f, "; ")?;
                    }
                    first = false;
                    write!(f, "{}", error.message)?;
                    if let Some(detail) = &error.detail {
                        write!(f, " ({detail})")?;
                    }
                }
                Ok(())
            }
            None => write!(f, "unknown fault"),
        }
    }
}
