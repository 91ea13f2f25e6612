//! Per-verb HTTP operations over a [`QBContext`] and a [`ureq::Agent`].

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use ureq::{
    http::{Method, StatusCode},
    Agent,
};

use crate::{
    error::{APIError, QBErrorResponse},
    APIResult, QBContext,
};

pub mod create;
pub mod query;
pub mod read;
pub mod reports;
pub mod send;
pub mod update;

pub use create::qb_create;
pub use query::{qb_query, qb_query_single};
pub use read::{qb_get_single, qb_read};
pub use reports::qb_report;
pub use send::qb_send_email;
pub use update::qb_update;

/// Issues one rate-limited request and deserializes the JSON response.
///
/// A 401 maps to [`APIError::InvalidToken`] so the one-shot refresh wrapper
/// can react; any other non-2xx parses the fault envelope, logs each fault
/// message, and surfaces the envelope as [`APIError::BadRequest`].
pub(crate) fn qb_request<T, B, S, SS>(
    qb: &QBContext,
    client: &Agent,
    method: Method,
    path: &str,
    body: Option<&B>,
    content_type: Option<&str>,
    query: Option<impl IntoIterator<Item = (S, SS)>>,
) -> APIResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
    S: AsRef<str>,
    SS: AsRef<str>,
{
    qb.with_permission(|qb| {
        let request = crate::client::build_request(
            method,
            path,
            body,
            query,
            content_type.unwrap_or("application/json"),
            qb,
        )?;

        let response = match client.run(request) {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code)) if code == StatusCode::UNAUTHORIZED.as_u16() => {
                return Err(APIError::InvalidToken)
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(APIError::InvalidToken);
        }
        if !status.is_success() {
            let fault: QBErrorResponse = response.into_body().read_json()?;
            if let Some(f) = &fault.fault {
                for error in &f.error {
                    log::error!("Error while calling the API :: {}", error.message);
                }
            }
            return Err(APIError::BadRequest(fault));
        }

        Ok(response.into_body().read_json()?)
    })
}

/// Envelope wrapping a single entity in create/read/update responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QBResponse<T> {
    #[serde(
        alias = "Account",
        alias = "Vendor",
        alias = "Term",
        alias = "Customer",
        alias = "Item",
        alias = "Invoice",
        alias = "Estimate",
        alias = "JournalEntry",
        alias = "Bill",
        alias = "BillPayment",
        alias = "VendorCredit",
        alias = "Payment"
    )]
    pub object: T,
    #[serde(default, rename = "time")]
    pub time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;

    #[test]
    fn response_envelope_matches_on_entity_key() {
        let body = r#"{"Account": {"Id": "85", "Name": "Checking"}, "time": "2024-03-11T10:12:32Z"}"#;
        let envelope: QBResponse<Account> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.object.id.as_deref(), Some("85"));
        assert!(envelope.time.is_some());
    }
}
