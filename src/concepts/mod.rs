//! End-to-end concept flows, one per QuickBooks concept: each composes
//! lookup-or-create resolution, reference building, and document assembly
//! against a [`crate::service::DataService`], then submits the documents.
//!
//! Flows are written against the service trait so a request handler can
//! wrap them in the one-shot refresh retry:
//!
//! ```no_run
//! use qbo_concepts::{concepts, Environment, QBContext};
//! use qbo_concepts::client::OAuthRefresher;
//! use qbo_concepts::service::QboDataService;
//! use ureq::Agent;
//!
//! let client = Agent::new_with_defaults();
//! let context = QBContext::new_from_env(Environment::SANDBOX, &client).unwrap();
//! let mut refreshable = context.with_refresh("refresh_token".to_string());
//! let refresher = OAuthRefresher {
//!     client_id: "client_id",
//!     client_secret: "client_secret",
//!     token_endpoint: "https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer",
//!     client: &client,
//! };
//! let result = refreshable.with_reauth(&refresher, |qb| {
//!     let mut service = QboDataService::new(qb, &client);
//!     concepts::accounting::run(&mut service)
//! });
//! println!("{}", concepts::respond(&result));
//! ```

use serde::Serialize;

use crate::{error::APIError, APIResult};

pub mod accounting;
pub mod billing;
pub mod inventory;
pub mod invoicing;
pub mod jobs;
pub mod reports;

/// Translates a flow result into the response payload: the entity's JSON
/// on success, a one-line message otherwise. Failure detail is logged,
/// never returned.
pub fn respond<T: Serialize>(result: &APIResult<T>) -> String {
    match result {
        Ok(entity) => serde_json::to_string(entity).unwrap_or_else(|error| {
            log::error!("Exception while serializing response : {error}");
            failed_payload()
        }),
        Err(APIError::InvalidToken) => {
            serde_json::json!({"response": "InvalidToken - Refresh token and try again"})
                .to_string()
        }
        Err(error) => {
            log::error!("Error while calling the API :: {error}");
            failed_payload()
        }
    }
}

fn failed_payload() -> String {
    serde_json::json!({"response": "Failed"}).to_string()
}
