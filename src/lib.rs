/*!
 * A rust library exercising the QuickBooks Online accounting API:
 * lookup-or-create resolution of reference entities, composite document
 * assembly (journal entries, bills, invoices, estimates), and a one-shot
 * token-refresh retry around remote calls.
 *
 * For more information on the underlying API, see:
 * https://developer.intuit.com/app/developer/qbo/docs/develop
 */
#![warn(clippy::pedantic)]

pub mod client;
pub use client::{QBContext, RefreshableQBContext, TokenRefresher};
use error::APIError;
use serde::{Deserialize, Serialize};
use ureq::Agent;
pub mod concepts;
pub mod error;
pub(crate) mod limiter;
pub mod macros;
pub mod resolver;
pub mod samples;
pub mod service;

pub mod functions;
pub mod reports;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub type APIResult<T> = Result<T, APIError>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Environment {
    PRODUCTION,
    #[default]
    SANDBOX,
}

impl Environment {
    #[inline]
    #[must_use]
    pub fn discovery_url(&self) -> &'static str {
        match self {
            Environment::PRODUCTION => {
                "https://developer.intuit.com/.well-known/openid_configuration/"
            }
            Environment::SANDBOX => {
                "https://developer.intuit.com/.well-known/openid_sandbox_configuration/"
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn user_info_url(&self) -> &'static str {
        match self {
            Environment::PRODUCTION => {
                "https://accounts.platform.intuit.com/v1/openid_connect/userinfo"
            }
            Environment::SANDBOX => {
                "https://sandbox-accounts.platform.intuit.com/v1/openid_connect/userinfo"
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Environment::PRODUCTION => "https://quickbooks.api.intuit.com/v3/",
            Environment::SANDBOX => "https://sandbox-quickbooks.api.intuit.com/v3/",
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(default)]
pub struct DiscoveryDoc {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub revocation_endpoint: String,
    pub jwks_uri: String,
    pub response_types_supported: Vec<String>,
    pub subject_types_supported: Vec<String>,
    pub id_token_signing_alg_values_supported: Vec<String>,
    pub scopes_supported: Vec<String>,
    pub token_endpoint_auth_methods_supported: Vec<String>,
    pub claims_supported: Vec<String>,
}

impl DiscoveryDoc {
    /// Fetches the OAuth discovery document for the given environment.
    ///
    /// # Errors
    /// Returns an error if the request fails or the response is not a
    /// valid discovery document.
    pub fn get(environment: Environment, client: &Agent) -> Result<Self, APIError> {
        let url = environment.discovery_url();
        let response = match client.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(code)) => {
                return Err(APIError::BadTokenRequest(format!(
                    "discovery endpoint returned {code}"
                )))
            }
            Err(e) => return Err(e.into()),
        };
        if !response.status().is_success() {
            return Err(APIError::BadTokenRequest(format!(
                "discovery endpoint returned {}",
                response.status()
            )));
        }
        Ok(response.into_body().read_json()?)
    }
}
