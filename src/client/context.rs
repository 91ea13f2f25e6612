//! # QuickBooks Online API Context
//!
//! `QBContext` carries everything a remote call needs: the environment,
//! the realm (company) id, the OAuth access token, the API minor version,
//! and the rate limiter guarding outbound requests. There is no global
//! configuration; every operation receives a context by reference.
//!
//! ```no_run
//! use qbo_concepts::{Environment, QBContext};
//! use ureq::Agent;
//!
//! let client = Agent::new_with_defaults();
//!
//! // Create from explicit parameters
//! let context = QBContext::new(
//!     Environment::SANDBOX,
//!     "company_id".to_string(),
//!     "access_token".to_string(),
//!     &client,
//! ).unwrap();
//!
//! // Create from the QB_COMPANY_ID / QB_ACCESS_TOKEN environment variables
//! let context = QBContext::new_from_env(Environment::SANDBOX, &client).unwrap();
//!
//! // Enable automatic token renewal
//! let refreshable = context.with_refresh("refresh_token".to_string());
//! ```
use std::time::Duration;

use chrono::{DateTime, Utc};
use ureq::Agent;

use super::refresh::RefreshableQBContext;
use crate::{limiter::RateLimiter, APIResult, DiscoveryDoc, Environment};

// QuickBooks allows 500 requests per minute per realm; wait out the
// window after a throttle.
const RATE_LIMIT: usize = 500;
const RESET_DURATION: Duration = Duration::from_secs(60);

/// Minor version sent with every request unless overridden; see
/// [`QBContext::with_minor_version`].
pub const DEFAULT_MINOR_VERSION: &str = "75";

/// Context for interacting with the QuickBooks Online API.
///
/// The `expires_in` field is set to a far-future date on construction and
/// is only meaningful after a token refresh.
pub struct QBContext {
    pub(crate) environment: Environment,
    pub(crate) company_id: String,
    pub(crate) access_token: String,
    pub(crate) expires_in: DateTime<Utc>,
    pub(crate) discovery_doc: DiscoveryDoc,
    pub(crate) minor_version: String,
    pub(crate) limiter: RateLimiter,
}

impl QBContext {
    /// Creates a new context with the given parameters, fetching the OAuth
    /// discovery document for the environment.
    ///
    /// # Errors
    /// Fails if the discovery document cannot be fetched or parsed.
    pub fn new(
        environment: Environment,
        company_id: String,
        access_token: String,
        client: &Agent,
    ) -> APIResult<Self> {
        Ok(Self {
            environment,
            company_id,
            access_token,
            expires_in: Utc::now() + chrono::Duration::hours(999),
            discovery_doc: DiscoveryDoc::get(environment, client)?,
            minor_version: DEFAULT_MINOR_VERSION.to_string(),
            limiter: RateLimiter::new(RATE_LIMIT, RESET_DURATION),
        })
    }

    /// Creates a context from the `QB_COMPANY_ID` and `QB_ACCESS_TOKEN`
    /// environment variables.
    ///
    /// # Errors
    /// Fails if either variable is missing or discovery fails.
    pub fn new_from_env(environment: Environment, client: &Agent) -> APIResult<Self> {
        let company_id = std::env::var("QB_COMPANY_ID")?;
        let access_token = std::env::var("QB_ACCESS_TOKEN")?;
        let context = Self::new(environment, company_id, access_token, client)?;
        Ok(context)
    }

    /// Creates a refreshable context from this context and a refresh token.
    #[must_use]
    pub fn with_refresh(self, refresh_token: String) -> RefreshableQBContext {
        RefreshableQBContext {
            context: self,
            refresh_token,
        }
    }

    /// Replaces the access token.
    #[must_use]
    pub fn with_access_token(self, access_token: String) -> Self {
        Self {
            access_token,
            ..self
        }
    }

    /// Overrides the API minor version sent with every request.
    ///
    /// Some operations only behave correctly on a specific revision (the
    /// jobs flow pins an older one for discount-line updates).
    #[must_use]
    pub fn with_minor_version(self, minor_version: impl Into<String>) -> Self {
        Self {
            minor_version: minor_version.into(),
            ..self
        }
    }

    /// The realm (company) id this context is scoped to.
    #[must_use]
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// Acquires a permit from the rate limiter and executes the given
    /// function with the context.
    pub(crate) fn with_permission<'a, F, T>(&'a self, f: F) -> APIResult<T>
    where
        F: FnOnce(&'a Self) -> APIResult<T>,
    {
        let permit = self.limiter.acquire();
        let out = f(self);
        drop(permit);
        out
    }

    /// Whether the access token is past its recorded expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() >= self.expires_in
    }

    /// Probes the userinfo endpoint to check whether the access token is
    /// still accepted.
    ///
    /// # Errors
    /// Fails on transport errors; an unauthorized token yields `Ok(false)`.
    pub fn check_authorized(&self, client: &Agent) -> APIResult<bool> {
        let request = client
            .get(self.environment.user_info_url())
            .header("Authorization", format!("Bearer {}", &self.access_token))
            .header("Accept", "application/json");
        let response = match request.call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(_)) => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        let status = response.status();
        if !status.is_success() {
            log::error!(
                "Failed to check authorized status: {} - {}",
                status,
                response
                    .into_body()
                    .read_json::<crate::error::QBErrorResponse>()?
            );
            return Ok(false);
        }
        Ok(true)
    }
}
