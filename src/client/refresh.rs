use base64::Engine;
use serde::{Deserialize, Serialize};
use ureq::{http::Request, Agent};

use super::QBContext;
use crate::{error::APIError, APIResult};

/// A fresh token pair handed back by the credential provider.
#[derive(Debug, Clone)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the new access token expires.
    pub expires_in: u64,
}

/// Credential provider seam: exchanges a refresh token for a new grant.
pub trait TokenRefresher {
    /// # Errors
    /// Fails with [`APIError::InvalidClient`] when the provider rejects
    /// the refresh token or client credentials.
    fn refresh(&self, refresh_token: &str) -> APIResult<TokenGrant>;
}

/// HTTP implementation of [`TokenRefresher`] against the OAuth token
/// endpoint from the discovery document.
pub struct OAuthRefresher<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub token_endpoint: &'a str,
    pub client: &'a Agent,
}

impl TokenRefresher for OAuthRefresher<'_> {
    fn refresh(&self, refresh_token: &str) -> APIResult<TokenGrant> {
        let auth_string = format!("{}:{}", self.client_id, self.client_secret);
        let auth_string = base64::engine::general_purpose::STANDARD.encode(auth_string);

        let request = Request::post(self.token_endpoint)
            .header("Authorization", format!("Basic {auth_string}"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(format!(
                "grant_type=refresh_token&refresh_token={refresh_token}"
            ))?;

        let response = match self.client.run(request) {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(_)) => return Err(APIError::InvalidClient),
            Err(e) => return Err(e.into()),
        };

        if !response.status().is_success() {
            return Err(APIError::InvalidClient);
        }

        let AuthTokenResponse {
            access_token,
            refresh_token,
            expires_in,
            ..
        } = response.into_body().read_json()?;

        Ok(TokenGrant {
            access_token,
            refresh_token,
            expires_in,
        })
    }
}

/// A [`QBContext`] paired with a refresh token, able to renew itself.
pub struct RefreshableQBContext {
    pub(crate) context: QBContext,
    pub(crate) refresh_token: String,
}

impl RefreshableQBContext {
    /// Refreshes the access token using the stored refresh token.
    ///
    /// # Errors
    /// Propagates transport failures and [`APIError::InvalidClient`] when
    /// the token endpoint rejects the request.
    pub fn refresh_access_token(
        &mut self,
        client_id: &str,
        client_secret: &str,
        client: &Agent,
    ) -> APIResult<()> {
        let token_endpoint = self.context.discovery_doc.token_endpoint.clone();
        let grant = OAuthRefresher {
            client_id,
            client_secret,
            token_endpoint: &token_endpoint,
            client,
        }
        .refresh(&self.refresh_token)?;
        self.store_grant(grant);
        Ok(())
    }

    /// Runs `operation`; if it fails with an invalid-token error, refreshes
    /// the credentials once and retries the operation exactly once.
    ///
    /// Two attempts is the ceiling. A refresh failure, or a second failure
    /// of the operation for any reason, is surfaced to the caller; there is
    /// no backoff and no further retry. Apply this per top-level remote
    /// operation so each logical call gets its own one-shot retry.
    ///
    /// # Errors
    /// Whatever the operation or the refresher last returned.
    pub fn with_reauth<R, F, T>(&mut self, refresher: &R, mut operation: F) -> APIResult<T>
    where
        R: TokenRefresher,
        F: FnMut(&QBContext) -> APIResult<T>,
    {
        match operation(&self.context) {
            Err(err) if err.is_invalid_token() => {
                log::info!("received 401 from api call, refreshing tokens and retrying once");
                let grant = refresher.refresh(&self.refresh_token)?;
                self.store_grant(grant);
                operation(&self.context)
            }
            out => out,
        }
    }

    /// Stores a new grant wholesale: both tokens and the expiry.
    fn store_grant(&mut self, grant: TokenGrant) {
        self.refresh_token = grant.refresh_token;
        self.context.access_token = grant.access_token;
        self.context.expires_in = chrono::Utc::now()
            + chrono::Duration::seconds(i64::try_from(grant.expires_in).unwrap_or(i64::MAX));
    }
}

#[derive(Serialize, Deserialize)]
struct AuthTokenResponse {
    token_type: String,
    expires_in: u64,
    refresh_token: String,
    x_refresh_token_expires_in: u64,
    access_token: String,
}

impl std::ops::Deref for RefreshableQBContext {
    type Target = QBContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}
