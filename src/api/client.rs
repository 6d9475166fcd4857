//! API client for the Wabot messaging service.
//!
//! This module provides the `WabotClient` struct for authenticating with
//! client credentials, keeping the session token fresh, listing message
//! templates, and sending templated messages.
//!
//! Every authenticated operation goes through `ensure_valid` first, which
//! performs the cheapest sufficient renewal: nothing when the token is
//! still good, a refresh when one is possible, and a full re-authentication
//! otherwise.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::{claims, renewal_plan, RenewalPlan, Session};
use crate::models::Template;

use super::error::{Error, Result};

/// Base URL for the Wabot API
const API_BASE_URL: &str = "https://api.wabot.shop/v1";

/// HTTP request timeout in seconds.
/// A single attempt per call; slow responses fail here rather than retry.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Wabot API.
///
/// Owns the credentials and the current session. All operations take
/// `&mut self` because they may replace the session tokens; sharing one
/// client across tasks requires an external mutex, since the validity
/// check and the dependent request are not atomic.
pub struct WabotClient {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
    session: Option<Session>,
}

impl WabotClient {
    /// Create a new client for the production API.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_base_url(client_id, client_secret, API_BASE_URL)
    }

    /// Create a client against a non-standard base URL.
    pub fn with_base_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            session: None,
        })
    }

    /// Authenticate with the stored client credentials.
    ///
    /// On success the session tokens and the expiry read from the access
    /// token replace any previous session. On failure the previous session
    /// is left untouched.
    pub async fn authenticate(&mut self) -> Result<()> {
        let url = format!("{}/authenticate", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("clientId", &self.client_id)
            .header("clientSecret", &self.client_secret)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::auth(status, &text));
        }

        let tokens: TokenResponse = serde_json::from_str(&text)?;
        self.install_session(tokens);
        Ok(())
    }

    /// Exchange the stored refresh token for a new token pair.
    pub async fn refresh(&mut self) -> Result<()> {
        let refresh_token = match &self.session {
            Some(s) if !s.refresh_token.is_empty() => s.refresh_token.clone(),
            _ => return Err(Error::NoRefreshToken),
        };

        let url = format!("{}/refreshToken", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("clientId", &self.client_id)
            .header("clientSecret", &self.client_secret)
            .json(&serde_json::json!({ "refreshToken": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::refresh(status, &text));
        }

        let tokens: TokenResponse = serde_json::from_str(&text)?;
        self.install_session(tokens);
        Ok(())
    }

    /// Guarantee a usable access token before an authenticated call.
    ///
    /// When the session is missing or expired, tries a refresh if a refresh
    /// token is held, falling back to full authentication if the refresh
    /// fails for any reason. The refresh failure is logged and the
    /// authenticate result is what the caller sees.
    pub async fn ensure_valid(&mut self) -> Result<()> {
        match renewal_plan(self.session.as_ref(), chrono::Utc::now()) {
            RenewalPlan::UseCurrent => Ok(()),
            RenewalPlan::Authenticate => self.authenticate().await,
            RenewalPlan::RefreshThenAuthenticate => match self.refresh().await {
                Ok(()) => Ok(()),
                Err(e) => {
                    warn!("token refresh failed, re-authenticating: {}", e);
                    self.authenticate().await
                }
            },
        }
    }

    /// Invalidate the refresh token server-side and clear the session.
    ///
    /// Local state is cleared only when the server confirms the logout, so
    /// a failed call leaves the session usable for a retry. Logging out
    /// without a session is a no-op.
    pub async fn logout(&mut self) -> Result<()> {
        let refresh_token = match &self.session {
            Some(s) => s.refresh_token.clone(),
            None => return Ok(()),
        };

        let url = format!("{}/logout/{}", self.base_url, refresh_token);
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header("clientId", &self.client_id)
            .header("clientSecret", &self.client_secret)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::logout(status, &text));
        }

        self.clear_session();
        Ok(())
    }

    /// Fetch the message templates available to this account.
    pub async fn get_templates(&mut self) -> Result<Vec<Template>> {
        self.ensure_valid().await?;

        let url = format!("{}/get-templates", self.base_url);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.access_token())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::api(status, &text));
        }

        let parsed: TemplatesResponse = serde_json::from_str(&text)?;
        Ok(parsed.data)
    }

    /// Send a templated message to a recipient.
    ///
    /// `params` fill the template placeholders in order. Phone number
    /// format and parameter count are validated server-side only.
    pub async fn send_message(
        &mut self,
        to: &str,
        template_id: &str,
        params: &[String],
    ) -> Result<()> {
        self.ensure_valid().await?;

        let url = format!("{}/send-message", self.base_url);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.access_token())
            .json(&message_body(to, template_id, params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::api(status, &text));
        }

        Ok(())
    }

    /// Reset to the unauthenticated state.
    fn clear_session(&mut self) {
        self.session = None;
    }

    fn install_session(&mut self, tokens: TokenResponse) {
        let expires_at = claims::token_expiry(&tokens.token);
        self.session = Some(Session {
            access_token: tokens.token,
            refresh_token: tokens.refresh_token,
            expires_at,
        });
    }

    /// Access token of the current session, empty when unauthenticated.
    /// Operations call this only after `ensure_valid` has succeeded.
    fn access_token(&self) -> String {
        self.session
            .as_ref()
            .map(|s| s.access_token.clone())
            .unwrap_or_default()
    }
}

/// Build the send-message request body.
fn message_body(to: &str, template_id: &str, params: &[String]) -> serde_json::Value {
    serde_json::json!({
        "to": to,
        "templateId": template_id,
        "params": params,
    })
}

// Internal API response types for parsing

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TemplatesResponse {
    data: Vec<Template>,
}
