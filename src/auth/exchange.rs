use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::error::AuthError;
use crate::auth::token::TokenRecord;
use crate::config::{OAuthConfig, REDIRECT_URI, SCOPE};

/// Exchanges an authorization code at the token endpoint.
///
/// One POST, no retry. Any provider-reported lifetime is dropped and the
/// resulting record carries `expiry = 0`.
///
/// # Example
/// ```no_run
/// use outlook_tokens::auth::TokenExchanger;
/// use outlook_tokens::config::OAuthConfig;
///
/// # async fn example() -> Result<(), outlook_tokens::auth::AuthError> {
/// let config = OAuthConfig::new("consumers", "my-client-id")?;
/// let record = TokenExchanger::new(&config).exchange_code("M.C507_BAY.2.U.abc").await?;
/// assert_eq!(record.expiry(), 0);
/// # Ok(())
/// # }
/// ```
pub struct TokenExchanger {
    client: reqwest::Client,
    client_id: String,
    token_url: String,
}

impl TokenExchanger {
    pub fn new(config: &OAuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            client_id: config.client_id().to_string(),
            token_url: config.token_url(),
        }
    }

    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub async fn exchange_code(&self, code: &str) -> Result<TokenRecord, AuthError> {
        debug!(token_url = %self.token_url, "exchanging authorization code");
        let resp = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("scope", SCOPE),
                ("code", code),
                ("redirect_uri", REDIRECT_URI),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "token endpoint rejected the request");
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        let body = resp.text().await?;

        let payload: TokenExchangeResponse =
            serde_json::from_str(&body).map_err(|err| AuthError::Protocol {
                body: redact_tokens(&body),
                detail: err.to_string(),
            })?;
        if payload.expires_in.is_some() {
            debug!("discarding provider-reported token lifetime");
        }
        Ok(TokenRecord::from_exchange(
            payload.access_token,
            payload.refresh_token,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
    refresh_token: String,
    expires_in: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: String,
    error_description: Option<String>,
}

const SECRET_FIELDS: [&str; 3] = ["access_token", "refresh_token", "id_token"];

/// Mask token values in a JSON body before it is put into an error.
fn redact_tokens(body: &str) -> String {
    let Ok(serde_json::Value::Object(mut map)) = serde_json::from_str::<serde_json::Value>(body)
    else {
        return body.to_string();
    };
    for field in SECRET_FIELDS {
        if let Some(value) = map.get_mut(field) {
            if !value.is_null() {
                *value = serde_json::Value::String("<redacted>".to_string());
            }
        }
    }
    serde_json::Value::Object(map).to_string()
}

fn status_error(status: StatusCode, body: &str) -> AuthError {
    let mut message = format!("request failed with status {}", status.as_u16());
    if let Ok(oauth) = serde_json::from_str::<OAuthErrorResponse>(body) {
        message.push_str(&format!(" ({})", oauth.error));
        if let Some(description) = oauth.error_description {
            let first_line = description.lines().next().unwrap_or_default();
            message.push_str(&format!(": {first_line}"));
        }
    }
    AuthError::Network {
        status: status.as_u16(),
        message,
    }
}
