//! Google service-account authentication.
//!
//! Signs an RS256 JWT assertion with the service account's private key and
//! exchanges it at the account's `token_uri` for a bearer token. Tokens are
//! cached and refreshed shortly before they expire.
//!
//! The private key and access tokens are wrapped in [`SecretString`] and are
//! never logged.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use meetbot_types::error::{ConfigError, StoreError};

/// OAuth scopes requested for the meeting sheet.
pub const SHEETS_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/spreadsheets",
    "https://www.googleapis.com/auth/drive",
];

/// Lifetime requested for each assertion (the maximum Google accepts).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh tokens this long before their reported expiry.
const REFRESH_MARGIN_SECS: i64 = 60;

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// The fields of a service-account JSON key file that authentication needs.
#[derive(Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    /// Read and parse a JSON key file.
    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidCredentials(e.to_string()))
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

struct CachedToken {
    token: SecretString,
    expires_at: DateTime<Utc>,
}

/// Bearer token source for one service account.
pub struct ServiceAccountAuth {
    client: reqwest::Client,
    client_email: String,
    token_uri: String,
    signing_key: EncodingKey,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    /// Prepare authentication for `key`.
    ///
    /// Fails if the private key is not a valid RSA PEM.
    pub fn new(client: reqwest::Client, key: ServiceAccountKey) -> Result<Self, ConfigError> {
        let private_key = SecretString::from(key.private_key);
        let signing_key = EncodingKey::from_rsa_pem(private_key.expose_secret().as_bytes())
            .map_err(|e| ConfigError::InvalidCredentials(format!("private key: {e}")))?;

        Ok(Self {
            client,
            client_email: key.client_email,
            token_uri: key.token_uri,
            signing_key,
            scope: SHEETS_SCOPES.join(" "),
            cached: Mutex::new(None),
        })
    }

    /// The service account's email (useful when sharing the sheet).
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// A valid bearer token, fetching a fresh one when the cache is stale.
    pub async fn access_token(&self) -> Result<SecretString, StoreError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if Utc::now() + Duration::seconds(REFRESH_MARGIN_SECS) < token.expires_at {
                return Ok(SecretString::from(token.token.expose_secret()));
            }
        }

        let fresh = self.fetch_token().await?;
        let token = SecretString::from(fresh.token.expose_secret());
        *cached = Some(fresh);
        Ok(token)
    }

    fn sign_assertion(&self, now: DateTime<Utc>) -> Result<String, StoreError> {
        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: &self.scope,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key)
            .map_err(|e| StoreError::Auth(format!("failed to sign assertion: {e}")))
    }

    async fn fetch_token(&self) -> Result<CachedToken, StoreError> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        let response = self
            .client
            .post(&self.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| StoreError::Http(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Auth(format!("token endpoint returned {status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(format!("token response: {e}")))?;

        tracing::debug!(
            client_email = %self.client_email,
            expires_in = token.expires_in,
            "obtained access token"
        );

        Ok(CachedToken {
            token: SecretString::from(token.access_token),
            expires_at: now + Duration::seconds(token.expires_in),
        })
    }
}
