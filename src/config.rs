//! Credentials for the Nuvo payment gateway
//!
//! Values come from `NUVO_PAYMENT_BASE_URL`, `NUVO_CLIENT_ID` and
//! `NUVO_CLIENT_SECRET`, optionally pre-seeded from a `.env` file. They are
//! read once at construction and never again.

use crate::Result;
use envconfig::Envconfig;
use std::collections::HashMap;
use std::path::Path;

/// Name of the optional dotenv file
pub const DOTENV_FILE: &str = ".env";

/// Raw environment variables, before normalization
#[derive(Envconfig)]
struct EnvCredentials {
    #[envconfig(from = "NUVO_PAYMENT_BASE_URL")]
    base_url: String,
    #[envconfig(from = "NUVO_CLIENT_ID")]
    client_id: String,
    #[envconfig(from = "NUVO_CLIENT_SECRET")]
    client_secret: String,
}

/// Base URL and client credentials of one gateway account
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from explicit values
    ///
    /// Trailing slashes are trimmed from `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Ok(EnvCredentials::init_from_env()?.into())
    }

    /// Load `<dir>/.env` when it exists, then read the process environment
    ///
    /// Variables already present in the environment win over the file.
    pub fn from_env_file(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(DOTENV_FILE);
        if path.is_file() {
            dotenv::from_path(&path)?;
        }
        Self::from_env()
    }

    /// Read credentials from a map keyed by the environment variable names
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        Ok(EnvCredentials::init_from_hashmap(vars)?.into())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.client_secret)
    }

    /// Absolute URL for a path on the gateway
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl From<EnvCredentials> for Credentials {
    fn from(env: EnvCredentials) -> Self {
        Self::new(env.base_url, env.client_id, env.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_credentials_trim_base_url() {
        let creds = Credentials::new("https://api.test.com//", "id", "secret");
        assert_eq!(creds.base_url(), "https://api.test.com");
        assert_eq!(
            creds.url_for("/api/v1/payments"),
            "https://api.test.com/api/v1/payments"
        );
        assert_eq!(creds.bearer(), "Bearer secret");
    }

    #[test]
    fn test_credentials_from_map() {
        let creds = Credentials::from_map(&vars(&[
            ("NUVO_PAYMENT_BASE_URL", "https://api.test.com/"),
            ("NUVO_CLIENT_ID", "test-client-id"),
            ("NUVO_CLIENT_SECRET", "test-client-secret"),
        ]))
        .unwrap();

        assert_eq!(creds.base_url(), "https://api.test.com");
        assert_eq!(creds.client_id(), "test-client-id");
        assert_eq!(creds.client_secret(), "test-client-secret");
    }

    #[test]
    fn test_missing_variable_is_config_error() {
        let result = Credentials::from_map(&vars(&[
            ("NUVO_PAYMENT_BASE_URL", "https://api.test.com"),
            ("NUVO_CLIENT_ID", "test-client-id"),
        ]));

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("NUVO_CLIENT_SECRET"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("https://api.test.com", "id", "super-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("super-secret"));
    }
}
