//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_MAIL_PORT,
    DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_UPLOAD_FOLDER,
    MIN_SECRET_KEY_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Development-only signing key, long enough to pass the length check.
const DEV_SECRET_KEY: &str = "dev-secret-key-change-this-before-deploy";

/// Optional outbound mail settings.
#[derive(Clone)]
pub struct MailSettings {
    pub server: String,
    pub port: u16,
    pub use_tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailSettings")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    secret_key: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    pub upload_folder: PathBuf,
    pub max_content_length: usize,
    pub mail: Option<MailSettings>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("upload_folder", &self.upload_folder)
            .field("max_content_length", &self.max_content_length)
            .field("mail", &self.mail)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails if SECRET_KEY is missing in a release build or shorter than
    /// the minimum length.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret_key = match env::var("SECRET_KEY") {
            Ok(key) => key,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SECRET_KEY not set, using insecure default for development");
                DEV_SECRET_KEY.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "SECRET_KEY environment variable must be set in production",
                ))
            }
        };

        let database_url = env::var("DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URI"))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let config = Self {
            database_url,
            secret_key,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS")
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            upload_folder: env::var("UPLOAD_FOLDER")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FOLDER.to_string())
                .into(),
            max_content_length: parse_var("MAX_CONTENT_LENGTH")
                .unwrap_or(DEFAULT_MAX_CONTENT_LENGTH),
            mail: mail_from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Build a configuration directly, bypassing the environment.
    pub fn new(
        database_url: impl Into<String>,
        secret_key: impl Into<String>,
        upload_folder: impl Into<PathBuf>,
    ) -> AppResult<Self> {
        let config = Self {
            database_url: database_url.into(),
            secret_key: secret_key.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            upload_folder: upload_folder.into(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            mail: None,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.secret_key.len() < MIN_SECRET_KEY_LENGTH {
            return Err(AppError::internal(format!(
                "SECRET_KEY must be at least {} characters long",
                MIN_SECRET_KEY_LENGTH
            )));
        }
        Ok(())
    }

    /// Get secret bytes for token signing/verification.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Mail settings are only present when MAIL_SERVER is set.
fn mail_from_env() -> Option<MailSettings> {
    let server = env::var("MAIL_SERVER").ok().filter(|s| !s.is_empty())?;

    Some(MailSettings {
        server,
        port: parse_var("MAIL_PORT").unwrap_or(DEFAULT_MAIL_PORT),
        use_tls: env::var("MAIL_USE_TLS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true),
        username: env::var("MAIL_USERNAME").ok(),
        password: env::var("MAIL_PASSWORD").ok(),
    })
}
