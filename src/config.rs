// src/config.rs
use regex::Regex;
use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    port: u16,
    jwt_secret: Option<String>,
    jwt_public_path: Option<Regex>,
    database_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const fn default_port() -> u16 {
    8080
}

impl AppConfig {
    /// Configuration with auth and database disabled.
    pub const fn new(port: u16) -> Self {
        Self {
            port,
            jwt_secret: None,
            jwt_public_path: None,
            database_url: None,
        }
    }

    /// Build configuration from environment variables (`PORT`, `JWT_SECRET`,
    /// `JWT_PUBLIC_PATH`, `DATABASE_URL`). Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let port = match read("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a port number, got {raw}")))?,
            None => default_port(),
        };

        let mut config = Self::new(port);
        if let Some(secret) = read("JWT_SECRET") {
            config = config.with_jwt_secret(secret);
        }
        if let Some(pattern) = read("JWT_PUBLIC_PATH") {
            config = config.with_jwt_public_path(&pattern)?;
        }
        if let Some(url) = read("DATABASE_URL") {
            config = config.with_database_url(url);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Requests whose path matches `pattern` skip bearer-token checks.
    pub fn with_jwt_public_path(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern)
            .map_err(|err| ConfigError::Invalid(format!("JWT_PUBLIC_PATH: {err}")))?;
        self.jwt_public_path = Some(regex);
        Ok(self)
    }

    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Absent secret means authentication is disabled.
    pub fn jwt_secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref()
    }

    pub const fn jwt_public_path(&self) -> Option<&Regex> {
        self.jwt_public_path.as_ref()
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}
