//! # Layered settings for the Eventora services
//!
//! Both binaries (`server` and `web`) read the same [`Settings`] tree. Sources are
//! layered in this order, later sources winning:
//!
//! 1. built-in defaults (suitable for local development only),
//! 2. an optional `eventora.toml` in the working directory,
//! 3. environment variables prefixed `EVENTORA`, with `__` separating sections from
//!    keys, e.g. `EVENTORA__AUTH__ACCESS_SECRET`.
//!
//! A `.env` file is loaded into the process environment first via `dotenvy`.

use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
    pub url: String,
    pub timeout_secs: u64,
}

impl Backend {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub seed_file: Option<String>,
    #[serde(default)]
    pub admin_email: Option<String>,
    #[serde(default)]
    pub admin_password: Option<String>,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    pub host: String,
    pub port: u16,
}

impl Web {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub auth: Auth,
    pub backend: Backend,
    pub server: Server,
    pub web: Web,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("auth.access_secret", "eventora-dev-access-secret")?
            .set_default("auth.refresh_secret", "eventora-dev-refresh-secret")?
            .set_default("auth.access_ttl_secs", 60 * 60 * 24)?
            .set_default("auth.refresh_ttl_secs", 60 * 60 * 24 * 30)?
            .set_default("backend.url", "http://127.0.0.1:5000/api/v1")?
            .set_default("backend.timeout_secs", 5)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("web.host", "127.0.0.1")?
            .set_default("web.port", 3000)?
            .add_source(
                File::with_name("eventora.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("EVENTORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
