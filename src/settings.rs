//! Server configuration.
//!
//! Built once at startup and handed to the routing layer. Sources, lowest
//! precedence first: built-in defaults, an optional TOML file, then
//! `BALLOT_*` environment variables. Nested options use a double underscore,
//! e.g. `BALLOT_OPTIONS__ELECTION_YEAR=2026`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;
use crate::options::Options;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BALLOT";

/// Settings for the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address.
    ///
    /// Default: `"0.0.0.0:5000"`
    pub bind: String,

    /// Origins allowed by CORS. Empty allows any origin.
    ///
    /// Default: empty
    pub cors_origins: Vec<String>,

    /// `User-Agent` for outbound requests, e.g. `BALLOT_USER_AGENT`. `None`
    /// sends [`crate::fetch::DEFAULT_USER_AGENT`].
    ///
    /// Default: `None`
    pub user_agent: Option<String>,

    /// Targeting and extraction options.
    pub options: Options,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            cors_origins: Vec::new(),
            user_agent: None,
            options: Options::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be parsed or a value has
    /// the wrong type.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors_origins")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }
}
