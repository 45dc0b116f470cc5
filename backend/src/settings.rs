//! Process settings loaded via OrthoConfig.
//!
//! Values come from `USERS_API_*` environment variables, CLI flags and
//! configuration files, in the precedence order `ortho_config` defines. The
//! database connection string additionally falls back to `DATABASE_URL`.

use std::env;
use std::ffi::OsString;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Default listen address.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;
/// Default prefix mounted in front of the user routes.
pub const DEFAULT_PATH_PREFIX: &str = "/api/rust";
/// Environment variable consulted when no explicit database URL is set.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configuration sources could not be merged.
    #[error("failed to load settings: {message}")]
    Load { message: String },
    /// Neither `USERS_API_DATABASE_URL` nor `DATABASE_URL` is set.
    #[error("database URL missing: set USERS_API_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A database URL was provided but blank.
    #[error("{source_name} must not be empty")]
    EmptyDatabaseUrl { source_name: &'static str },
    /// The host is not an IP address.
    #[error("host must be an IP address, got {host:?}")]
    InvalidHost { host: String },
    /// The path prefix is not an absolute path.
    #[error("path prefix must start with '/', got {prefix:?}")]
    InvalidPathPrefix { prefix: String },
}

/// Settings for the users API process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct AppSettings {
    /// IP address to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8000)]
    pub port: u16,
    /// Prefix mounted in front of `/users`.
    pub path_prefix: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub max_connections: u32,
    /// Explicit database URL; takes precedence over `DATABASE_URL`.
    pub database_url: Option<String>,
}

impl AppSettings {
    /// Load settings from the environment, CLI arguments and config files.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Socket address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(host) => host.parse().map_err(|_| SettingsError::InvalidHost {
                host: host.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Normalised route prefix without a trailing slash.
    ///
    /// `/` or an empty value mounts the routes at the root.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPathPrefix`] for relative prefixes.
    pub fn path_prefix(&self) -> Result<String, SettingsError> {
        let raw = self
            .path_prefix
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_PATH_PREFIX);
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        if !trimmed.starts_with('/') {
            return Err(SettingsError::InvalidPathPrefix {
                prefix: raw.to_owned(),
            });
        }
        Ok(trimmed.to_owned())
    }

    /// Pool size, at least one.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.max(1)
    }

    /// Database URL from settings or the `DATABASE_URL` environment variable.
    ///
    /// # Errors
    ///
    /// See [`resolve_database_url`].
    pub fn database_url(&self) -> Result<String, SettingsError> {
        resolve_database_url(self.database_url.clone(), env::var(DATABASE_URL_ENV).ok())
    }
}

/// Pick the explicit URL when present, otherwise the fallback.
///
/// # Errors
///
/// Returns [`SettingsError::EmptyDatabaseUrl`] when the chosen value is blank
/// and [`SettingsError::MissingDatabaseUrl`] when neither is set.
pub fn resolve_database_url(
    explicit: Option<String>,
    fallback: Option<String>,
) -> Result<String, SettingsError> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(SettingsError::EmptyDatabaseUrl {
                source_name: "USERS_API_DATABASE_URL",
            });
        }
        return Ok(value);
    }

    let from_env = fallback.ok_or(SettingsError::MissingDatabaseUrl)?;
    if from_env.trim().is_empty() {
        return Err(SettingsError::EmptyDatabaseUrl {
            source_name: DATABASE_URL_ENV,
        });
    }
    Ok(from_env)
}
