//! Build-environment configuration for the request pipeline and shell.
//!
//! The console is a static bundle, so configuration is fixed at build time:
//! `APP_ENV` selects the environment and `API_BASE_URL` optionally overrides
//! the backend endpoint. Both are read with `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

/// Backend endpoint used by production builds.
pub const PRODUCTION_BASE_URL: &str = "https://springboot-cy09-144378-5-1346809069.sh.run.tcloudbase.com";

/// Overall per-request budget in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 100_000;

pub const LOGIN_PATH: &str = "/user/login";
pub const REGISTER_PATH: &str = "/user/register";

/// Routes reachable without a session.
pub const NO_NEED_LOGIN_WHITELIST: [&str; 2] = [REGISTER_PATH, LOGIN_PATH];

/// Errors produced while parsing build configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown APP_ENV: {0}")]
    UnknownEnv(String),

    #[error("invalid API_BASE_URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
    Test,
}

impl AppEnv {
    pub fn is_dev(self) -> bool {
        self == Self::Development
    }
}

/// Settings consumed by [`crate::net::client::RequestClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    /// Prefix joined to every request path. `None` means same-origin.
    pub base_url: Option<String>,
    pub timeout_ms: u64,
}

impl RequestConfig {
    /// Default request settings for `env`.
    pub fn for_env(env: AppEnv) -> Self {
        let base_url = match env {
            AppEnv::Production => Some(PRODUCTION_BASE_URL.to_owned()),
            AppEnv::Development | AppEnv::Test => None,
        };
        Self { base_url, timeout_ms: REQUEST_TIMEOUT_MS }
    }

    /// Join `path` onto the configured base URL.
    pub fn url_for(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
            None => path.to_owned(),
        }
    }
}

/// Typed build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: AppEnv,
    pub request: RequestConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_env(AppEnv::default())
    }
}

impl AppConfig {
    pub fn for_env(env: AppEnv) -> Self {
        Self { env, request: RequestConfig::for_env(env) }
    }

    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `APP_ENV`: `development` (default), `production` or `test`
    /// - `API_BASE_URL`: overrides the environment's default endpoint
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable holds an unusable value.
    pub fn from_build() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("APP_ENV"), option_env!("API_BASE_URL"))
    }

    /// Build config from raw variable values.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either value is unusable.
    pub fn from_values(env: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::for_env(parse_env(env)?);
        if let Some(raw) = base_url.map(str::trim).filter(|raw| !raw.is_empty()) {
            config.request.base_url = Some(parse_base_url(raw)?);
        }
        Ok(config)
    }
}

fn parse_env(raw: Option<&str>) -> Result<AppEnv, ConfigError> {
    match raw.map(str::trim).unwrap_or("development") {
        "" | "development" | "dev" => Ok(AppEnv::Development),
        "production" | "prod" => Ok(AppEnv::Production),
        "test" => Ok(AppEnv::Test),
        other => Err(ConfigError::UnknownEnv(other.to_owned())),
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| ConfigError::InvalidBaseUrl { url: raw.to_owned(), reason: e.to_string() })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
