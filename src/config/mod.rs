pub(crate) mod types;

use std::{fmt, net::SocketAddr, str::FromStr};

use config::{Config, Environment, File};
use serde::Deserialize;
pub use types::{Profile, ServerConfig, StorageKind, StorageSettings, TelemetryConfig};

use crate::{
    init::StartupError,
    trace_err,
    utils::{DATABASE_URL, DEFAULT_SECRET_KEY, IN_MEMORY_DATABASE_URL, RUN_MODE, SECRET_KEY},
};

/// Never printed, so settings can be logged as a whole.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub(crate) profile: Profile,
    pub(crate) debug: bool,
    pub(crate) secret_key: SecretKey,
    pub(crate) server: ServerConfig,
    pub(crate) storage: StorageSettings,
    pub(crate) telemetry: TelemetryConfig,
}

impl Settings {
    /// Loads `.env`, then resolves the profile named by `RUN_MODE`.
    pub fn new() -> Result<Self, StartupError> {
        dotenv::dotenv().ok();

        let run_mode = std::env::var(RUN_MODE).unwrap_or_else(|_| Profile::Development.to_string());
        let profile = Profile::from_str(&run_mode)
            .map_err(|_| StartupError::UnknownProfile(run_mode.clone()))?;

        Settings::resolve(profile)
    }

    pub fn resolve(profile: Profile) -> Result<Self, StartupError> {
        let database_url = match profile {
            Profile::Testing => Some(IN_MEMORY_DATABASE_URL.to_string()),
            Profile::Development => env_var(DATABASE_URL),
            Profile::Production => Some(normalize_database_url(
                &env_var(DATABASE_URL).ok_or(StartupError::FailedToLoadEnvVar(DATABASE_URL))?,
            )),
        };

        trace_err!(
            Config::builder()
                .add_source(File::with_name("config/default"))
                .add_source(File::with_name(&format!("config/{profile}")).required(false))
                .add_source(Environment::with_prefix("APP").separator("__"))
                .set_override("profile", profile.as_ref())?
                .set_override_option("storage.url", database_url)?
                .set_override_option("secret_key", env_var(SECRET_KEY))?
                .build()?
                .try_deserialize::<Settings>(),
            profile = %profile,
            "failed to build app settings"
        )
        .map_err(Into::into)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn database_url(&self) -> &str {
        &self.storage.url
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server.addr
    }

    pub fn worker_threads(&self) -> usize {
        self.server.worker_threads()
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key.expose() == DEFAULT_SECRET_KEY
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Rewrites the legacy `postgres://` scheme to `postgresql://`.
pub(crate) fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_owned(),
    }
}
