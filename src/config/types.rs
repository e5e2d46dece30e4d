use std::net::SocketAddr;

use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Profile {
    Development,
    Testing,
    Production,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum StorageKind {
    Sqlite,
    Postgres,
}

impl StorageKind {
    pub(crate) fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_sec: u64,
    pub create_schema: bool,
}

impl StorageSettings {
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite:")
            && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_filter: String,
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub workers: usize,
}

impl ServerConfig {
    pub fn worker_threads(&self) -> usize {
        match self.workers {
            0 => num_cpus::get(),
            n => n,
        }
    }
}
