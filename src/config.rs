#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, OnceLock},
};

use anyhow::{Context, Result};
use tracing::Level;
use typed_builder::TypedBuilder;

use crate::engine::{DEFAULT_MAX_CREDITS, EngineConfig};

/// Address the service listens on when `THINKORA_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Runtime configuration for the binary and the HTTP service.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(default))]
pub struct AppConfig {
    /// Limits handed to every calculation.
    engine:    EngineConfig,
    /// Socket address for `serve`.
    #[builder(default = default_addr())]
    addr:      SocketAddr,
    /// Maximum log level.
    #[builder(default = Level::INFO)]
    log_level: Level,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything missing or unparsable.
    pub fn from_env() -> Self {
        let max_credits = std::env::var("THINKORA_MAX_CREDITS")
            .ok()
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(DEFAULT_MAX_CREDITS);

        let addr = std::env::var("THINKORA_ADDR")
            .ok()
            .and_then(|value| value.trim().parse::<SocketAddr>().ok())
            .unwrap_or_else(default_addr);

        let log_level = std::env::var("THINKORA_LOG")
            .ok()
            .and_then(|value| value.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self {
            engine: EngineConfig::builder().max_credits(max_credits).build(),
            addr,
            log_level,
        }
    }

    /// Returns the calculation limits.
    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Returns the listen address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the maximum log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns a copy with the listen address replaced by `addr`.
    pub fn with_addr(mut self, addr: &str) -> Result<Self> {
        self.addr = addr
            .parse()
            .with_context(|| format!("`{addr}` is not a valid socket address"))?;
        Ok(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Socket form of [`DEFAULT_ADDR`].
fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8000))
}

/// Global storage for the lazily constructed configuration.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<AppConfig>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<AppConfig>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the process-wide configuration, reading the environment on first
/// use.
pub fn get() -> Arc<AppConfig> {
    let mut guard = slot().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(cfg) = guard.as_ref() {
        return Arc::clone(cfg);
    }

    let cfg = Arc::new(AppConfig::from_env());
    *guard = Some(Arc::clone(&cfg));
    cfg
}
