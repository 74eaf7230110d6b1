//! Spawn tuning, validated at startup
//!
//! Loaded from LocalStorage on wasm and from an environment variable on
//! native; invalid values abort startup rather than corrupt a run.

use serde::{Deserialize, Serialize};

/// Half-open interval for uniform random draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFinite { field });
        }
        if self.min < 0.0 {
            return Err(ConfigError::Negative { field });
        }
        if self.min >= self.max {
            return Err(ConfigError::EmptySpan {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Spawn-geometry tuning
///
/// Distances are in world units; the spawner counts them down by
/// `dt * BASE_SPEED` per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Scroll distance drawn between consecutive obstacle spawns
    pub obstacle_spacing: Span,
    /// Scroll distance drawn between consecutive coin spawns
    pub coin_spacing: Span,
    /// Coin height band above the ground line
    pub coin_band: Span,
    /// Countdown preloaded at the start of a run; the first obstacle
    /// appears on the first tick, the first coin waits a bit
    pub initial_obstacle_clearance: f32,
    pub initial_coin_clearance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            obstacle_spacing: Span::new(300.0, 800.0),
            coin_spacing: Span::new(800.0, 2400.0),
            coin_band: Span::new(50.0, 200.0),
            initial_obstacle_clearance: 0.0,
            initial_coin_clearance: 240.0,
        }
    }
}

impl SimConfig {
    /// Reject values the simulation cannot draw from
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.obstacle_spacing.check("obstacle_spacing")?;
        self.coin_spacing.check("coin_spacing")?;
        self.coin_band.check("coin_band")?;
        let clearances = [
            ("initial_obstacle_clearance", self.initial_obstacle_clearance),
            ("initial_coin_clearance", self.initial_coin_clearance),
        ];
        for (field, value) in clearances {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ember_run_config";

    /// Environment variable holding inline JSON overrides
    #[cfg(not(target_arch = "wasm32"))]
    const CONFIG_ENV: &'static str = "EMBER_RUN_CONFIG";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config;
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load tuning from the environment (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::CONFIG_ENV) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    log::info!("Loaded config from ${}", Self::CONFIG_ENV);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed ${}: {e}", Self::CONFIG_ENV);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

/// Rejected configuration value, raised before the first tick
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptySpan {
        field: &'static str,
        min: f32,
        max: f32,
    },
    NonFinite {
        field: &'static str,
    },
    Negative {
        field: &'static str,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptySpan { field, min, max } => {
                write!(f, "{field}: empty span (min {min} >= max {max})")
            }
            ConfigError::NonFinite { field } => write!(f, "{field}: not finite"),
            ConfigError::Negative { field } => write!(f, "{field}: negative"),
        }
    }
}

impl std::error::Error for ConfigError {}
