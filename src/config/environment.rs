// ABOUTME: Environment-based configuration for dataset location and scaling tuning
// ABOUTME: Reads SMART_RECIPE_* variables over defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `SMART_RECIPE_DATA_DIR` | `./data`, else the platform data dir |
//! | `SMART_RECIPE_BASE_SERVINGS` | 2 |
//! | `SMART_RECIPE_SCALE_TYPE_CUTOFF` | 0.75 |
//! | `SMART_RECIPE_NUTRITION_THRESHOLD` | 0.6 |
//! | `SMART_RECIPE_COOK_TIME_MAX_MULTIPLIER` | 1.7 |
//! | `SMART_RECIPE_COOK_TIME_FLOOR_MINUTES` | 5 |

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smart_recipe_intelligence::{ConfigError, ScalingConfig};
use tracing::{debug, info};

use crate::errors::{config_error, AppResult};

/// Environment variable names
pub mod env_keys {
    /// Directory holding the dataset files
    pub const DATA_DIR: &str = "SMART_RECIPE_DATA_DIR";
    /// Default base servings
    pub const BASE_SERVINGS: &str = "SMART_RECIPE_BASE_SERVINGS";
    /// Scale-type fuzzy cutoff
    pub const SCALE_TYPE_CUTOFF: &str = "SMART_RECIPE_SCALE_TYPE_CUTOFF";
    /// Nutrition fuzzy threshold
    pub const NUTRITION_THRESHOLD: &str = "SMART_RECIPE_NUTRITION_THRESHOLD";
    /// Cook-time multiplier cap
    pub const COOK_TIME_MAX_MULTIPLIER: &str = "SMART_RECIPE_COOK_TIME_MAX_MULTIPLIER";
    /// Cook-time floor in minutes
    pub const COOK_TIME_FLOOR_MINUTES: &str = "SMART_RECIPE_COOK_TIME_FLOOR_MINUTES";
}

/// Default dataset directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Application subdirectory under the platform data dir
const PLATFORM_DATA_SUBDIR: &str = "smart-recipe";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the dataset files
    pub data_dir: PathBuf,
    /// Algorithm tuning
    pub scaling: ScalingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a variable does not parse or the
    /// resulting values fail validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let defaults = ScalingConfig::default();

        let scaling = ScalingConfig {
            base_servings: env_parse_or(env_keys::BASE_SERVINGS, defaults.base_servings)?,
            scale_type_cutoff: env_parse_or(
                env_keys::SCALE_TYPE_CUTOFF,
                defaults.scale_type_cutoff,
            )?,
            nutrition_threshold: env_parse_or(
                env_keys::NUTRITION_THRESHOLD,
                defaults.nutrition_threshold,
            )?,
            cook_time_max_multiplier: env_parse_or(
                env_keys::COOK_TIME_MAX_MULTIPLIER,
                defaults.cook_time_max_multiplier,
            )?,
            cook_time_floor_minutes: env_parse_or(
                env_keys::COOK_TIME_FLOOR_MINUTES,
                defaults.cook_time_floor_minutes,
            )?,
        };

        let config = Self {
            data_dir: resolve_data_dir(env::var(env_keys::DATA_DIR).ok().as_deref()),
            scaling,
        };
        config.validate()?;
        debug!(data_dir = %config.data_dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Configuration with defaults for `data_dir`
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            scaling: ScalingConfig::default(),
        }
    }

    /// Validate all values
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error describing the first invalid value
    pub fn validate(&self) -> AppResult<()> {
        self.scaling.validate().map_err(config_error)
    }
}

/// Pick the dataset directory: explicit value, `./data` if present, else the platform data dir
fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit.filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(dir);
    }
    let local = Path::new(DEFAULT_DATA_DIR);
    if local.is_dir() {
        return local.to_path_buf();
    }
    dirs::data_dir().map_or_else(
        || local.to_path_buf(),
        |dir| dir.join(PLATFORM_DATA_SUBDIR),
    )
}

/// Parse an environment variable, or return `default` when unset
fn env_parse_or<T: FromStr>(key: &'static str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            config_error(ConfigError::Parse(format!("{key}: cannot parse '{raw}'")))
        }),
        Err(_) => Ok(default),
    }
}
