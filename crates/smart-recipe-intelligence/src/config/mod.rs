// ABOUTME: Scaling engine configuration with defaults and range validation
// ABOUTME: Base servings, fuzzy-match thresholds, and cook-time bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scaling Configuration
//!
//! Tuning values for the scaling engine. Defaults come from
//! `smart_recipe_core::constants::defaults`; the application layer may
//! override any of them from the environment and must call
//! [`ScalingConfig::validate`] before use.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use smart_recipe_core::constants::defaults;

/// Scaling engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Servings a recipe is authored for when the dataset does not say
    pub base_servings: u32,
    /// Minimum similarity (0-1) for a fuzzy scale-type match
    pub scale_type_cutoff: f64,
    /// Minimum similarity (0-1) for a fuzzy nutrient reference match
    pub nutrition_threshold: f64,
    /// Upper bound on cooking time growth, as a multiple of the original
    pub cook_time_max_multiplier: f64,
    /// Lower bound for a scaled cooking time, in minutes
    pub cook_time_floor_minutes: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            base_servings: defaults::BASE_SERVINGS,
            scale_type_cutoff: defaults::SCALE_TYPE_SIMILARITY_CUTOFF,
            nutrition_threshold: defaults::NUTRITION_MATCH_THRESHOLD,
            cook_time_max_multiplier: defaults::COOK_TIME_MAX_MULTIPLIER,
            cook_time_floor_minutes: defaults::COOK_TIME_FLOOR_MINUTES,
        }
    }
}

impl ScalingConfig {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold is outside `[0, 1]`, the cook-time
    /// multiplier is below 1, the floor is negative, or base servings is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_servings == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_servings must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.scale_type_cutoff) {
            return Err(ConfigError::InvalidRange(
                "scale_type_cutoff must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.nutrition_threshold) {
            return Err(ConfigError::InvalidRange(
                "nutrition_threshold must be between 0 and 1",
            ));
        }
        if !self.cook_time_max_multiplier.is_finite() || self.cook_time_max_multiplier < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "cook_time_max_multiplier must be at least 1",
            ));
        }
        if !self.cook_time_floor_minutes.is_finite() || self.cook_time_floor_minutes < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "cook_time_floor_minutes must not be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScalingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let config = ScalingConfig {
            nutrition_threshold: 60.0,
            ..ScalingConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let config = ScalingConfig {
            cook_time_max_multiplier: 0.5,
            ..ScalingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let config = ScalingConfig {
            base_servings: 0,
            ..ScalingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
