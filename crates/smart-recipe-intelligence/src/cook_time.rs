// ABOUTME: Cooking time parsing and logarithmic scaling with configurable bounds
// ABOUTME: Scaled times stay between the original and a capped multiple of it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cook Time Scaling
//!
//! Cooking time grows with servings far slower than quantities do. For a
//! larger batch the original time is multiplied by `ln(target) / ln(base)`,
//! then clamped to `[original, original * max_multiplier]` and raised to a
//! floor. Smaller batches keep the original time.

use std::sync::LazyLock;

use regex::Regex;
use smart_recipe_core::constants::defaults::{COOK_TIME_FLOOR_MINUTES, COOK_TIME_MAX_MULTIPLIER};
use smart_recipe_core::models::CookTime;

use crate::config::ScalingConfig;

static LEADING_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").ok());

/// Scales cooking times between serving counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookTimeScaler {
    max_multiplier: f64,
    floor_minutes: f64,
}

impl Default for CookTimeScaler {
    fn default() -> Self {
        Self {
            max_multiplier: COOK_TIME_MAX_MULTIPLIER,
            floor_minutes: COOK_TIME_FLOOR_MINUTES,
        }
    }
}

impl CookTimeScaler {
    /// Scaler with explicit bounds
    #[must_use]
    pub const fn new(max_multiplier: f64, floor_minutes: f64) -> Self {
        Self {
            max_multiplier,
            floor_minutes,
        }
    }

    /// Scaler with the bounds from `config`
    #[must_use]
    pub const fn from_config(config: &ScalingConfig) -> Self {
        Self::new(config.cook_time_max_multiplier, config.cook_time_floor_minutes)
    }

    /// Scale a raw cooking-time cell such as `"20"` or `"20 mins"`
    ///
    /// Returns [`CookTime::NotAvailable`] when no leading number is present.
    #[must_use]
    pub fn scale(&self, raw: &str, base_servings: u32, new_servings: u32) -> CookTime {
        parse_minutes(raw).map_or(CookTime::NotAvailable, |original| {
            CookTime::Minutes(self.scale_minutes(original, base_servings, new_servings))
        })
    }

    /// Scale a numeric cooking time, in minutes
    #[must_use]
    pub fn scale_minutes(&self, original: f64, base_servings: u32, new_servings: u32) -> u32 {
        if new_servings <= base_servings || original <= 0.0 {
            return to_minutes(original);
        }

        let base = f64::from(base_servings);
        let target = f64::from(new_servings);
        let factor = target.ln() / base.ln();
        let scaled = if factor.is_finite() {
            original * factor
        } else {
            original * target / base
        };

        let bounded = scaled
            .min(original * self.max_multiplier)
            .max(original)
            .max(self.floor_minutes);
        to_minutes(bounded)
    }
}

/// Original cooking time as rendered without scaling
#[must_use]
pub fn original_cook_time(raw: &str) -> CookTime {
    parse_minutes(raw).map_or(CookTime::NotAvailable, |minutes| {
        CookTime::Minutes(to_minutes(minutes))
    })
}

/// Leading number of a cooking-time cell, in minutes
#[must_use]
pub fn parse_minutes(raw: &str) -> Option<f64> {
    LEADING_NUMBER
        .as_ref()?
        .captures(raw)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

fn to_minutes(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("20"), Some(20.0));
        assert_eq!(parse_minutes(" 45 mins"), Some(45.0));
        assert_eq!(parse_minutes("12.5"), Some(12.5));
        assert_eq!(parse_minutes("about 20"), None);
    }

    #[test]
    fn test_base_of_one_uses_linear_then_cap() {
        let scaler = CookTimeScaler::default();
        assert_eq!(scaler.scale_minutes(10.0, 1, 2), 17);
    }

    #[test]
    fn test_floor_applies_to_short_times() {
        let scaler = CookTimeScaler::default();
        assert_eq!(scaler.scale_minutes(2.0, 2, 3), 5);
    }
}
