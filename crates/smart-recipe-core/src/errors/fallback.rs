// ABOUTME: Locally recovered conditions that degrade a result instead of failing it
// ABOUTME: Quantity parse failures, unresolved scale types, nutrition misses, unknown units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

/// A condition the engine recovered from while producing a best-effort result
///
/// None of these are surfaced to callers; they are emitted as structured
/// `tracing` fields so degraded output can be diagnosed from logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Quantity token could not be evaluated; amount defaulted to 1
    QuantityParseFailure {
        /// The offending quantity token
        token: String,
    },
    /// Ingredient name matched nothing in the scale-type table; LINEAR used
    UnresolvedScaleType {
        /// Canonical name that was looked up
        name: String,
    },
    /// No confident reference food, or none with focus nutrients; empty set used
    NutritionMatchMiss {
        /// Normalized ingredient name
        name: String,
    },
    /// Unit absent from the conversion table; quantity treated as grams
    UnknownUnit {
        /// The unrecognized unit token
        unit: String,
    },
}

impl Fallback {
    /// Short stable identifier for log filtering
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::QuantityParseFailure { .. } => "quantity_parse_failure",
            Self::UnresolvedScaleType { .. } => "unresolved_scale_type",
            Self::NutritionMatchMiss { .. } => "nutrition_match_miss",
            Self::UnknownUnit { .. } => "unknown_unit",
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuantityParseFailure { token } => {
                write!(f, "quantity '{token}' unparseable, using 1")
            }
            Self::UnresolvedScaleType { name } => {
                write!(f, "no scale type for '{name}', using linear")
            }
            Self::NutritionMatchMiss { name } => {
                write!(f, "no nutrient reference for '{name}'")
            }
            Self::UnknownUnit { unit } => write!(f, "unit '{unit}' unknown, treating as grams"),
        }
    }
}
