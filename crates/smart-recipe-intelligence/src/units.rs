// ABOUTME: Converts ingredient quantities in cooking units to grams
// ABOUTME: Unknown units are treated as grams and reported as a fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::LazyLock;

use smart_recipe_core::constants::units::UNIT_GRAMS;
use smart_recipe_core::errors::Fallback;
use tracing::debug;

/// Grams per unit, keyed by every accepted lower-case spelling
static GRAMS_PER_UNIT: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    UNIT_GRAMS
        .iter()
        .flat_map(|(spellings, grams)| spellings.iter().map(move |spelling| (*spelling, *grams)))
        .collect()
});

/// Grams in one `unit`, if the unit is known
#[must_use]
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let key = unit.trim().trim_end_matches('.').to_lowercase();
    GRAMS_PER_UNIT.get(key.as_str()).copied()
}

/// Convert `quantity` of `unit` to grams
///
/// An empty unit means the quantity is already in grams. A non-empty unknown
/// unit is also taken as grams and logged as a fallback.
#[must_use]
pub fn convert_to_grams(quantity: f64, unit: &str) -> f64 {
    if unit.trim().is_empty() {
        return quantity;
    }
    grams_per_unit(unit).map_or_else(
        || {
            let fallback = Fallback::UnknownUnit {
                unit: unit.to_owned(),
            };
            debug!(kind = fallback.kind(), %fallback, "Unit fallback");
            quantity
        },
        |grams| quantity * grams,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_units() {
        assert!((convert_to_grams(2.0, "tbsp") - 28.4).abs() < 1e-9);
        assert!((convert_to_grams(1.0, "Cups") - 240.0).abs() < 1e-9);
        assert!((convert_to_grams(500.0, "mg") - 0.5).abs() < 1e-9);
        assert!((convert_to_grams(1.0, "tsp.") - 4.7).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit_is_grams() {
        assert!((convert_to_grams(3.0, "handful") - 3.0).abs() < 1e-9);
        assert_eq!(grams_per_unit("handful"), None);
    }
}
