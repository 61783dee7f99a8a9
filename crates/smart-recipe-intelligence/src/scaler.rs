// ABOUTME: Quantity scaling for linear, logarithmic, and fixed ingredients
// ABOUTME: Produces ScaledIngredient values rounded to two decimals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smart_recipe_core::models::{ParsedIngredient, ScaleType, ScaledIngredient};

/// Scale `amount` from `base` servings to `target` servings
///
/// - `Fixed` returns the amount unchanged
/// - `Log` multiplies by `ln(target) / ln(base)`, leaves the amount unchanged
///   for a target of one serving or fewer, and falls back to linear when the
///   logarithm is undefined
/// - `Linear` multiplies by `target / base`
///
/// The result is rounded to two decimals.
#[must_use]
pub fn scale_amount(amount: f64, scale_type: ScaleType, base: f64, target: f64) -> f64 {
    if base <= 0.0 {
        return round2(amount);
    }
    let scaled = match scale_type {
        ScaleType::Fixed => amount,
        ScaleType::Log if target <= 1.0 => amount,
        ScaleType::Log => {
            let factor = target.ln() / base.ln();
            if base <= 1.0 || !factor.is_finite() {
                amount * target / base
            } else {
                amount * factor
            }
        }
        ScaleType::Linear => amount * target / base,
    };
    round2(scaled)
}

/// Scale one parsed ingredient
///
/// Absent and zero amounts pass through unscaled. Unit and name never change.
#[must_use]
pub fn scale_ingredient(
    ingredient: &ParsedIngredient,
    scale_type: ScaleType,
    base_servings: u32,
    new_servings: u32,
) -> ScaledIngredient {
    let original_amount = ingredient.amount();
    let scaled = if ingredient.is_unquantified() {
        ingredient.clone()
    } else {
        ingredient.with_amount(original_amount.map(|amount| {
            scale_amount(
                amount,
                scale_type,
                f64::from(base_servings),
                f64::from(new_servings),
            )
        }))
    };
    ScaledIngredient {
        ingredient: scaled,
        scale_type,
        original_amount,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
