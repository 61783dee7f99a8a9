// ABOUTME: Property-style tests for the scaling engine over ranges of inputs
// ABOUTME: Checks scale-type laws, cook-time bounds, parser defaults, and single injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smart_recipe_core::models::{format_amount, ParsedIngredient, ScaleType};
use smart_recipe_intelligence::cook_time::original_cook_time;
use smart_recipe_intelligence::{
    parse_ingredient_block, parse_quantity, scale_amount, scale_ingredient, CookTimeScaler,
    InstructionRewriter,
};

const AMOUNTS: [f64; 6] = [0.25, 0.5, 1.0, 1.5, 2.0, 7.3];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Scale types
// ============================================================================

#[test]
fn test_linear_matches_ratio() {
    for amount in AMOUNTS {
        for base in 1..=6_u32 {
            for target in 1..=12_u32 {
                let scaled = scale_amount(amount, ScaleType::Linear, base.into(), target.into());
                let expected = round2(amount * f64::from(target) / f64::from(base));
                assert!((scaled - expected).abs() < 1e-9, "{amount} {base}->{target}");
            }
        }
    }
}

#[test]
fn test_fixed_never_changes() {
    for amount in AMOUNTS {
        for target in 1..=20_u32 {
            let scaled = scale_amount(amount, ScaleType::Fixed, 2.0, target.into());
            assert!((scaled - amount).abs() < 1e-9);
        }
    }
}

#[test]
fn test_log_unchanged_for_single_serving() {
    for amount in AMOUNTS {
        let scaled = scale_amount(amount, ScaleType::Log, 4.0, 1.0);
        assert!((scaled - amount).abs() < 1e-9);
    }
}

#[test]
fn test_log_grows_slower_than_linear() {
    let log = scale_amount(1.0, ScaleType::Log, 2.0, 8.0);
    let linear = scale_amount(1.0, ScaleType::Linear, 2.0, 8.0);
    assert!((log - 3.0).abs() < 1e-9);
    assert!(log < linear);
}

#[test]
fn test_scaling_keeps_unit_and_name() {
    let parsed = ParsedIngredient::new(Some(2.0), "cups", "basmati rice");
    let scaled = scale_ingredient(&parsed, ScaleType::Linear, 2, 5);
    assert_eq!(scaled.ingredient.unit(), "cups");
    assert_eq!(scaled.ingredient.name(), "basmati rice");
    assert_eq!(scaled.ingredient.formatted_amount(), "5");
    assert_eq!(scaled.original_amount, Some(2.0));
}

// ============================================================================
// Cooking time
// ============================================================================

#[test]
fn test_cook_time_stays_within_bounds() {
    let scaler = CookTimeScaler::default();
    for original in [5_u32, 12, 20, 45, 90] {
        for base in 1..=4_u32 {
            for target in (base + 1)..=16 {
                let adjusted = scaler
                    .scale(&original.to_string(), base, target)
                    .minutes()
                    .unwrap();
                let upper = (f64::from(original) * 1.7).round() as u32;
                assert!(adjusted >= original, "{original} {base}->{target}");
                assert!(adjusted <= upper.max(5), "{original} {base}->{target}");
            }
        }
    }
}

#[test]
fn test_cook_time_scenario() {
    let scaled = CookTimeScaler::default().scale("20", 2, 8).minutes().unwrap();
    assert!((20..=34).contains(&scaled));
    assert_eq!(original_cook_time("20 minutes").minutes(), Some(20));
}

// ============================================================================
// Parsing and formatting
// ============================================================================

#[test]
fn test_unquantified_line_defaults_to_one() {
    for line in ["salt to taste", "a handful of curry leaves", "oil for frying"] {
        let parsed = parse_ingredient_block(line);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].amount(), Some(1.0));
        assert_eq!(parsed[0].formatted_amount(), "1");
        assert_eq!(parsed[0].name(), line);
    }
}

#[test]
fn test_spec_ingredients_scale() {
    let parsed = parse_ingredient_block("2 cups rice, 1 tsp salt");
    let rice = scale_ingredient(&parsed[0], ScaleType::Linear, 2, 4);
    let salt = scale_ingredient(&parsed[1], ScaleType::Fixed, 2, 4);

    assert_eq!(rice.ingredient.amount(), Some(4.0));
    assert_eq!(rice.ingredient.unit(), "cups");
    assert_eq!(salt.ingredient.amount(), Some(1.0));
    assert_eq!(salt.ingredient.unit(), "tsp");
}

#[test]
fn test_format_then_parse_round_trip() {
    for hundredths in 1..=1000_u32 {
        let value = f64::from(hundredths) / 100.0;
        let rendered = format_amount(Some(value));
        let reparsed = parse_quantity(&rendered).unwrap();
        assert!((reparsed - value).abs() <= 0.01, "{value} -> {rendered} -> {reparsed}");
    }
}

// ============================================================================
// Instruction rewriting
// ============================================================================

#[test]
fn test_each_core_name_injected_once() {
    let rewriter = InstructionRewriter::default();
    let steps = vec![
        "Soak the rice.".to_owned(),
        "Drain the rice and add fresh water.".to_owned(),
        "Cook the rice until soft.".to_owned(),
    ];
    let ingredients = vec![
        ParsedIngredient::new(Some(3.0), "cups", "rice"),
        ParsedIngredient::new(Some(1.5), "cups", "basmati rice"),
    ];

    let rewritten = rewriter.rewrite(&steps, &ingredients);
    let joined = rewritten.join(" ");
    assert_eq!(joined.matches("3 cups").count(), 1);
    assert!(!joined.contains("1 1/2 cups"));
    assert_eq!(rewritten[0], "Soak the 3 cups rice.");
}
