// ABOUTME: Integration tests for the recipe scaling service
// ABOUTME: Covers lookup across languages, scale types, rewriting, cook times, and request errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use smart_recipe::errors::ErrorCode;
use smart_recipe::services::scale_recipe;
use smart_recipe_core::models::{CookTime, IngredientView};
use smart_recipe_intelligence::parse_quantity;

fn view(name: &str, amount: &str, unit: &str) -> IngredientView {
    IngredientView {
        name: name.to_owned(),
        formatted_amount: amount.to_owned(),
        unit: unit.to_owned(),
    }
}

// ============================================================================
// Scaling
// ============================================================================

#[tokio::test]
async fn test_linear_and_fixed_ingredients() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Rice Bowl", 4).unwrap();

    assert_eq!(result.base_servings, 2);
    assert_eq!(result.new_servings, 4);
    assert_eq!(result.language_detected, "en");
    assert_eq!(result.recipe_title, "Rice Bowl");
    assert_eq!(
        result.ingredients,
        vec![view("rice", "4", "cups"), view("salt", "1", "tsp")]
    );
}

#[tokio::test]
async fn test_lookup_is_trimmed_and_case_insensitive() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "  rice BOWL ", 2).unwrap();
    assert_eq!(result.recipe_title, "Rice Bowl");
}

#[tokio::test]
async fn test_base_servings_from_dataset_column() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Lemon Rice", 8).unwrap();

    assert_eq!(result.base_servings, 4);
    assert_eq!(result.ingredients[0], view("rice", "2", "cup"));
    assert_eq!(result.ingredients[1], view("sugar", "4", "tbsp"));
}

#[tokio::test]
async fn test_unquantified_ingredient_defaults_to_one() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Lemon Rice", 4).unwrap();

    let salt = result
        .ingredients
        .iter()
        .find(|ingredient| ingredient.name == "salt to taste")
        .unwrap();
    assert_eq!(salt.formatted_amount, "1");
    assert_eq!(salt.unit, "");
}

#[tokio::test]
async fn test_formatted_amounts_reparse_within_tolerance() {
    let ctx = common::load_context().await;
    for servings in [1, 3, 5, 7] {
        let result = scale_recipe(&ctx, "Dal Tadka", servings).unwrap();
        let dal = &result.ingredients[0];
        let expected = (f64::from(servings as u32) / 2.0 * 100.0).round() / 100.0;
        let reparsed = parse_quantity(&dal.formatted_amount).unwrap();
        assert!(
            (reparsed - expected).abs() <= 0.01,
            "{} re-parsed as {reparsed}, expected {expected}",
            dal.formatted_amount
        );
    }
}

// ============================================================================
// Localized recipes
// ============================================================================

#[tokio::test]
async fn test_tamil_recipe_uses_tamil_columns() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "சாதம்", 4).unwrap();

    assert_eq!(result.language_detected, "ta");
    assert_eq!(result.recipe_title, "சாதம்");
    assert_eq!(
        result.ingredients,
        vec![
            view("rice அரிசி", "4", "கப்"),
            view("salt உப்பு", "1", "டீஸ்பூன்"),
        ]
    );
    assert_eq!(
        result.steps,
        vec![
            "4 கப் அரிசி கழுவவும்.".to_owned(),
            "1 டீஸ்பூன் உப்பு சேர்த்து வேகவைக்கவும்.".to_owned(),
        ]
    );
}

#[tokio::test]
async fn test_hindi_recipe_detected() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "दाल तड़का", 4).unwrap();

    assert_eq!(result.language_detected, "hn");
    assert_eq!(result.ingredients[0].formatted_amount, "2");
    assert_eq!(result.ingredients[1].formatted_amount, "1/2");
}

#[tokio::test]
async fn test_localized_recipe_without_english_columns_scales() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "அவல் பாயசம்", 4).unwrap();
    assert_eq!(result.ingredients, vec![view("அவல்", "2", "கப்")]);
}

// ============================================================================
// Instruction rewriting
// ============================================================================

#[tokio::test]
async fn test_quantities_injected_once_per_ingredient() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Rice Bowl", 4).unwrap();

    assert_eq!(
        result.steps,
        vec![
            "Wash the 4 cups rice.".to_owned(),
            "Cook the rice in water with 1 tsp salt.".to_owned(),
        ]
    );
    let injected = result
        .steps
        .iter()
        .map(|step| step.matches("4 cups").count())
        .sum::<usize>();
    assert_eq!(injected, 1);
}

// ============================================================================
// Cooking time
// ============================================================================

#[tokio::test]
async fn test_cook_time_capped_at_multiplier() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Rice Bowl", 8).unwrap();

    assert_eq!(result.original_time, CookTime::Minutes(20));
    assert_eq!(result.adjusted_time, CookTime::Minutes(34));
    assert_eq!(result.original_time_display, "20 mins");
    assert_eq!(result.adjusted_time_display, "34 mins");
}

#[tokio::test]
async fn test_cook_time_log_growth() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Rice Bowl", 3).unwrap();
    assert_eq!(result.adjusted_time, CookTime::Minutes(32));
}

#[tokio::test]
async fn test_cook_time_unchanged_when_scaling_down() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Rice Bowl", 1).unwrap();
    assert_eq!(result.adjusted_time, CookTime::Minutes(20));
    assert_eq!(result.ingredients[0].formatted_amount, "1");
}

#[tokio::test]
async fn test_cook_time_bounds_for_textual_value() {
    let ctx = common::load_context().await;
    for servings in 5..=12 {
        let result = scale_recipe(&ctx, "Lemon Rice", servings).unwrap();
        let minutes = result.adjusted_time.minutes().unwrap();
        assert!((15..=26).contains(&minutes), "{servings} servings gave {minutes}");
    }
}

#[tokio::test]
async fn test_unparseable_cook_time_is_not_available() {
    let ctx = common::load_context().await;
    let result = scale_recipe(&ctx, "Sugar Syrup", 6).unwrap();

    assert_eq!(result.original_time, CookTime::NotAvailable);
    assert_eq!(result.adjusted_time_display, "N/A");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["originalTime"], "N/A");
    assert_eq!(json["newServings"], 6);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_recipe_not_found() {
    let ctx = common::load_context().await;
    let error = scale_recipe(&ctx, "Pizza Margherita", 4).unwrap_err();
    assert_eq!(error.code, ErrorCode::RecipeNotFound);
}

#[tokio::test]
async fn test_non_positive_servings_rejected() {
    let ctx = common::load_context().await;
    for servings in [0, -3] {
        let error = scale_recipe(&ctx, "Rice Bowl", servings).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}

#[tokio::test]
async fn test_missing_cooking_column_is_schema_error() {
    let ctx = common::load_context().await;
    let error = scale_recipe(&ctx, "Mystery Soup", 4).unwrap_err();
    assert_eq!(error.code, ErrorCode::SchemaMissing);
    assert_eq!(error.context.details["sheet"], "Drafts");
}
