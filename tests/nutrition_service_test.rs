// ABOUTME: Integration tests for the recipe nutrition service
// ABOUTME: Covers unit conversion, overrides, food selection, and localized nutrient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use smart_recipe::errors::ErrorCode;
use smart_recipe::services::get_nutrition_for_recipe;

#[tokio::test]
async fn test_tablespoons_of_sugar() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "Sugar Syrup", None).unwrap();

    assert_eq!(result.language_detected, "en");
    assert_eq!(result.nutrition["Calories"], "109.91 kcal");
    assert_eq!(result.nutrition["Carbohydrates"], "28.4 g");
    // Protein is defined with the excluded rank
    assert!(!result.nutrition.contains_key("Protein"));
}

#[tokio::test]
async fn test_totals_across_ingredients() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "Lemon Rice", None).unwrap();

    assert_eq!(result.nutrition["Calories"], "985.91 kcal");
    assert_eq!(result.nutrition["Carbohydrates"], "220.4 g");
    // salt to taste: 1 g of the salt food with the most nutrient records
    assert_eq!(result.nutrition["Sodium"], "380 g");
}

#[tokio::test]
async fn test_skipped_ingredients_contribute_nothing() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "Mystery Soup", None).unwrap();
    assert!(result.nutrition.is_empty());
}

#[tokio::test]
async fn test_names_follow_detected_language() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "दाल तड़का", None).unwrap();

    assert_eq!(result.language_detected, "hn");
    assert_eq!(result.nutrition["सोडियम"], "893 g");
    assert_eq!(result.nutrition["कैलोरी"], "0 kcal");
}

#[tokio::test]
async fn test_language_override() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "दाल तड़का", Some("en")).unwrap();

    assert_eq!(result.language_detected, "en");
    assert_eq!(result.nutrition["Sodium"], "893 g");
}

#[tokio::test]
async fn test_unsupported_language_falls_back_to_english_names() {
    let ctx = common::load_context().await;
    let result = get_nutrition_for_recipe(&ctx, "Sugar Syrup", Some("german")).unwrap();

    assert_eq!(result.language_detected, "german");
    assert_eq!(result.nutrition["Calories"], "109.91 kcal");
}

#[tokio::test]
async fn test_missing_english_ingredients_is_schema_error() {
    let ctx = common::load_context().await;
    let error = get_nutrition_for_recipe(&ctx, "அவல் பாயசம்", None).unwrap_err();
    assert_eq!(error.code, ErrorCode::SchemaMissing);
}

#[tokio::test]
async fn test_unknown_recipe_not_found() {
    let ctx = common::load_context().await;
    let error = get_nutrition_for_recipe(&ctx, "Paella", Some("ta")).unwrap_err();
    assert_eq!(error.code, ErrorCode::RecipeNotFound);
}
