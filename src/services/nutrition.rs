// ABOUTME: Recipe nutrition service summing focus nutrients over English ingredients
// ABOUTME: Renders totals with display names in the detected or requested language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smart_recipe_core::constants::languages::ENGLISH;
use smart_recipe_core::models::NutritionResult;
use smart_recipe_intelligence::nutrition::render_nutrition;
use smart_recipe_intelligence::parse_ingredient_block;
use tracing::info;

use crate::dataset::ReferenceContext;
use crate::errors::{AppError, AppResult};

/// Total focus nutrients of `recipe_name` at its base servings
///
/// Ingredients always come from the English column. Nutrient display names use
/// `language_override` when given, else the language the recipe was found in.
///
/// # Errors
///
/// - `RecipeNotFound` when no sheet has a recipe of that name
/// - `SchemaMissing` when the recipe has no English ingredient column
pub fn get_nutrition_for_recipe(
    ctx: &ReferenceContext,
    recipe_name: &str,
    language_override: Option<&str>,
) -> AppResult<NutritionResult> {
    let found = ctx
        .recipes()
        .find(recipe_name)
        .ok_or_else(|| AppError::recipe_not_found(recipe_name.trim()))?;
    let record = found.record;

    let ingredient_text = record
        .ingredients
        .get(ENGLISH)
        .ok_or_else(|| AppError::schema_missing(&record.sheet, "ingredients_en", ENGLISH))?;

    let language = language_override
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(found.language);

    let ingredients = parse_ingredient_block(ingredient_text);
    let totals = ctx.nutrition_matcher().aggregate(&ingredients);
    info!(
        recipe = recipe_name,
        language,
        ingredients = ingredients.len(),
        nutrients = totals.len(),
        "Computed recipe nutrition"
    );

    Ok(NutritionResult {
        nutrition: render_nutrition(&totals, ctx.nutrient_names(), language),
        language_detected: language.to_owned(),
    })
}
