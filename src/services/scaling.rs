// ABOUTME: Recipe scaling service turning a recipe name and servings into a scaled recipe
// ABOUTME: Runs lookup, parsing, scale-type resolution, rewriting, and cook-time scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smart_recipe_core::models::{
    IngredientView, ParsedIngredient, RecipeRecord, ScaledIngredient, ScaledRecipeResult,
};
use smart_recipe_intelligence::cook_time::original_cook_time;
use smart_recipe_intelligence::rewriter::split_steps;
use smart_recipe_intelligence::{parse_ingredient_block, reconcile_name, scale_ingredient};
use tracing::{debug, info};

use crate::dataset::ReferenceContext;
use crate::errors::{AppError, AppResult};

/// Scale `recipe_name` to `new_servings`
///
/// The recipe is found in any sheet under any of its localized names; the
/// language of the matching column drives which ingredient and instruction
/// texts are used, with English as fallback.
///
/// # Errors
///
/// - `InvalidInput` when `new_servings` is not positive
/// - `RecipeNotFound` when no sheet has a recipe of that name
/// - `SchemaMissing` when the ingredient, instruction, or cooking-time column
///   is absent for the detected language and English
pub fn scale_recipe(
    ctx: &ReferenceContext,
    recipe_name: &str,
    new_servings: i64,
) -> AppResult<ScaledRecipeResult> {
    let new_servings = u32::try_from(new_servings)
        .ok()
        .filter(|servings| *servings > 0)
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "servings must be a positive integer, got {new_servings}"
            ))
        })?;

    let found = ctx
        .recipes()
        .find(recipe_name)
        .ok_or_else(|| AppError::recipe_not_found(recipe_name.trim()))?;
    let record = found.record;
    let language = found.language;

    let (ingredient_language, ingredient_text) = record
        .ingredients_for(language)
        .ok_or_else(|| AppError::schema_missing(&record.sheet, "ingredients", language))?;
    let (_, instruction_text) = record
        .instructions_for(language)
        .ok_or_else(|| AppError::schema_missing(&record.sheet, "instructions", language))?;
    let raw_time = record
        .cooking_time
        .as_deref()
        .ok_or_else(|| AppError::schema_missing(&record.sheet, "cooking_time", language))?;

    let base_servings = record.base_servings.unwrap_or(ctx.config().base_servings);
    info!(
        recipe = recipe_name,
        sheet = %record.sheet,
        language,
        base_servings,
        new_servings,
        "Scaling recipe"
    );

    let scaled = scale_ingredients(
        ctx,
        ingredient_language,
        &parse_ingredient_block(ingredient_text),
        base_servings,
        new_servings,
    );
    let shown: Vec<ParsedIngredient> = scaled.iter().map(|item| item.ingredient.clone()).collect();
    let steps = ctx.rewriter().rewrite(&split_steps(instruction_text), &shown);

    let original_time = original_cook_time(raw_time);
    let adjusted_time = ctx.cook_time().scale(raw_time, base_servings, new_servings);

    Ok(ScaledRecipeResult {
        recipe_title: title(record, language, recipe_name),
        base_servings,
        new_servings,
        original_time,
        adjusted_time,
        original_time_display: original_time.display(),
        adjusted_time_display: adjusted_time.display(),
        ingredients: scaled.iter().map(IngredientView::from).collect(),
        steps,
        language_detected: language.to_owned(),
    })
}

/// Resolve, scale, and rename every parsed ingredient
fn scale_ingredients(
    ctx: &ReferenceContext,
    language: &str,
    parsed: &[ParsedIngredient],
    base_servings: u32,
    new_servings: u32,
) -> Vec<ScaledIngredient> {
    parsed
        .iter()
        .map(|ingredient| {
            let local_name = ingredient.name();
            let english = ctx
                .translations()
                .to_english(language, local_name)
                .unwrap_or(local_name);
            let resolution = ctx.scale_types().resolve(english);
            debug!(
                ingredient = local_name,
                english,
                scale_type = %resolution.scale_type,
                kind = ?resolution.kind,
                "Resolved scale type"
            );

            let mut scaled =
                scale_ingredient(ingredient, resolution.scale_type, base_servings, new_servings);
            scaled.ingredient = scaled
                .ingredient
                .with_name(reconcile_name(local_name, english));
            scaled
        })
        .collect()
}

fn title(record: &RecipeRecord, language: &str, requested: &str) -> String {
    record
        .title_for(language)
        .map_or_else(|| requested.trim().to_owned(), str::to_owned)
}
