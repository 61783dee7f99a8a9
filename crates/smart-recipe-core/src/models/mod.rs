// ABOUTME: Core data models for recipe scaling and nutrition aggregation
// ABOUTME: Re-exports ingredient, translation, nutrient, and recipe types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by the algorithm crate and the application crate.
//!
//! - `ParsedIngredient`: one structured ingredient line with its rendered amount
//! - `ScaleType` / `ScaledIngredient`: how a quantity responds to serving changes
//! - `TranslationEntry`: local ingredient name mapped to its English canonical name
//! - `NutrientRecord`: a focus nutrient amount per 100 g of a reference food
//! - `RecipeRecord`: one recipe row after schema mapping
//! - `ScaledRecipeResult` / `NutritionResult`: request result shapes

mod ingredient;
mod nutrition;
mod recipe;
mod translation;

pub use ingredient::{format_amount, format_decimal, ParsedIngredient, ScaleType, ScaledIngredient};
pub use nutrition::{
    FoodNutrientRow, FoodRow, NutrientAmounts, NutrientDefinitionRow, NutrientRecord,
};
pub use recipe::{
    CookTime, IngredientView, NutritionResult, RecipeRecord, ScaledRecipeResult,
};
pub use translation::TranslationEntry;
