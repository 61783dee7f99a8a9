// ABOUTME: Recipe intelligence engine for scaling, nutrition matching, and rewriting
// ABOUTME: Parses ingredient text, scales quantities and cook times, and rewrites instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smart Recipe Intelligence
//!
//! Every algorithm of the scaling engine lives here. Functions are pure and
//! lookup tables are passed in as read-only context objects, so a single loaded
//! reference set can be shared across threads.
//!
//! Pipeline for a scaling request:
//!
//! 1. [`parser`] turns the raw ingredient block into [`ParsedIngredient`]s
//! 2. [`scale_type`] resolves how each ingredient responds to servings
//! 3. [`scaler`] applies the scale, [`reconcile`] picks display names
//! 4. [`rewriter`] injects scaled quantities into the instructions
//! 5. [`cook_time`] adjusts the cooking time
//!
//! [`nutrition`] runs independently over the English ingredient text.
//!
//! [`ParsedIngredient`]: smart_recipe_core::models::ParsedIngredient

/// Scaling configuration and validation
pub mod config;
/// Cooking time scaling and parsing
pub mod cook_time;
/// Nutrient reference matching and aggregation
pub mod nutrition;
/// Ingredient block parsing
pub mod parser;
/// Local/English display-name reconciliation
pub mod reconcile;
/// Instruction rewriting with scaled quantities
pub mod rewriter;
/// Scale type resolution against the reference table
pub mod scale_type;
/// Quantity scaling
pub mod scaler;
/// String similarity scoring for fuzzy lookups
pub mod similarity;
/// Word matching, core names, and noun-phrase chunking
pub mod text_analysis;
/// Unit to gram conversion
pub mod units;

pub use config::{ConfigError, ScalingConfig};
pub use cook_time::CookTimeScaler;
pub use nutrition::{NutrientNameTable, NutrientReference, NutritionMatcher, NutritionOverrides};
pub use parser::{parse_ingredient_block, parse_quantity};
pub use reconcile::reconcile_name;
pub use rewriter::{InjectionStrategy, InstructionRewriter};
pub use scale_type::{MatchKind, ScaleTypeResolution, ScaleTypeResolver};
pub use scaler::{scale_amount, scale_ingredient};
pub use text_analysis::{CoreNameOverrides, HeuristicChunker, NounPhraseExtractor};
