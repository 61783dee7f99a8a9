// ABOUTME: Reference dataset loading into an immutable, shareable context
// ABOUTME: Reads recipe, translation, nutrient, and override tables once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Dataset
//!
//! All lookup tables the services need are read once from a
//! [`DatasetSource`] and frozen into a [`ReferenceContext`]. Callers share the
//! context behind an `Arc`; nothing in it is mutated after load.
//!
//! Only the recipe workbook is required. Missing translation, nutrient, or
//! override tables degrade to empty or built-in defaults with a warning.

/// Cell conversion helpers
pub mod cells;
/// Recipe sheets, schema discovery, and name index
pub mod recipes;
/// Table sources (directory and in-memory)
pub mod source;
/// Local to English ingredient names
pub mod translation;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;
use smart_recipe_core::models::{FoodNutrientRow, FoodRow, NutrientDefinitionRow};
use smart_recipe_intelligence::{
    CookTimeScaler, CoreNameOverrides, InstructionRewriter, NutrientNameTable, NutrientReference,
    NutritionMatcher, NutritionOverrides, ScaleTypeResolver, ScalingConfig,
};
use tracing::{info, warn};

use crate::errors::{config_error, AppError, AppResult};
pub use recipes::{RecipeIndex, RecipeMatch, RecipeSheet, RecipeWorkbook, SheetSchema};
pub use source::{DatasetSource, DirectorySource, MemorySource};
pub use translation::TranslationTable;

/// Table names inside a dataset source
pub mod tables {
    /// Recipe workbook
    pub const RECIPES: &str = "recipes";
    /// Ingredient translations with scale types
    pub const INGREDIENTS_TRANSLATION: &str = "ingredients_translation";
    /// Reference foods
    pub const FOOD: &str = "food";
    /// Nutrient definitions
    pub const NUTRIENT: &str = "nutrient";
    /// Per-food nutrient amounts
    pub const FOOD_NUTRIENT: &str = "food_nutrient";
    /// Extra nutrition name overrides
    pub const NUTRITION_OVERRIDES: &str = "nutrition_overrides";
    /// Extra core-name overrides
    pub const CORE_NAME_OVERRIDES: &str = "core_name_overrides";
}

/// Immutable reference data shared by every request
#[derive(Debug)]
pub struct ReferenceContext {
    recipes: RecipeIndex,
    translations: TranslationTable,
    scale_types: ScaleTypeResolver,
    nutrients: NutrientReference,
    nutrition_overrides: NutritionOverrides,
    nutrient_names: NutrientNameTable,
    rewriter: InstructionRewriter,
    cook_time: CookTimeScaler,
    config: ScalingConfig,
}

impl ReferenceContext {
    /// Load every table from `source`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `config` fails validation, `DatasetLoad`
    /// when the recipe workbook is missing or a table cannot be read, and
    /// `SerializationError` when a table does not match its expected shape
    pub async fn load(source: &dyn DatasetSource, config: ScalingConfig) -> AppResult<Self> {
        config.validate().map_err(config_error)?;
        let location = source.describe();
        info!(source = %location, "Loading reference dataset");

        let (
            workbook,
            translation_rows,
            foods,
            nutrients,
            food_nutrients,
            nutrition_extra,
            core_extra,
        ) = tokio::try_join!(
            read_table::<RecipeWorkbook>(source, tables::RECIPES),
            read_table::<Vec<cells::Row>>(source, tables::INGREDIENTS_TRANSLATION),
            read_table::<Vec<FoodRow>>(source, tables::FOOD),
            read_table::<Vec<NutrientDefinitionRow>>(source, tables::NUTRIENT),
            read_table::<Vec<FoodNutrientRow>>(source, tables::FOOD_NUTRIENT),
            read_table::<Value>(source, tables::NUTRITION_OVERRIDES),
            read_table::<Value>(source, tables::CORE_NAME_OVERRIDES),
        )?;

        let workbook = workbook.ok_or_else(|| {
            AppError::dataset_load(&location, format!("table '{}' not found", tables::RECIPES))
        })?;
        let recipes = RecipeIndex::build(&workbook);

        let translations = translation_rows.map_or_else(
            || {
                warn!(
                    table = tables::INGREDIENTS_TRANSLATION,
                    "Table missing, every ingredient scales linearly"
                );
                TranslationTable::default()
            },
            |rows| TranslationTable::from_rows(&rows),
        );
        let scale_types =
            ScaleTypeResolver::from_translations(translations.entries(), config.scale_type_cutoff);

        let nutrients = match (foods, nutrients, food_nutrients) {
            (Some(foods), Some(nutrients), Some(food_nutrients)) => {
                NutrientReference::build(&foods, &nutrients, &food_nutrients)
            }
            _ => {
                warn!("Nutrient reference tables incomplete, nutrition results will be empty");
                NutrientReference::default()
            }
        };

        let nutrition_overrides = NutritionOverrides::default()
            .with_entries(nutrition_extra.as_ref().map(cells::string_pairs).unwrap_or_default());
        let core_names = CoreNameOverrides::default()
            .with_entries(core_extra.as_ref().map(cells::string_pairs).unwrap_or_default());

        info!(
            recipes = recipes.len(),
            translations = translations.len(),
            scale_types = scale_types.len(),
            foods = nutrients.food_count(),
            nutrition_overrides = nutrition_overrides.len(),
            core_names = core_names.len(),
            "Reference dataset loaded"
        );

        Ok(Self {
            recipes,
            translations,
            scale_types,
            nutrients,
            nutrition_overrides,
            nutrient_names: NutrientNameTable::default(),
            rewriter: InstructionRewriter::new(core_names),
            cook_time: CookTimeScaler::from_config(&config),
            config,
        })
    }

    /// Load from a directory of JSON/YAML tables
    ///
    /// # Errors
    ///
    /// See [`ReferenceContext::load`]
    pub async fn from_directory(
        root: impl Into<PathBuf>,
        config: ScalingConfig,
    ) -> AppResult<Self> {
        Self::load(&DirectorySource::new(root), config).await
    }

    /// Recipe name index
    #[must_use]
    pub const fn recipes(&self) -> &RecipeIndex {
        &self.recipes
    }

    /// Ingredient translations
    #[must_use]
    pub const fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Scale type lookup
    #[must_use]
    pub const fn scale_types(&self) -> &ScaleTypeResolver {
        &self.scale_types
    }

    /// Nutrient display names
    #[must_use]
    pub const fn nutrient_names(&self) -> &NutrientNameTable {
        &self.nutrient_names
    }

    /// Instruction rewriter
    #[must_use]
    pub const fn rewriter(&self) -> &InstructionRewriter {
        &self.rewriter
    }

    /// Cook time scaler
    #[must_use]
    pub const fn cook_time(&self) -> &CookTimeScaler {
        &self.cook_time
    }

    /// Tuning in effect
    #[must_use]
    pub const fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Nutrition matcher over the loaded reference
    #[must_use]
    pub const fn nutrition_matcher(&self) -> NutritionMatcher<'_> {
        NutritionMatcher::new(
            &self.nutrients,
            &self.nutrition_overrides,
            self.config.nutrition_threshold,
        )
    }
}

/// Read and decode an optional table
async fn read_table<T: DeserializeOwned>(
    source: &dyn DatasetSource,
    name: &str,
) -> AppResult<Option<T>> {
    let Some(value) = source.read_table(name).await? else {
        return Ok(None);
    };
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| AppError::serialization(name, e.to_string()).with_source(e))
}
