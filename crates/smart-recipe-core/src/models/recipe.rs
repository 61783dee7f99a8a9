// ABOUTME: Recipe row model after schema mapping and the request result shapes
// ABOUTME: RecipeRecord, CookTime, ScaledRecipeResult, and NutritionResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::ScaledIngredient;
use crate::constants::defaults::TIME_NOT_AVAILABLE;
use crate::constants::languages::ENGLISH;

/// One recipe row of a cuisine sheet, with columns already mapped to languages
///
/// Built once when the dataset is loaded. A language missing from
/// `ingredients` or `instructions` means the sheet has no such column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Cuisine sheet the row belongs to
    pub sheet: String,
    /// Recipe names keyed by language code
    pub names: BTreeMap<String, String>,
    /// Raw ingredient blocks keyed by language code
    pub ingredients: BTreeMap<String, String>,
    /// Raw instruction texts keyed by language code
    pub instructions: BTreeMap<String, String>,
    /// Cooking time cell as text; `None` when the sheet has no cooking-time column
    pub cooking_time: Option<String>,
    /// Servings the recipe is authored for, when the sheet records it
    pub base_servings: Option<u32>,
}

impl RecipeRecord {
    /// Ingredient block for `language`, falling back to English
    ///
    /// Returns the language actually used alongside the text.
    #[must_use]
    pub fn ingredients_for(&self, language: &str) -> Option<(&str, &str)> {
        localized(&self.ingredients, language)
    }

    /// Instruction text for `language`, falling back to English
    #[must_use]
    pub fn instructions_for(&self, language: &str) -> Option<(&str, &str)> {
        localized(&self.instructions, language)
    }

    /// Display title in `language`, falling back to English then any name
    #[must_use]
    pub fn title_for(&self, language: &str) -> Option<&str> {
        self.names
            .get(language)
            .or_else(|| self.names.get(ENGLISH))
            .or_else(|| self.names.values().next())
            .map(String::as_str)
    }
}

fn localized<'a>(
    columns: &'a BTreeMap<String, String>,
    language: &str,
) -> Option<(&'a str, &'a str)> {
    columns
        .get_key_value(language)
        .or_else(|| columns.get_key_value(ENGLISH))
        .map(|(lang, text)| (lang.as_str(), text.as_str()))
}

/// A cooking time in whole minutes, or the not-available sentinel
///
/// Serializes as a JSON number or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookTime {
    /// Rounded minutes
    Minutes(u32),
    /// The source value could not be interpreted as a time
    NotAvailable,
}

impl CookTime {
    /// Minutes, if available
    #[must_use]
    pub const fn minutes(self) -> Option<u32> {
        match self {
            Self::Minutes(minutes) => Some(minutes),
            Self::NotAvailable => None,
        }
    }

    /// Human rendering such as `1 hr 5 mins` or `45 mins`
    #[must_use]
    pub fn display(self) -> String {
        let Self::Minutes(total) = self else {
            return TIME_NOT_AVAILABLE.to_owned();
        };
        let (hours, minutes) = (total / 60, total % 60);
        let mut parts = Vec::with_capacity(2);
        if hours > 0 {
            parts.push(format!("{hours} hr{}", if hours > 1 { "s" } else { "" }));
        }
        if minutes > 0 || hours == 0 {
            parts.push(format!("{minutes} min{}", if minutes == 1 { "" } else { "s" }));
        }
        parts.join(" ")
    }
}

impl fmt::Display for CookTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(minutes) => write!(f, "{minutes}"),
            Self::NotAvailable => f.write_str(TIME_NOT_AVAILABLE),
        }
    }
}

impl Serialize for CookTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Minutes(minutes) => serializer.serialize_u32(*minutes),
            Self::NotAvailable => serializer.serialize_str(TIME_NOT_AVAILABLE),
        }
    }
}

/// Ingredient as presented in a scaled recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientView {
    /// Reconciled display name
    pub name: String,
    /// Rendered scaled amount
    pub formatted_amount: String,
    /// Unit token as written
    pub unit: String,
}

impl From<&ScaledIngredient> for IngredientView {
    fn from(scaled: &ScaledIngredient) -> Self {
        Self {
            name: scaled.ingredient.name().to_owned(),
            formatted_amount: scaled.ingredient.formatted_amount().to_owned(),
            unit: scaled.ingredient.unit().to_owned(),
        }
    }
}

/// Result of scaling a recipe to a new serving count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipeResult {
    /// Recipe title in the detected language
    pub recipe_title: String,
    /// Servings the recipe is authored for
    pub base_servings: u32,
    /// Requested servings
    pub new_servings: u32,
    /// Original cooking time
    pub original_time: CookTime,
    /// Scaled cooking time
    pub adjusted_time: CookTime,
    /// Human rendering of `original_time`
    pub original_time_display: String,
    /// Human rendering of `adjusted_time`
    pub adjusted_time_display: String,
    /// Scaled ingredients in input order
    pub ingredients: Vec<IngredientView>,
    /// Rewritten instruction steps
    pub steps: Vec<String>,
    /// Language code the recipe name was found in
    pub language_detected: String,
}

/// Aggregated nutrition facts for a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    /// Translated display name → `"<value> <unit>"`
    pub nutrition: BTreeMap<String, String>,
    /// Language code used for the display names
    pub language_detected: String,
}
