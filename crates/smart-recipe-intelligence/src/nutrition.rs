// ABOUTME: Nutrient reference matching and per-recipe aggregation of focus nutrients
// ABOUTME: Normalizes names, applies overrides, fuzzy-matches foods, and scales by grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Matching
//!
//! The reference is the three-table food / nutrient / food-nutrient join,
//! reduced at build time to focus nutrients only. For one ingredient:
//!
//! 1. normalize the name (lower-case, punctuation and stop words removed)
//! 2. consult the override table; `skip` excludes the ingredient
//! 3. fuzzy-match against food descriptions, accepting scores at the threshold
//! 4. among foods sharing that description, take the one with the most focus
//!    nutrient records (first wins a tie, none is a miss)
//! 5. convert the quantity to grams and scale the per-100 g amounts
//!
//! Amounts with the same display alias are summed, so the energy variants
//! collapse into one `Calories` figure.

use std::collections::{BTreeMap, HashMap};

use smart_recipe_core::constants::defaults::NUTRITION_MATCH_THRESHOLD;
use smart_recipe_core::constants::languages::ENGLISH;
use smart_recipe_core::constants::nutrients::{
    display_unit, focus_alias, EXCLUDED_RANK, NUTRIENT_NAME_TRANSLATIONS,
};
use smart_recipe_core::constants::overrides::{
    NUTRITION_OVERRIDES, NUTRITION_STOP_WORDS, SKIP_MARKER,
};
use smart_recipe_core::errors::Fallback;
use smart_recipe_core::models::{
    format_decimal, FoodNutrientRow, FoodRow, NutrientAmounts, NutrientDefinitionRow,
    NutrientRecord, ParsedIngredient,
};
use tracing::debug;

use crate::parser::DEFAULT_AMOUNT;
use crate::similarity::best_match_parallel;
use crate::units::convert_to_grams;

/// Focus nutrient records joined from the reference tables
#[derive(Debug, Clone, Default)]
pub struct NutrientReference {
    descriptions: Vec<String>,
    foods_by_description: Vec<Vec<i64>>,
    records_by_food: HashMap<i64, Vec<NutrientRecord>>,
}

impl NutrientReference {
    /// Join the three reference tables, keeping focus nutrients only
    ///
    /// Nutrient definitions with the excluded rank are dropped, as are
    /// food-nutrient rows without an amount.
    #[must_use]
    pub fn build(
        foods: &[FoodRow],
        nutrients: &[NutrientDefinitionRow],
        food_nutrients: &[FoodNutrientRow],
    ) -> Self {
        let focus: HashMap<i64, (&str, &str)> = nutrients
            .iter()
            .filter(|nutrient| nutrient.rank.is_none_or(|rank| rank as i64 != EXCLUDED_RANK))
            .filter_map(|nutrient| {
                focus_alias(&nutrient.name).map(|alias| (nutrient.id, (nutrient.name.as_str(), alias)))
            })
            .collect();

        let mut records_by_food: HashMap<i64, Vec<NutrientRecord>> = HashMap::new();
        for row in food_nutrients {
            let (Some(amount), Some((name, alias))) = (row.amount, focus.get(&row.nutrient_id))
            else {
                continue;
            };
            records_by_food
                .entry(row.fdc_id)
                .or_default()
                .push(NutrientRecord {
                    food_id: row.fdc_id,
                    nutrient_name: (*name).to_owned(),
                    alias: (*alias).to_owned(),
                    amount_per_100g: amount,
                });
        }

        let mut descriptions = Vec::new();
        let mut foods_by_description: Vec<Vec<i64>> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for food in foods {
            let description = normalize_text(&food.description);
            if description.is_empty() {
                continue;
            }
            let position = *positions.entry(description.clone()).or_insert_with(|| {
                descriptions.push(description);
                foods_by_description.push(Vec::new());
                descriptions.len() - 1
            });
            foods_by_description[position].push(food.fdc_id);
        }

        Self {
            descriptions,
            foods_by_description,
            records_by_food,
        }
    }

    /// Distinct normalized food descriptions
    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    /// Focus nutrient records of one food
    #[must_use]
    pub fn records_for(&self, food_id: i64) -> &[NutrientRecord] {
        self.records_by_food.get(&food_id).map_or(&[], Vec::as_slice)
    }

    /// Number of foods with at least one focus nutrient
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.records_by_food.len()
    }

    /// Food with the most focus nutrient records among those with a description
    fn richest_food(&self, description_index: usize) -> Option<i64> {
        let mut best: Option<(i64, usize)> = None;
        for &food_id in self.foods_by_description.get(description_index)? {
            let count = self.records_for(food_id).len();
            if count > best.map_or(0, |(_, best_count)| best_count) {
                best = Some((food_id, count));
            }
        }
        best.map(|(food_id, _)| food_id)
    }
}

/// What the override table says about an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideAction<'a> {
    /// Exclude the ingredient from nutrition entirely
    Skip,
    /// Match this query instead of the ingredient name
    Query(&'a str),
}

/// Manual ingredient name → reference query overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionOverrides {
    entries: HashMap<String, String>,
}

impl Default for NutritionOverrides {
    fn default() -> Self {
        Self::empty().with_entries(
            NUTRITION_OVERRIDES
                .iter()
                .map(|(name, query)| ((*name).to_owned(), (*query).to_owned())),
        )
    }
}

impl NutritionOverrides {
    /// Table with no overrides
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace overrides; keys are normalized like ingredient names
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        for (name, query) in entries {
            let key = normalize_ingredient_name(&name);
            if !key.is_empty() {
                self.entries.insert(key, query.trim().to_lowercase());
            }
        }
        self
    }

    /// Override for an already normalized name
    #[must_use]
    pub fn get(&self, normalized_name: &str) -> Option<OverrideAction<'_>> {
        self.entries.get(normalized_name).map(|query| {
            if query == SKIP_MARKER {
                OverrideAction::Skip
            } else {
                OverrideAction::Query(query)
            }
        })
    }

    /// Number of overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no overrides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of matching one ingredient against the reference
#[derive(Debug, Clone, PartialEq)]
pub enum FoodMatch {
    /// Override table excludes the ingredient
    Skipped,
    /// No confident match, or the match has no focus nutrients
    Miss,
    /// Reference food chosen for the ingredient
    Matched {
        /// Reference food identifier
        food_id: i64,
        /// Normalized description that matched
        description: String,
        /// Similarity of the match
        score: f64,
    },
}

/// Matches ingredient names to reference foods and computes their nutrients
#[derive(Debug, Clone, Copy)]
pub struct NutritionMatcher<'a> {
    reference: &'a NutrientReference,
    overrides: &'a NutritionOverrides,
    threshold: f64,
}

impl<'a> NutritionMatcher<'a> {
    /// Matcher over `reference` with `overrides`, accepting scores at `threshold`
    #[must_use]
    pub const fn new(
        reference: &'a NutrientReference,
        overrides: &'a NutritionOverrides,
        threshold: f64,
    ) -> Self {
        Self {
            reference,
            overrides,
            threshold,
        }
    }

    /// Matcher with the default threshold
    #[must_use]
    pub const fn with_default_threshold(
        reference: &'a NutrientReference,
        overrides: &'a NutritionOverrides,
    ) -> Self {
        Self::new(reference, overrides, NUTRITION_MATCH_THRESHOLD)
    }

    /// Find the reference food for an ingredient name
    #[must_use]
    pub fn match_food(&self, name: &str) -> FoodMatch {
        let normalized = normalize_ingredient_name(name);
        if normalized.is_empty() {
            return FoodMatch::Miss;
        }

        let query = match self.overrides.get(&normalized) {
            Some(OverrideAction::Skip) => return FoodMatch::Skipped,
            Some(OverrideAction::Query(query)) => normalize_text(query),
            None => normalized,
        };

        let Some(candidate) = best_match_parallel(&query, self.reference.descriptions()) else {
            return FoodMatch::Miss;
        };
        if candidate.score < self.threshold {
            return FoodMatch::Miss;
        }

        self.reference
            .richest_food(candidate.index)
            .map_or(FoodMatch::Miss, |food_id| FoodMatch::Matched {
                food_id,
                description: self.reference.descriptions()[candidate.index].clone(),
                score: candidate.score,
            })
    }

    /// Focus nutrient amounts for `quantity` of `unit` of an ingredient
    ///
    /// Returns an empty set when the ingredient is skipped or unmatched.
    #[must_use]
    pub fn nutrition_for(&self, name: &str, quantity: f64, unit: &str) -> NutrientAmounts {
        let mut totals = NutrientAmounts::new();
        match self.match_food(name) {
            FoodMatch::Skipped => {
                debug!(ingredient = name, "Ingredient excluded from nutrition by override");
            }
            FoodMatch::Miss => {
                let fallback = Fallback::NutritionMatchMiss {
                    name: normalize_ingredient_name(name),
                };
                debug!(kind = fallback.kind(), %fallback, "Nutrition fallback");
            }
            FoodMatch::Matched {
                food_id,
                description,
                score,
            } => {
                debug!(ingredient = name, food_id, %description, score, "Matched reference food");
                let scale = convert_to_grams(quantity, unit) / 100.0;
                for record in self.reference.records_for(food_id) {
                    *totals.entry(record.alias.clone()).or_insert(0.0) +=
                        record.amount_per_100g * scale;
                }
            }
        }
        totals
    }

    /// Sum focus nutrients over every ingredient
    #[must_use]
    pub fn aggregate<'i>(
        &self,
        ingredients: impl IntoIterator<Item = &'i ParsedIngredient>,
    ) -> NutrientAmounts {
        let mut totals = NutrientAmounts::new();
        for ingredient in ingredients {
            let quantity = ingredient.amount().unwrap_or(DEFAULT_AMOUNT);
            let amounts = self.nutrition_for(ingredient.name(), quantity, ingredient.unit());
            for (alias, amount) in amounts {
                *totals.entry(alias).or_insert(0.0) += amount;
            }
        }
        totals
    }
}

/// Outcome of a per-language nutrient name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLookup<'a> {
    /// Display name in the requested language
    Translated(&'a str),
    /// The table has no entries for the language
    LanguageUnsupported,
    /// The language is known but the term is missing
    TermNotFound,
}

/// Nutrient display names per language code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutrientNameTable {
    languages: HashMap<String, HashMap<String, String>>,
}

impl Default for NutrientNameTable {
    fn default() -> Self {
        let languages = NUTRIENT_NAME_TRANSLATIONS
            .iter()
            .map(|(language, names)| {
                let names = names
                    .iter()
                    .map(|(term, local)| ((*term).to_owned(), (*local).to_owned()))
                    .collect();
                ((*language).to_owned(), names)
            })
            .collect();
        Self { languages }
    }
}

impl NutrientNameTable {
    /// Look up the display name of `term` in `language`
    #[must_use]
    pub fn lookup<'a>(&'a self, language: &str, term: &'a str) -> NameLookup<'a> {
        if language == ENGLISH {
            return NameLookup::Translated(term);
        }
        let Some(names) = self.languages.get(language) else {
            return NameLookup::LanguageUnsupported;
        };
        names
            .get(term)
            .map_or(NameLookup::TermNotFound, |name| NameLookup::Translated(name.as_str()))
    }

    /// Display name of `term` in `language`, falling back to `term`
    #[must_use]
    pub fn translate(&self, language: &str, term: &str) -> String {
        match self.lookup(language, term) {
            NameLookup::Translated(name) => name.to_owned(),
            NameLookup::LanguageUnsupported => {
                debug!(language, term, "No nutrient names for language, using English");
                term.to_owned()
            }
            NameLookup::TermNotFound => {
                debug!(language, term, "Nutrient name not translated, using English");
                term.to_owned()
            }
        }
    }
}

/// Render totals as `display name → "<value> <unit>"` in `language`
#[must_use]
pub fn render_nutrition(
    totals: &NutrientAmounts,
    names: &NutrientNameTable,
    language: &str,
) -> BTreeMap<String, String> {
    totals
        .iter()
        .map(|(alias, amount)| {
            (
                names.translate(language, alias),
                format!("{} {}", format_decimal(*amount, 2), display_unit(alias)),
            )
        })
        .collect()
}

/// Lower-case, punctuation removed, stop words dropped
///
/// Falls back to the punctuation-free text when every word is a stop word.
#[must_use]
pub fn normalize_ingredient_name(name: &str) -> String {
    let text = normalize_text(name);
    let kept: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !NUTRITION_STOP_WORDS.contains(word))
        .collect();
    if kept.is_empty() {
        text
    } else {
        kept.join(" ")
    }
}

/// Lower-case with punctuation replaced by spaces and whitespace collapsed
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
