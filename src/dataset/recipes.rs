// ABOUTME: Recipe sheet schema mapping and the recipe-name lookup index
// ABOUTME: Maps localized columns to language codes once per load and indexes names in search order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Lookup
//!
//! Sheets are searched in dataset order. Inside a sheet the localized name
//! columns are searched first, in a fixed language order, then the English
//! `name`/`Name` columns. Names compare trimmed and case-insensitively.
//!
//! The whole search order is folded into one hash index at load time: the
//! first row to claim a name keeps it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Deserialize;
use smart_recipe_core::constants::languages::{
    COOKING_TIME_COLUMNS, ENGLISH, ENGLISH_NAME_COLUMNS, INGREDIENTS_PREFIX, INSTRUCTIONS_PREFIX,
    LOCALIZED_NAME_COLUMNS, SERVINGS_COLUMNS,
};
use smart_recipe_core::models::RecipeRecord;
use tracing::debug;

use super::cells::{cell_positive_u32, row_text, Row};

/// One cuisine sheet as stored in the dataset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeSheet {
    /// Sheet name
    pub name: String,
    /// Rows keyed by column name
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// All cuisine sheets, in dataset order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeWorkbook {
    /// Sheets in search order
    #[serde(default)]
    pub sheets: Vec<RecipeSheet>,
}

/// Column → language mapping discovered for one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSchema {
    /// Name columns in search order with their language code
    pub name_columns: Vec<(String, String)>,
    /// Ingredient columns keyed by language code
    pub ingredient_columns: BTreeMap<String, String>,
    /// Instruction columns keyed by language code
    pub instruction_columns: BTreeMap<String, String>,
    /// Cooking-time column, if any
    pub cooking_time_column: Option<String>,
    /// Base-servings column, if any
    pub servings_column: Option<String>,
}

impl SheetSchema {
    /// Discover the schema from the union of column names across rows
    #[must_use]
    pub fn discover(rows: &[Row]) -> Self {
        let columns: BTreeSet<&str> = rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();

        let name_columns = LOCALIZED_NAME_COLUMNS
            .iter()
            .copied()
            .chain(ENGLISH_NAME_COLUMNS.iter().map(|column| (*column, ENGLISH)))
            .filter(|(column, _)| columns.contains(column))
            .map(|(column, language)| (column.to_owned(), language.to_owned()))
            .collect();

        Self {
            name_columns,
            ingredient_columns: language_columns(&columns, INGREDIENTS_PREFIX, "ingredient"),
            instruction_columns: language_columns(&columns, INSTRUCTIONS_PREFIX, "instruction"),
            cooking_time_column: find_column(&columns, COOKING_TIME_COLUMNS),
            servings_column: find_column(&columns, SERVINGS_COLUMNS),
        }
    }

    /// Map one row onto a record
    #[must_use]
    pub fn record(&self, sheet: &str, row: &Row) -> RecipeRecord {
        let mut names = BTreeMap::new();
        for (column, language) in &self.name_columns {
            if let Some(name) = row_text(row, column) {
                names.entry(language.clone()).or_insert(name);
            }
        }

        let texts = |columns: &BTreeMap<String, String>| -> BTreeMap<String, String> {
            columns
                .iter()
                .map(|(language, column)| {
                    (language.clone(), row_text(row, column).unwrap_or_default())
                })
                .collect()
        };

        RecipeRecord {
            sheet: sheet.to_owned(),
            names,
            ingredients: texts(&self.ingredient_columns),
            instructions: texts(&self.instruction_columns),
            cooking_time: self
                .cooking_time_column
                .as_ref()
                .map(|column| row_text(row, column).unwrap_or_default()),
            base_servings: self
                .servings_column
                .as_ref()
                .and_then(|column| row.get(column))
                .and_then(cell_positive_u32),
        }
    }
}

/// `<prefix><lang>` columns, plus a `... <stem> ... english ...` column as English
fn language_columns(columns: &BTreeSet<&str>, prefix: &str, stem: &str) -> BTreeMap<String, String> {
    let mut mapped = BTreeMap::new();
    for column in columns {
        let lower = column.to_lowercase();
        if let Some(language) = lower.strip_prefix(prefix).filter(|lang| !lang.is_empty()) {
            mapped
                .entry(language.to_owned())
                .or_insert_with(|| (*column).to_owned());
        }
    }
    if !mapped.contains_key(ENGLISH) {
        if let Some(column) = columns.iter().find(|column| {
            let lower = column.to_lowercase();
            lower.contains(stem) && lower.contains("english")
        }) {
            mapped.insert(ENGLISH.to_owned(), (*column).to_owned());
        }
    }
    mapped
}

fn find_column(columns: &BTreeSet<&str>, accepted: &[&str]) -> Option<String> {
    columns
        .iter()
        .find(|column| accepted.contains(&column.to_lowercase().as_str()))
        .map(|column| (*column).to_owned())
}

/// Where a recipe name was found
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecipeHit {
    record: usize,
    language: String,
}

/// A successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeMatch<'a> {
    /// Matched recipe row
    pub record: &'a RecipeRecord,
    /// Language code of the column the name was found in
    pub language: &'a str,
}

/// Immutable recipe records with a name index
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex {
    records: Vec<RecipeRecord>,
    by_name: HashMap<String, RecipeHit>,
}

impl RecipeIndex {
    /// Map every sheet and index recipe names in search order
    #[must_use]
    pub fn build(workbook: &RecipeWorkbook) -> Self {
        let mut records = Vec::new();
        let mut by_name = HashMap::new();

        for sheet in &workbook.sheets {
            let schema = SheetSchema::discover(&sheet.rows);
            debug!(
                sheet = %sheet.name,
                rows = sheet.rows.len(),
                name_columns = schema.name_columns.len(),
                ingredient_languages = ?schema.ingredient_columns.keys().collect::<Vec<_>>(),
                "Mapped recipe sheet"
            );
            let first = records.len();
            records.extend(sheet.rows.iter().map(|row| schema.record(&sheet.name, row)));

            for (column, language) in &schema.name_columns {
                for (offset, row) in sheet.rows.iter().enumerate() {
                    let Some(name) = row_text(row, column) else {
                        continue;
                    };
                    by_name.entry(name.to_lowercase()).or_insert_with(|| RecipeHit {
                        record: first + offset,
                        language: language.clone(),
                    });
                }
            }
        }

        Self { records, by_name }
    }

    /// Find a recipe by name in any sheet and language
    #[must_use]
    pub fn find(&self, name: &str) -> Option<RecipeMatch<'_>> {
        let hit = self.by_name.get(&name.trim().to_lowercase())?;
        Some(RecipeMatch {
            record: self.records.get(hit.record)?,
            language: &hit.language,
        })
    }

    /// Number of recipe rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no recipe rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workbook(value: serde_json::Value) -> RecipeWorkbook {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_schema_discovery() {
        let rows: Vec<Row> = serde_json::from_value(json!([{
            "name": "Pongal",
            "TamilName": "பொங்கல்",
            "Ingredients_TA": "1 கப் அரிசி",
            "ingredients_en": "1 cup rice",
            "Instructions (English)": "Cook rice.",
            "CookingTime": 20,
            "Servings": 4
        }]))
        .unwrap();
        let schema = SheetSchema::discover(&rows);
        assert_eq!(schema.name_columns[0], ("TamilName".to_owned(), "ta".to_owned()));
        assert_eq!(schema.ingredient_columns.get("ta").map(String::as_str), Some("Ingredients_TA"));
        assert_eq!(
            schema.instruction_columns.get("en").map(String::as_str),
            Some("Instructions (English)")
        );
        assert_eq!(schema.cooking_time_column.as_deref(), Some("CookingTime"));

        let record = schema.record("South Indian", &rows[0]);
        assert_eq!(record.cooking_time.as_deref(), Some("20"));
        assert_eq!(record.base_servings, Some(4));
    }

    #[test]
    fn test_localized_columns_searched_before_english() {
        let index = RecipeIndex::build(&workbook(json!({
            "sheets": [{
                "name": "Mixed",
                "rows": [
                    {"name": "Kheer", "hindiName": "Halwa"},
                    {"name": "Halwa", "hindiName": "हलवा"}
                ]
            }]
        })));
        let found = index.find("  HALWA ").unwrap();
        assert_eq!(found.language, "hn");
        assert_eq!(found.record.names.get("en").map(String::as_str), Some("Kheer"));
    }

    #[test]
    fn test_earlier_sheet_wins() {
        let index = RecipeIndex::build(&workbook(json!({
            "sheets": [
                {"name": "North Indian", "rows": [{"name": "Dal"}]},
                {"name": "South Indian", "rows": [{"TamilName": "Dal"}]}
            ]
        })));
        let found = index.find("dal").unwrap();
        assert_eq!(found.record.sheet, "North Indian");
        assert_eq!(found.language, "en");
        assert!(index.find("sambar").is_none());
    }
}
