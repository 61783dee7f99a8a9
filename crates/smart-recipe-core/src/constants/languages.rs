// ABOUTME: Language codes and recipe dataset column naming conventions
// ABOUTME: Maps localized recipe-name columns to language codes used by column suffixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Canonical English language code
pub const ENGLISH: &str = "en";

/// Localized recipe-name columns in search order, with the language code they imply
///
/// The order is significant: inside one sheet, a recipe is searched in these
/// columns first and only then in the English name columns.
pub const LOCALIZED_NAME_COLUMNS: &[(&str, &str)] = &[
    ("TamilName", "ta"),
    ("tamilname", "ta"),
    ("hindiName", "hn"),
    ("malayalamName", "kl"),
    ("kannadaName", "kn"),
    ("teluguName", "te"),
    ("frenchName", "french"),
    ("spanishName", "spanish"),
    ("germanName", "german"),
];

/// English recipe-name columns, searched after the localized ones
pub const ENGLISH_NAME_COLUMNS: &[&str] = &["name", "Name"];

/// Prefix of the per-language ingredient block columns (`ingredients_<lang>`)
pub const INGREDIENTS_PREFIX: &str = "ingredients_";

/// Prefix of the per-language instruction text columns (`instructions_<lang>`)
pub const INSTRUCTIONS_PREFIX: &str = "instructions_";

/// Accepted cooking-time column names (compared lower-cased)
pub const COOKING_TIME_COLUMNS: &[&str] = &["cooking", "cookingtime", "cooking_time", "cook_time"];

/// Accepted base-servings column names (compared lower-cased)
pub const SERVINGS_COLUMNS: &[&str] = &["servings", "serves", "base_servings"];

/// Column holding the canonical English name in the translation table
pub const TRANSLATION_ENGLISH_COLUMN: &str = "en";

/// Column holding the scale type in the translation table
pub const TRANSLATION_SCALE_TYPE_COLUMN: &str = "scale_type";
