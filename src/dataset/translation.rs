// ABOUTME: Ingredient translation table mapping local names to English canonical names
// ABOUTME: Rows carry an English name, an optional scale type, and one column per language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use smart_recipe_core::constants::languages::{
    ENGLISH, TRANSLATION_ENGLISH_COLUMN, TRANSLATION_SCALE_TYPE_COLUMN,
};
use smart_recipe_core::models::{ScaleType, TranslationEntry};
use tracing::debug;

use super::cells::{row_text, Row};

/// Local-name lookup keyed by language and lower-cased local name
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
    by_language: HashMap<(String, String), usize>,
    by_name: HashMap<String, usize>,
}

impl TranslationTable {
    /// Build from translation rows
    ///
    /// Every row yields an English entry plus one entry per non-empty
    /// language column. Rows without an English name are skipped.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut entries = Vec::new();
        for row in rows {
            let Some(english) = row_text(row, TRANSLATION_ENGLISH_COLUMN) else {
                continue;
            };
            let scale_type = row_text(row, TRANSLATION_SCALE_TYPE_COLUMN)
                .and_then(|raw| ScaleType::parse(&raw));

            entries.push(TranslationEntry {
                language: ENGLISH.to_owned(),
                local_name: english.clone(),
                english_name: english.clone(),
                scale_type,
            });
            for column in row.keys() {
                if column == TRANSLATION_ENGLISH_COLUMN || column == TRANSLATION_SCALE_TYPE_COLUMN {
                    continue;
                }
                if let Some(local_name) = row_text(row, column) {
                    entries.push(TranslationEntry {
                        language: column.to_lowercase(),
                        local_name,
                        english_name: english.clone(),
                        scale_type,
                    });
                }
            }
        }
        Self::from_entries(entries)
    }

    /// Build from ready entries; the first entry for a key wins
    #[must_use]
    pub fn from_entries(entries: Vec<TranslationEntry>) -> Self {
        let mut by_language = HashMap::new();
        let mut by_name = HashMap::new();
        for (position, entry) in entries.iter().enumerate() {
            let key = entry.local_name.trim().to_lowercase();
            by_language
                .entry((entry.language.clone(), key.clone()))
                .or_insert(position);
            by_name.entry(key).or_insert(position);
        }
        debug!(entries = entries.len(), "Built translation table");
        Self {
            entries,
            by_language,
            by_name,
        }
    }

    /// English canonical name of `local_name`
    ///
    /// Entries of `language` are tried first, then any language.
    #[must_use]
    pub fn to_english(&self, language: &str, local_name: &str) -> Option<&str> {
        let key = local_name.trim().to_lowercase();
        self.by_language
            .get(&(language.to_owned(), key.clone()))
            .or_else(|| self.by_name.get(&key))
            .and_then(|position| self.entries.get(*position))
            .map(|entry| entry.english_name.as_str())
    }

    /// All entries in table order
    #[must_use]
    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> TranslationTable {
        let rows: Vec<Row> = serde_json::from_value(json!([
            {"en": "rice", "scale_type": "LINEAR", "ta": "அரிசி", "hn": "चावल"},
            {"en": "salt", "scale_type": "log", "ta": "உப்பு"},
            {"en": "", "ta": "ignored"},
            {"en": "chilli", "ta": "மிளகாய்", "kn": "Rice"}
        ]))
        .unwrap();
        TranslationTable::from_rows(&rows)
    }

    #[test]
    fn test_english_entries_always_present() {
        let table = table();
        assert_eq!(table.to_english("en", "Rice"), Some("rice"));
        let salt = table
            .entries()
            .iter()
            .find(|entry| entry.language == "en" && entry.local_name == "salt")
            .unwrap();
        assert_eq!(salt.scale_type, Some(ScaleType::Log));
    }

    #[test]
    fn test_language_specific_lookup_first() {
        let table = table();
        assert_eq!(table.to_english("ta", "அரிசி"), Some("rice"));
        assert_eq!(table.to_english("kn", "rice"), Some("chilli"));
        assert_eq!(table.to_english("te", "rice"), Some("rice"));
        assert_eq!(table.to_english("ta", "ignored"), None);
    }
}
