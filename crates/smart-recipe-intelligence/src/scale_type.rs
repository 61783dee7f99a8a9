// ABOUTME: Resolves how an ingredient scales by matching its name against a reference table
// ABOUTME: Exact, substring, token-overlap, then fuzzy matching with a LINEAR default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Scale Type Resolution
//!
//! Matching order, first hit wins:
//!
//! 1. exact case-insensitive match
//! 2. substring either way, longest key wins
//! 3. shared word, first key in table order
//! 4. fuzzy similarity at or above the cutoff
//! 5. [`ScaleType::Linear`]

use std::collections::HashMap;

use serde::Serialize;
use smart_recipe_core::constants::defaults::SCALE_TYPE_SIMILARITY_CUTOFF;
use smart_recipe_core::errors::Fallback;
use smart_recipe_core::models::{ScaleType, TranslationEntry};
use tracing::debug;

use crate::similarity::best_match;

/// Which rule produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Key equals the name ignoring case
    Exact,
    /// Key contains the name or the name contains the key
    Substring,
    /// Key shares a word with the name
    TokenOverlap,
    /// Key is similar enough to the name
    Fuzzy,
    /// Nothing matched
    Default,
}

/// Outcome of resolving one name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleTypeResolution {
    /// Resolved scale type
    pub scale_type: ScaleType,
    /// Rule that matched
    pub kind: MatchKind,
    /// Table key that matched, if any
    pub matched_key: Option<String>,
}

impl ScaleTypeResolution {
    fn matched(scale_type: ScaleType, kind: MatchKind, key: &str) -> Self {
        Self {
            scale_type,
            kind,
            matched_key: Some(key.to_owned()),
        }
    }

    fn unresolved() -> Self {
        Self {
            scale_type: ScaleType::default(),
            kind: MatchKind::Default,
            matched_key: None,
        }
    }
}

/// Read-only table of canonical names and their scale types
#[derive(Debug, Clone)]
pub struct ScaleTypeResolver {
    keys: Vec<String>,
    scale_types: Vec<ScaleType>,
    exact: HashMap<String, usize>,
    cutoff: f64,
}

impl Default for ScaleTypeResolver {
    fn default() -> Self {
        Self::new(Vec::<(String, ScaleType)>::new(), SCALE_TYPE_SIMILARITY_CUTOFF)
    }
}

impl ScaleTypeResolver {
    /// Build a resolver from `(name, scale type)` pairs in table order
    ///
    /// Keys are compared lower-cased; the first occurrence of a key wins.
    #[must_use]
    pub fn new<I, S>(entries: I, cutoff: f64) -> Self
    where
        I: IntoIterator<Item = (S, ScaleType)>,
        S: AsRef<str>,
    {
        let mut keys = Vec::new();
        let mut scale_types = Vec::new();
        let mut exact = HashMap::new();
        for (name, scale_type) in entries {
            let key = name.as_ref().trim().to_lowercase();
            if key.is_empty() || exact.contains_key(&key) {
                continue;
            }
            exact.insert(key.clone(), keys.len());
            keys.push(key);
            scale_types.push(scale_type);
        }
        Self {
            keys,
            scale_types,
            exact,
            cutoff,
        }
    }

    /// Build a resolver from the English names of the translation table
    ///
    /// Entries without a scale type are skipped.
    #[must_use]
    pub fn from_translations(entries: &[TranslationEntry], cutoff: f64) -> Self {
        Self::new(
            entries.iter().filter_map(|entry| {
                entry
                    .scale_type
                    .map(|scale_type| (entry.english_name.as_str(), scale_type))
            }),
            cutoff,
        )
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the table has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolve `name` and report how it matched
    #[must_use]
    pub fn resolve(&self, name: &str) -> ScaleTypeResolution {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return ScaleTypeResolution::unresolved();
        }

        let resolution = self
            .exact_match(&needle)
            .or_else(|| self.substring_match(&needle))
            .or_else(|| self.token_overlap_match(&needle))
            .or_else(|| self.fuzzy_match(&needle));

        resolution.unwrap_or_else(|| {
            let fallback = Fallback::UnresolvedScaleType {
                name: name.to_owned(),
            };
            debug!(kind = fallback.kind(), %fallback, "Scale type fallback");
            ScaleTypeResolution::unresolved()
        })
    }

    fn at(&self, index: usize, kind: MatchKind) -> ScaleTypeResolution {
        ScaleTypeResolution::matched(self.scale_types[index], kind, &self.keys[index])
    }

    fn exact_match(&self, needle: &str) -> Option<ScaleTypeResolution> {
        self.exact
            .get(needle)
            .map(|&index| self.at(index, MatchKind::Exact))
    }

    fn substring_match(&self, needle: &str) -> Option<ScaleTypeResolution> {
        let mut best: Option<usize> = None;
        for (index, key) in self.keys.iter().enumerate() {
            if !(key.contains(needle) || needle.contains(key.as_str())) {
                continue;
            }
            if best.is_none_or(|current| key.chars().count() > self.keys[current].chars().count())
            {
                best = Some(index);
            }
        }
        best.map(|index| self.at(index, MatchKind::Substring))
    }

    fn token_overlap_match(&self, needle: &str) -> Option<ScaleTypeResolution> {
        let needle_tokens = tokens(needle);
        if needle_tokens.is_empty() {
            return None;
        }
        self.keys
            .iter()
            .position(|key| tokens(key).iter().any(|token| needle_tokens.contains(token)))
            .map(|index| self.at(index, MatchKind::TokenOverlap))
    }

    fn fuzzy_match(&self, needle: &str) -> Option<ScaleTypeResolution> {
        let candidate = best_match(needle, &self.keys)?;
        (candidate.score >= self.cutoff).then(|| self.at(candidate.index, MatchKind::Fuzzy))
    }
}

/// Words of at least two characters, split on whitespace and punctuation
fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|token| token.chars().count() > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ScaleTypeResolver {
        ScaleTypeResolver::new(
            [
                ("Salt", ScaleType::Log),
                ("basmati rice", ScaleType::Linear),
                ("bay leaf", ScaleType::Fixed),
                ("rice", ScaleType::Linear),
            ],
            0.75,
        )
    }

    #[test]
    fn test_exact_match_wins() {
        let resolution = resolver().resolve("SALT");
        assert_eq!(resolution.kind, MatchKind::Exact);
        assert_eq!(resolution.scale_type, ScaleType::Log);
    }

    #[test]
    fn test_substring_prefers_longest_key() {
        let resolution = resolver().resolve("aged basmati rice");
        assert_eq!(resolution.kind, MatchKind::Substring);
        assert_eq!(resolution.matched_key.as_deref(), Some("basmati rice"));
    }

    #[test]
    fn test_token_overlap_uses_table_order() {
        let resolution = resolver().resolve("dried leaf");
        assert_eq!(resolution.kind, MatchKind::TokenOverlap);
        assert_eq!(resolution.scale_type, ScaleType::Fixed);
    }

    #[test]
    fn test_fuzzy_and_default() {
        let resolution = resolver().resolve("salat");
        assert_eq!(resolution.kind, MatchKind::Fuzzy);
        assert_eq!(resolution.scale_type, ScaleType::Log);

        let resolution = resolver().resolve("cardamom");
        assert_eq!(resolution.kind, MatchKind::Default);
        assert_eq!(resolution.scale_type, ScaleType::Linear);
    }
}
