// ABOUTME: Chooses the display name for a scaled ingredient from its local and English names
// ABOUTME: Keeps the original when they agree, otherwise merges words without duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

/// Display name for an ingredient known by `original` and `translated`
///
/// When the names are equal ignoring case, or one contains the other, the
/// original is kept. Otherwise the translated words come first, followed by
/// original words not already present, compared case-insensitively.
#[must_use]
pub fn reconcile_name(original: &str, translated: &str) -> String {
    let original = original.trim();
    let translated = translated.trim();
    if translated.is_empty() {
        return original.to_owned();
    }

    let original_lower = original.to_lowercase();
    let translated_lower = translated.to_lowercase();
    if original_lower == translated_lower
        || original_lower.contains(&translated_lower)
        || translated_lower.contains(&original_lower)
    {
        return original.to_owned();
    }

    let mut seen = HashSet::new();
    translated
        .split_whitespace()
        .chain(original.split_whitespace())
        .filter(|word| seen.insert(word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_original_when_names_agree() {
        assert_eq!(reconcile_name("Basmati Rice", "rice"), "Basmati Rice");
        assert_eq!(reconcile_name("Salt", "salt"), "Salt");
    }

    #[test]
    fn test_merges_distinct_words() {
        assert_eq!(reconcile_name("வெல்லம்", "jaggery"), "jaggery வெல்லம்");
        assert_eq!(
            reconcile_name("green moong dal", "Moong Beans"),
            "Moong Beans green dal"
        );
    }
}
