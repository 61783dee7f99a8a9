// ABOUTME: Word-level text helpers for locating ingredient mentions in instructions
// ABOUTME: Whole-word search, section-header detection, core names, and noun-phrase chunking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::ops::Range;

use regex::{escape, Regex};
use smart_recipe_core::constants::defaults::SECTION_HEADER_WINDOW_CHARS;
use smart_recipe_core::constants::overrides::{CORE_NAME_OVERRIDES, SECTION_HEADER_PHRASES};

/// Words that end a noun phrase in [`HeuristicChunker`]
const CHUNKER_STOP_WORDS: &[&str] = &[
    "a", "add", "adding", "after", "all", "an", "and", "are", "as", "at", "be", "before", "boil",
    "bring", "by", "chop", "combine", "cook", "cover", "cut", "do", "down", "each", "fry", "for",
    "from", "heat", "in", "into", "is", "it", "keep", "let", "minute", "minutes", "mix", "now",
    "of", "off", "on", "once", "or", "over", "place", "pour", "put", "remove", "saute", "serve",
    "some", "stir", "take", "that", "the", "then", "this", "till", "to", "transfer", "until",
    "up", "well", "when", "while", "with",
];

/// Characters treated as part of a word
///
/// Indic script blocks are included whole so vowel signs and viramas never
/// count as word boundaries.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || ('\u{0900}'..='\u{0DFF}').contains(&c)
}

/// Byte range of the first whole-word, case-insensitive mention of `needle`
///
/// Mentions directly after a section header such as "for the" are skipped.
#[must_use]
pub fn find_word(text: &str, needle: &str) -> Option<Range<usize>> {
    let needle = needle.trim();
    if needle.is_empty() {
        return None;
    }
    let pattern = Regex::new(&format!("(?i){}", escape(needle))).ok()?;
    for found in pattern.find_iter(text) {
        let range = found.range();
        if is_whole_word(text, &range) && !preceded_by_section_header(text, range.start) {
            return Some(range);
        }
    }
    None
}

fn is_whole_word(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Whether the text just before `position` ends with a section-header phrase
#[must_use]
pub fn preceded_by_section_header(text: &str, position: usize) -> bool {
    let prefix = &text[..position];
    let window_start = prefix
        .char_indices()
        .rev()
        .nth(SECTION_HEADER_WINDOW_CHARS - 1)
        .map_or(0, |(index, _)| index);
    let window = prefix[window_start..]
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-'))
        .to_lowercase();
    SECTION_HEADER_PHRASES.iter().any(|phrase| {
        window.strip_suffix(phrase).is_some_and(|head| {
            !head.chars().next_back().is_some_and(is_word_char)
        })
    })
}

/// Display name → core token overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreNameOverrides {
    entries: HashMap<String, String>,
}

impl Default for CoreNameOverrides {
    fn default() -> Self {
        Self {
            entries: CORE_NAME_OVERRIDES
                .iter()
                .map(|(name, core)| ((*name).to_owned(), (*core).to_owned()))
                .collect(),
        }
    }
}

impl CoreNameOverrides {
    /// Add or replace overrides
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        self.entries.extend(
            entries
                .into_iter()
                .map(|(name, core)| (name.trim().to_owned(), core.trim().to_owned())),
        );
        self
    }

    /// Core token of a display name
    #[must_use]
    pub fn core_name(&self, name: &str) -> String {
        let name = name.trim();
        self.entries
            .get(name)
            .cloned()
            .unwrap_or_else(|| extract_core_name(name))
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

/// Last word of a name split on whitespace and `, - / ( )`
#[must_use]
pub fn extract_core_name(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '/' | '(' | ')'))
        .map(|token| token.trim_matches('.').trim())
        .filter(|token| !token.is_empty())
        .next_back()
        .unwrap_or(name)
        .to_owned()
}

/// Finds noun phrases in free text
pub trait NounPhraseExtractor: Debug + Send + Sync {
    /// Byte ranges of noun phrases, in text order
    fn noun_phrases(&self, text: &str) -> Vec<Range<usize>>;
}

/// Noun-phrase chunker that splits word runs at stop words, numbers, and punctuation
#[derive(Debug, Clone)]
pub struct HeuristicChunker {
    stop_words: HashSet<String>,
}

impl Default for HeuristicChunker {
    fn default() -> Self {
        Self::with_stop_words(CHUNKER_STOP_WORDS.iter().copied())
    }
}

impl HeuristicChunker {
    /// Chunker with a custom stop-word list
    #[must_use]
    pub fn with_stop_words<'w>(words: impl IntoIterator<Item = &'w str>) -> Self {
        Self {
            stop_words: words.into_iter().map(str::to_lowercase).collect(),
        }
    }

    fn breaks_phrase(&self, word: &str) -> bool {
        word.chars().all(|c| c.is_ascii_digit()) || self.stop_words.contains(&word.to_lowercase())
    }
}

impl NounPhraseExtractor for HeuristicChunker {
    fn noun_phrases(&self, text: &str) -> Vec<Range<usize>> {
        let mut phrases = Vec::new();
        let mut current: Option<Range<usize>> = None;

        for word in word_spans(text) {
            if self.breaks_phrase(&text[word.clone()]) {
                phrases.extend(current.take());
                continue;
            }
            current = match current.take() {
                Some(phrase) if is_blank_gap(&text[phrase.end..word.start]) => {
                    Some(phrase.start..word.end)
                }
                Some(phrase) => {
                    phrases.push(phrase);
                    Some(word)
                }
                None => Some(word),
            };
        }
        phrases.extend(current);
        phrases
    }
}

/// A gap of spaces only; any punctuation or line break ends a phrase
fn is_blank_gap(gap: &str) -> bool {
    gap.chars().all(|c| c == ' ' || c == '\t')
}

fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;
    for (index, c) in text.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(index),
            (false, Some(begin)) => {
                spans.push(begin..index);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push(begin..text.len());
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_word_respects_boundaries() {
        let text = "Add rice water, then the rice.";
        assert_eq!(find_word(text, "rice"), Some(4..8));
        assert_eq!(find_word("Ricebran oil", "rice"), None);
        assert_eq!(find_word(text, "RICE WATER"), Some(4..14));
    }

    #[test]
    fn test_section_header_skip() {
        let text = "For the rice, wash it. Cook the rice.";
        let found = find_word(text, "rice").unwrap();
        assert_eq!(found.start, 32);

        let text = "For garnishing: coriander. Sprinkle coriander.";
        let found = find_word(text, "coriander").unwrap();
        assert_eq!(found.start, 36);
    }

    #[test]
    fn test_core_name_extraction() {
        assert_eq!(extract_core_name("Basmati rice (washed)."), "washed");
        assert_eq!(extract_core_name("green-chilli"), "chilli");
        let overrides = CoreNameOverrides::default();
        assert_eq!(overrides.core_name("முந்திரி பருப்பு"), "முந்திரி");
        assert_eq!(overrides.core_name("toor dal"), "dal");
    }

    #[test]
    fn test_heuristic_chunker() {
        let text = "Heat the ghee in a pan and add grated coconut, jaggery syrup.";
        let phrases: Vec<&str> = HeuristicChunker::default()
            .noun_phrases(text)
            .into_iter()
            .map(|range| &text[range])
            .collect();
        assert_eq!(phrases, ["ghee", "pan", "grated coconut", "jaggery syrup"]);
    }
}
