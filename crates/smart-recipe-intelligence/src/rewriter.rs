// ABOUTME: Rewrites recipe instructions so each ingredient mention carries its scaled quantity
// ABOUTME: Ordered injection strategies plus whitespace and punctuation clean-up of the steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Instruction Rewriting
//!
//! For each ingredient, the first qualifying mention in the instruction text
//! gets `"<amount> <unit> "` inserted in front of it. Strategies are tried in
//! order until one finds a mention:
//!
//! 1. [`FullPhrase`]: the whole display name as a word sequence
//! 2. [`CoreToken`]: the core name (override table, else last word)
//! 3. [`NounPhrase`]: the first noun phrase containing the core name
//!
//! Each core name is injected at most once, even when several ingredients
//! share it. Mentions right after a section header ("for the", "for
//! garnishing", ...) are skipped.

use std::collections::HashSet;
use std::fmt::Debug;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use smart_recipe_core::models::ParsedIngredient;
use tracing::debug;

use crate::text_analysis::{
    find_word, preceded_by_section_header, CoreNameOverrides, HeuristicChunker,
    NounPhraseExtractor,
};

/// Characters accepted as the end of a step
const TERMINAL_PUNCTUATION: [char; 4] = ['.', '!', '?', '।'];

static SPACE_RUNS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").ok());

static PUNCTUATION_SPACING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"([.,;:!?])([^\s\d.,;:!?)\]"'])"#).ok());

/// The ingredient an injection strategy is looking for
#[derive(Debug, Clone, Copy)]
pub struct InjectionTarget<'a> {
    /// Display name as shown in the ingredient list
    pub display_name: &'a str,
    /// Core token of the display name
    pub core_name: &'a str,
}

/// One way of locating an ingredient mention in instruction text
pub trait InjectionStrategy: Debug + Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Byte range of the mention to prefix with the quantity
    fn locate(&self, text: &str, target: &InjectionTarget<'_>) -> Option<Range<usize>>;
}

/// Whole display name, whole-word and case-insensitive
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPhrase;

impl InjectionStrategy for FullPhrase {
    fn name(&self) -> &'static str {
        "full_phrase"
    }

    fn locate(&self, text: &str, target: &InjectionTarget<'_>) -> Option<Range<usize>> {
        find_word(text, target.display_name)
    }
}

/// Core name, whole-word and case-insensitive
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreToken;

impl InjectionStrategy for CoreToken {
    fn name(&self) -> &'static str {
        "core_token"
    }

    fn locate(&self, text: &str, target: &InjectionTarget<'_>) -> Option<Range<usize>> {
        find_word(text, target.core_name)
    }
}

/// First noun phrase whose text contains the core name
#[derive(Debug)]
pub struct NounPhrase {
    extractor: Box<dyn NounPhraseExtractor>,
}

impl NounPhrase {
    /// Strategy backed by `extractor`
    #[must_use]
    pub fn new(extractor: Box<dyn NounPhraseExtractor>) -> Self {
        Self { extractor }
    }
}

impl Default for NounPhrase {
    fn default() -> Self {
        Self::new(Box::new(HeuristicChunker::default()))
    }
}

impl InjectionStrategy for NounPhrase {
    fn name(&self) -> &'static str {
        "noun_phrase"
    }

    fn locate(&self, text: &str, target: &InjectionTarget<'_>) -> Option<Range<usize>> {
        let core = target.core_name.to_lowercase();
        if core.is_empty() {
            return None;
        }
        self.extractor.noun_phrases(text).into_iter().find(|phrase| {
            text[phrase.clone()].to_lowercase().contains(&core)
                && !preceded_by_section_header(text, phrase.start)
        })
    }
}

/// Rewrites instruction steps with scaled quantities
#[derive(Debug)]
pub struct InstructionRewriter {
    strategies: Vec<Box<dyn InjectionStrategy>>,
    core_names: CoreNameOverrides,
}

impl Default for InstructionRewriter {
    fn default() -> Self {
        Self::new(CoreNameOverrides::default())
    }
}

impl InstructionRewriter {
    /// Rewriter with the default strategy order
    #[must_use]
    pub fn new(core_names: CoreNameOverrides) -> Self {
        Self::with_strategies(
            core_names,
            vec![
                Box::new(FullPhrase),
                Box::new(CoreToken),
                Box::new(NounPhrase::default()),
            ],
        )
    }

    /// Rewriter with a custom strategy order
    #[must_use]
    pub fn with_strategies(
        core_names: CoreNameOverrides,
        strategies: Vec<Box<dyn InjectionStrategy>>,
    ) -> Self {
        Self {
            strategies,
            core_names,
        }
    }

    /// Core name used to deduplicate injections for `display_name`
    #[must_use]
    pub fn core_name(&self, display_name: &str) -> String {
        self.core_names.core_name(display_name)
    }

    /// Inject scaled quantities into `steps` and tidy the result
    #[must_use]
    pub fn rewrite(&self, steps: &[String], ingredients: &[ParsedIngredient]) -> Vec<String> {
        let mut text = steps
            .iter()
            .map(|step| step.trim())
            .filter(|step| !step.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let mut injected: HashSet<String> = HashSet::new();
        for ingredient in ingredients {
            self.inject(&mut text, ingredient, &mut injected);
        }

        tidy_steps(&text)
    }

    fn inject(
        &self,
        text: &mut String,
        ingredient: &ParsedIngredient,
        injected: &mut HashSet<String>,
    ) {
        let display_name = ingredient.name().trim();
        let core_name = self.core_name(display_name);
        let core_key = core_name.to_lowercase();
        if core_key.is_empty() || injected.contains(&core_key) {
            return;
        }

        // No amount means the quantity does not apply, so the unit alone is never injected
        let amount = ingredient.formatted_amount();
        if amount.is_empty() {
            return;
        }
        let quantity = match ingredient.unit() {
            "" => amount.to_owned(),
            unit => format!("{amount} {unit}"),
        };

        let target = InjectionTarget {
            display_name,
            core_name: &core_name,
        };
        for strategy in &self.strategies {
            if let Some(range) = strategy.locate(text, &target) {
                debug!(
                    ingredient = display_name,
                    strategy = strategy.name(),
                    position = range.start,
                    "Injecting quantity"
                );
                text.insert_str(range.start, &format!("{quantity} "));
                injected.insert(core_key);
                return;
            }
        }
        debug!(ingredient = display_name, "No mention found in instructions");
    }
}

/// Split raw instruction text into steps on line breaks and sentence ends
///
/// A sentence ends at `.`, `!`, `?`, or `।` followed by whitespace or the end
/// of the line, so decimals like `1.5` stay intact.
#[must_use]
pub fn split_steps(text: &str) -> Vec<String> {
    let mut steps = Vec::new();
    for line in text.lines() {
        let mut start = 0;
        let mut chars = line.char_indices().peekable();
        while let Some((index, c)) = chars.next() {
            let at_boundary = chars.peek().is_none_or(|(_, next)| next.is_whitespace());
            if TERMINAL_PUNCTUATION.contains(&c) && at_boundary {
                let end = index + c.len_utf8();
                push_step(&mut steps, &line[start..end]);
                start = end;
            }
        }
        push_step(&mut steps, &line[start..]);
    }
    steps
}

fn push_step(steps: &mut Vec<String>, step: &str) {
    let step = step.trim();
    if !step.is_empty() {
        steps.push(step.to_owned());
    }
}

/// Collapse spaces, fix spacing after punctuation, and terminate every step
fn tidy_steps(text: &str) -> Vec<String> {
    let collapsed = SPACE_RUNS
        .as_ref()
        .map_or_else(|| text.to_owned(), |re| re.replace_all(text, " ").into_owned());
    let spaced = PUNCTUATION_SPACING.as_ref().map_or_else(
        || collapsed.clone(),
        |re| re.replace_all(&collapsed, "$1 $2").into_owned(),
    );

    spaced
        .split('\n')
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(|step| {
            if step.ends_with(TERMINAL_PUNCTUATION) {
                step.to_owned()
            } else {
                format!("{step}.")
            }
        })
        .collect()
}
