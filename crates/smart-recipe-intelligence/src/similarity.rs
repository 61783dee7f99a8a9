// ABOUTME: String similarity scoring for fuzzy ingredient and food lookups
// ABOUTME: Combines normalized Levenshtein with token-sort and token-set ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fuzzy string similarity
//!
//! All scores are on a 0.0-1.0 scale. [`similarity`] takes the best of three
//! views of the two strings:
//!
//! - the plain normalized Levenshtein ratio
//! - the ratio after sorting whitespace tokens (word order ignored)
//! - the token-set ratio, which rewards one string's words being a subset of
//!   the other's, weighted down slightly so exact spellings still win
//!
//! Best-match searches break score ties by the plain ratio and then by the
//! earliest candidate, so results are deterministic.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rayon::prelude::*;
use strsim::normalized_levenshtein;

/// Weight applied to the token-set ratio
const TOKEN_SET_WEIGHT: f64 = 0.95;

/// A scored candidate from a best-match search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Position of the candidate in the searched slice
    pub index: usize,
    /// Combined similarity score
    pub score: f64,
    /// Plain normalized Levenshtein ratio, used for tie-breaking
    pub ratio: f64,
}

/// Plain normalized Levenshtein ratio
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b)
}

/// Ratio of the two strings with their words sorted
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let left = sorted_tokens(a).into_iter().collect::<Vec<_>>().join(" ");
    let right = sorted_tokens(b).into_iter().collect::<Vec<_>>().join(" ");
    ratio(&left, &right)
}

/// Token-set ratio: compares the shared words against each side's full word set
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let left = sorted_tokens(a);
    let right = sorted_tokens(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = join(left.intersection(&right));
    let left_only = join(left.difference(&right));
    let right_only = join(right.difference(&left));

    let combined_left = join_nonempty(&shared, &left_only);
    let combined_right = join_nonempty(&shared, &right_only);

    ratio(&shared, &combined_left)
        .max(ratio(&shared, &combined_right))
        .max(ratio(&combined_left, &combined_right))
}

/// Combined similarity score used by every fuzzy lookup
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    ratio(a, b)
        .max(token_sort_ratio(a, b))
        .max(TOKEN_SET_WEIGHT * token_set_ratio(a, b))
}

/// Score `choice` against `query`
#[must_use]
pub fn score(query: &str, index: usize, choice: &str) -> Candidate {
    Candidate {
        index,
        score: similarity(query, choice),
        ratio: ratio(query, choice),
    }
}

/// Best candidate for `query` among `choices`, scanned sequentially
#[must_use]
pub fn best_match<S: AsRef<str>>(query: &str, choices: &[S]) -> Option<Candidate> {
    choices
        .iter()
        .enumerate()
        .map(|(index, choice)| score(query, index, choice.as_ref()))
        .reduce(better)
}

/// Best candidate for `query` among `choices`, scanned in parallel
///
/// Returns the same candidate as [`best_match`].
#[must_use]
pub fn best_match_parallel<S: AsRef<str> + Sync>(
    query: &str,
    choices: &[S],
) -> Option<Candidate> {
    choices
        .par_iter()
        .enumerate()
        .map(|(index, choice)| score(query, index, choice.as_ref()))
        .reduce_with(better)
}

/// Higher score, then higher plain ratio, then earlier index
fn better(a: Candidate, b: Candidate) -> Candidate {
    let ordering = a
        .score
        .total_cmp(&b.score)
        .then(a.ratio.total_cmp(&b.ratio))
        .then(b.index.cmp(&a.index));
    match ordering {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    }
}

fn sorted_tokens(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

fn join<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.map(String::as_str).collect::<Vec<_>>().join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_owned(),
        (_, true) => head.to_owned(),
        _ => format!("{head} {tail}"),
    }
}
