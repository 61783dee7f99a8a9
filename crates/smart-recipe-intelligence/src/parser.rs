// ABOUTME: Ingredient block parser producing structured quantity, unit, and name triples
// ABOUTME: Restricted quantity grammar with ranges, fractions, and mixed numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Line Parser
//!
//! An ingredient block is split on commas and newlines. Each line is read as
//! one of:
//!
//! - `<quantity> [<unit>] [-|:] <name>`, e.g. `1 1/2 cups rice`, `1 கப் - வெல்லம்`
//! - `<name> - <quantity> [<unit>]`, e.g. `Rice - 2 cups`
//! - free text with no quantity, e.g. `salt to taste` (amount 1)
//!
//! Quantities are never evaluated as arbitrary expressions. The grammar is a
//! range `a-b` (averaged) or a sum of terms joined by `+` or whitespace, where
//! each term is a decimal or `a/b`.

use std::sync::LazyLock;

use regex::Regex;
use smart_recipe_core::errors::Fallback;
use smart_recipe_core::models::ParsedIngredient;
use tracing::debug;

/// Amount used when a quantity is missing or cannot be evaluated
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Quantity token: digits with `.`, `/`, `+`, an optional range, and an optional trailing fraction
const QUANTITY_PATTERN: &str = r"[\d.][\d./+]*(?:\s*-\s*\d[\d./]*)?(?:\s+\d+/\d+)?";

static LEADING_QUANTITY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"^(?P<qty>{QUANTITY_PATTERN})\s*(?P<rest>.*)$")).ok());

static TRAILING_QUANTITY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<name>.+?)\s*[-:]\s*(?P<qty>{QUANTITY_PATTERN})\s*(?P<unit>[^\d\s]+)?\s*$"
    ))
    .ok()
});

/// Unicode vulgar fractions and their ASCII spelling
const VULGAR_FRACTIONS: [(char, &str); 9] = [
    ('¼', "1/4"),
    ('½', "1/2"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Parse a raw ingredient block into structured ingredients, in input order
///
/// Empty lines and lines with a quantity but no name are dropped.
#[must_use]
pub fn parse_ingredient_block(block: &str) -> Vec<ParsedIngredient> {
    block
        .split([',', '\n'])
        .filter_map(parse_ingredient_line)
        .collect()
}

/// Parse a single ingredient line
#[must_use]
pub fn parse_ingredient_line(line: &str) -> Option<ParsedIngredient> {
    let line = normalize_line(line);
    if line.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_leading_form(&line) {
        return parsed;
    }
    if let Some(parsed) = parse_trailing_form(&line) {
        return Some(parsed);
    }

    Some(ParsedIngredient::new(Some(DEFAULT_AMOUNT), "", line))
}

/// `<quantity> [<unit>] [-|:] <name>`
///
/// The outer `Option` is whether the line starts with a quantity at all; the
/// inner one is `None` when nothing but a quantity and unit was written.
fn parse_leading_form(line: &str) -> Option<Option<ParsedIngredient>> {
    let captures = LEADING_QUANTITY.as_ref()?.captures(line)?;
    let quantity = captures.name("qty")?.as_str();
    let rest = captures.name("rest").map_or("", |m| m.as_str());

    let mut tokens: Vec<&str> = rest.split_whitespace().collect();
    let unit = if tokens.len() > 1 && is_unit_token(tokens[0]) {
        tokens.remove(0)
    } else {
        ""
    };
    if tokens.first().is_some_and(|token| is_separator(token)) {
        tokens.remove(0);
    }

    let name = tokens.join(" ");
    if name.is_empty() {
        debug!(line, "Dropping ingredient line without a name");
        return Some(None);
    }

    Some(Some(ParsedIngredient::new(
        Some(evaluate_or_default(quantity)),
        unit,
        name,
    )))
}

/// `<name> - <quantity> [<unit>]`
fn parse_trailing_form(line: &str) -> Option<ParsedIngredient> {
    let captures = TRAILING_QUANTITY.as_ref()?.captures(line)?;
    let name = captures.name("name")?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    let quantity = captures.name("qty")?.as_str();
    let unit = captures.name("unit").map_or("", |m| m.as_str());
    Some(ParsedIngredient::new(
        Some(evaluate_or_default(quantity)),
        unit,
        name,
    ))
}

fn evaluate_or_default(quantity: &str) -> f64 {
    parse_quantity(quantity).unwrap_or_else(|| {
        let fallback = Fallback::QuantityParseFailure {
            token: quantity.to_owned(),
        };
        debug!(kind = fallback.kind(), %fallback, "Quantity fallback");
        DEFAULT_AMOUNT
    })
}

/// Evaluate a quantity token with the restricted grammar
///
/// Returns `None` for anything outside the grammar, a zero denominator, or a
/// non-finite result.
#[must_use]
pub fn parse_quantity(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let value = match split_range(text) {
        Some((low, high)) => (parse_sum(low)? + parse_sum(high)?) / 2.0,
        None => parse_sum(text)?,
    };
    value.is_finite().then_some(value)
}

/// Split `a-b` into its endpoints; a leading or trailing dash is not a range
fn split_range(text: &str) -> Option<(&str, &str)> {
    let (low, high) = text.split_once('-')?;
    let (low, high) = (low.trim(), high.trim());
    (!low.is_empty() && !high.is_empty()).then_some((low, high))
}

fn parse_sum(text: &str) -> Option<f64> {
    let mut total = 0.0;
    let mut terms = 0;
    for term in text.split(|c: char| c == '+' || c.is_whitespace()) {
        if term.is_empty() {
            continue;
        }
        total += parse_term(term)?;
        terms += 1;
    }
    (terms > 0).then_some(total)
}

fn parse_term(term: &str) -> Option<f64> {
    match term.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = parse_decimal(numerator)?;
            let denominator = parse_decimal(denominator)?;
            (denominator != 0.0).then(|| numerator / denominator)
        }
        None => parse_decimal(term),
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok()
}

fn is_unit_token(token: &str) -> bool {
    !token.chars().any(|c| c.is_ascii_digit()) && token.chars().any(char::is_alphabetic)
}

fn is_separator(token: &str) -> bool {
    matches!(token, "-" | ":")
}

/// Trim, drop zero-width characters, and spell out unicode fractions and dashes
fn normalize_line(line: &str) -> String {
    let mut normalized = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\u{200B}' | '\u{FEFF}' => {}
            '\u{2013}' | '\u{2014}' | '\u{2212}' => normalized.push('-'),
            _ => match VULGAR_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
                Some((_, ascii)) => {
                    if normalized.chars().last().is_some_and(|p| p.is_ascii_digit()) {
                        normalized.push(' ');
                    }
                    normalized.push_str(ascii);
                }
                None => normalized.push(c),
            },
        }
    }
    normalized.trim().to_owned()
}
