// ABOUTME: Parsed and scaled ingredient models with amount rendering
// ABOUTME: ParsedIngredient keeps its formatted amount in sync with the numeric amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::defaults::FRACTION_SNAP_TOLERANCE;

/// Fractions an amount's fractional part may snap to, as (numerator, denominator)
const SNAP_FRACTIONS: [(u8, u8); 5] = [(1, 4), (1, 2), (3, 4), (1, 3), (2, 3)];

/// How an ingredient's quantity responds to a change in servings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScaleType {
    /// Proportional to the serving ratio
    #[default]
    Linear,
    /// Sub-linear growth for seasonings and leaveners
    Log,
    /// Unchanged regardless of servings
    Fixed,
}

impl ScaleType {
    /// Parse a scale type from reference table text
    ///
    /// Accepts `linear`, `log`, `logarithmic`, and `fixed` in any case.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "log" | "logarithmic" => Some(Self::Log),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// Lower-case name used in logs and tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured ingredient line
///
/// Fields are private so the rendered amount can never drift from the numeric
/// amount: every amount change goes through [`ParsedIngredient::set_amount`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    amount: Option<f64>,
    unit: String,
    name: String,
    formatted_amount: String,
}

impl ParsedIngredient {
    /// Create an ingredient and render its amount
    #[must_use]
    pub fn new(amount: Option<f64>, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            name: name.into(),
            formatted_amount: format_amount(amount),
        }
    }

    /// Numeric amount, `None` when the line carried no usable quantity
    #[must_use]
    pub const fn amount(&self) -> Option<f64> {
        self.amount
    }

    /// Unit token as written, empty when absent
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Ingredient name as written
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human rendering of [`Self::amount`]
    #[must_use]
    pub fn formatted_amount(&self) -> &str {
        &self.formatted_amount
    }

    /// Whether the amount is absent or zero
    #[must_use]
    pub fn is_unquantified(&self) -> bool {
        self.amount.is_none_or(|value| value == 0.0)
    }

    /// Replace the amount and re-render it
    pub fn set_amount(&mut self, amount: Option<f64>) {
        self.amount = amount;
        self.formatted_amount = format_amount(amount);
    }

    /// Copy of this ingredient with a different amount
    #[must_use]
    pub fn with_amount(&self, amount: Option<f64>) -> Self {
        let mut scaled = self.clone();
        scaled.set_amount(amount);
        scaled
    }

    /// Copy of this ingredient with a different display name
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// An ingredient after quantity scaling
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    /// Ingredient carrying the scaled amount; unit and name are unchanged
    #[serde(flatten)]
    pub ingredient: ParsedIngredient,
    /// Scale type that was applied
    pub scale_type: ScaleType,
    /// Amount before scaling
    pub original_amount: Option<f64>,
}

/// Render an amount for display
///
/// Absent and zero amounts render as the empty string. Whole numbers render
/// without decimals; fractional parts within a small tolerance of a quarter,
/// half, or third render as a (mixed) fraction such as `1 1/2` or `2/3`. Other
/// values render with at most two decimals.
#[must_use]
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(value) = amount.filter(|v| v.is_finite() && *v != 0.0) else {
        return String::new();
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let fraction = magnitude - whole;

    if fraction <= FRACTION_SNAP_TOLERANCE {
        return format!("{sign}{whole:.0}");
    }
    if 1.0 - fraction <= FRACTION_SNAP_TOLERANCE {
        return format!("{sign}{:.0}", whole + 1.0);
    }

    for (numerator, denominator) in SNAP_FRACTIONS {
        let target = f64::from(numerator) / f64::from(denominator);
        if (fraction - target).abs() <= FRACTION_SNAP_TOLERANCE {
            return if whole == 0.0 {
                format!("{sign}{numerator}/{denominator}")
            } else {
                format!("{sign}{whole:.0} {numerator}/{denominator}")
            };
        }
    }

    format_decimal(value, 2)
}

/// Render `value` rounded to `places` decimals with trailing zeros trimmed
#[must_use]
pub fn format_decimal(value: f64, places: usize) -> String {
    let rendered = format!("{value:.places$}");
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_fractions() {
        assert_eq!(format_amount(Some(1.5)), "1 1/2");
        assert_eq!(format_amount(Some(0.75)), "3/4");
        assert_eq!(format_amount(Some(2.0 + 2.0 / 3.0)), "2 2/3");
        assert_eq!(format_amount(Some(0.333)), "1/3");
        assert_eq!(format_amount(Some(4.0)), "4");
    }

    #[test]
    fn test_format_amount_decimals_and_empty() {
        assert_eq!(format_amount(Some(1.2)), "1.2");
        assert_eq!(format_amount(Some(0.1)), "0.1");
        assert_eq!(format_amount(Some(2.678)), "2.68");
        assert_eq!(format_amount(Some(0.0)), "");
        assert_eq!(format_amount(None), "");
    }

    #[test]
    fn test_set_amount_rerenders() {
        let mut ingredient = ParsedIngredient::new(Some(1.0), "cup", "rice");
        assert_eq!(ingredient.formatted_amount(), "1");
        ingredient.set_amount(Some(2.5));
        assert_eq!(ingredient.formatted_amount(), "2 1/2");
        ingredient.set_amount(None);
        assert_eq!(ingredient.formatted_amount(), "");
        assert!(ingredient.is_unquantified());
    }

    #[test]
    fn test_scale_type_parse() {
        assert_eq!(ScaleType::parse(" LOG "), Some(ScaleType::Log));
        assert_eq!(ScaleType::parse("logarithmic"), Some(ScaleType::Log));
        assert_eq!(ScaleType::parse("Fixed"), Some(ScaleType::Fixed));
        assert_eq!(ScaleType::parse("exponential"), None);
        assert_eq!(ScaleType::default(), ScaleType::Linear);
    }
}
