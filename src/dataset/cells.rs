// ABOUTME: Cell and row helpers shared by the dataset schema mappers
// ABOUTME: Converts loosely typed JSON/YAML cells into text and positive integers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{Map, Value};

/// One table row keyed by column name
pub type Row = Map<String, Value>;

/// Cell rendered as trimmed text; `None` for null and empty cells
#[must_use]
pub fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Cell as a positive whole number, accepting numbers and numeric text
#[must_use]
pub fn cell_positive_u32(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number >= 1.0 && number <= f64::from(u32::MAX))
        .then(|| number.round() as u32)
}

/// Text cell of `column` in `row`
#[must_use]
pub fn row_text(row: &Row, column: &str) -> Option<String> {
    row.get(column).and_then(cell_text)
}

/// Decode a table that is a flat `{key: value}` object of text
#[must_use]
pub fn string_pairs(table: &Value) -> Vec<(String, String)> {
    table
        .as_object()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(key, value)| cell_text(value).map(|text| (key.clone(), text)))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!(" Pongal ")), Some("Pongal".to_owned()));
        assert_eq!(cell_text(&json!(20)), Some("20".to_owned()));
        assert_eq!(cell_text(&json!("")), None);
        assert_eq!(cell_text(&Value::Null), None);
    }

    #[test]
    fn test_cell_positive_u32() {
        assert_eq!(cell_positive_u32(&json!(4)), Some(4));
        assert_eq!(cell_positive_u32(&json!("3")), Some(3));
        assert_eq!(cell_positive_u32(&json!(0)), None);
        assert_eq!(cell_positive_u32(&json!("many")), None);
    }
}
