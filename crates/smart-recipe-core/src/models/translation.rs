// ABOUTME: Ingredient translation table entry model
// ABOUTME: Maps a local-language ingredient name to its English canonical name and scale type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::ScaleType;

/// One local name → English canonical name mapping
///
/// Several local names (across and within languages) may map to the same
/// English name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    /// Language code of `local_name`
    pub language: String,
    /// Ingredient name as written in recipes of that language
    pub local_name: String,
    /// English canonical name
    pub english_name: String,
    /// Scale type declared for the English name, if any
    pub scale_type: Option<ScaleType>,
}
