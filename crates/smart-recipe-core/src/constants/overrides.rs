// ABOUTME: Default manual override tables and word lists for free-text heuristics
// ABOUTME: Nutrition overrides, core-name overrides, stop words, and section-header phrases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Override value marking an ingredient as intentionally excluded from nutrition
pub const SKIP_MARKER: &str = "skip";

/// Normalized ingredient name → reference food query (or [`SKIP_MARKER`])
///
/// Regional or ambiguous ingredients that fuzzy matching gets wrong.
pub const NUTRITION_OVERRIDES: &[(&str, &str)] = &[
    ("jaggery", "brown sugar"),
    ("water", SKIP_MARKER),
    ("ghee", "butter oil anhydrous"),
    ("curd", "yogurt plain whole milk"),
    ("atta", "whole wheat flour"),
    ("maida", "wheat flour white all purpose"),
    ("besan", "chickpea flour"),
    ("gram flour", "chickpea flour"),
    ("poha", "rice flakes"),
    ("flattened rice", "rice flakes"),
    ("paneer", "cheese paneer"),
    ("dal", "lentils raw"),
    ("toor dal", "pigeon peas raw"),
    ("urad dal", "mung beans raw"),
    ("coriander leaves", "coriander leaves raw"),
    ("curry leaves", SKIP_MARKER),
    ("salt", "salt table"),
];

/// Words removed from ingredient names before nutrient matching
pub const NUTRITION_STOP_WORDS: &[&str] = &[
    "powder", "fresh", "chopped", "finely", "sliced", "diced", "minced", "grated", "crushed",
    "large", "small", "medium", "big", "optional", "to", "taste", "as", "needed", "required",
    "few", "some", "of", "and", "or", "a", "the", "for", "garnish", "garnishing", "roughly",
    "thinly", "boiled", "peeled", "cubed", "whole",
];

/// Display name → core token used when locating an ingredient in instructions
pub const CORE_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("கப் - தட்டையான அரிசி / அவல்", "அவல்"),
    ("கப் - வெல்லம்", "வெல்லம்"),
    ("கப் - துருவிய தேங்காய்", "தேங்காய்"),
    ("டேபிள் ஸ்பூன் - நெய்", "நெய்"),
    ("முந்திரி பருப்பு", "முந்திரி"),
    ("சிறிதளவு ஏலக்காய் தூள்.", "ஏலக்காய்"),
    ("गाजर - कद्दूकस की हुई", "गाजर"),
    ("कप पत्तागोभी - कद्दूकस की हुई", "पत्तागोभी"),
    ("छोटा चम्मच हल्दी", "हल्दी"),
    ("छोटा चम्मच सरसों के बीज", "सरसों"),
    ("छोटा चम्मच हींग", "हींग"),
];

/// Phrases that introduce an inline ingredient sub-list inside instructions
pub const SECTION_HEADER_PHRASES: &[&str] = &[
    "for the",
    "for garnishing",
    "for garnish",
    "for seasoning",
    "for tempering",
];
