// ABOUTME: Focus nutrient allow-list, display aliases, and translated display names
// ABOUTME: Reference nutrient names follow the USDA FoodData Central nutrient table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrient definitions with this rank are excluded from the reference
pub const EXCLUDED_RANK: i64 = 999_999;

/// Display name of the energy total, rendered in kcal
pub const CALORIES: &str = "Calories";

/// Unit suffix for [`CALORIES`]
pub const CALORIES_UNIT: &str = "kcal";

/// Unit suffix for every other focus nutrient
pub const DEFAULT_UNIT: &str = "g";

/// Reference nutrient name → display alias, for every focus nutrient
///
/// Only nutrients listed here are reported. Several energy variants collapse
/// into a single `Calories` total.
pub const FOCUS_NUTRIENTS: &[(&str, &str)] = &[
    ("Energy", CALORIES),
    ("Energy (Atwater General Factors)", CALORIES),
    ("Energy (Atwater Specific Factors)", CALORIES),
    ("Protein", "Protein"),
    ("Total lipid (fat)", "Fat"),
    ("Carbohydrate, by difference", "Carbohydrates"),
    ("Fiber, total dietary", "Fiber"),
    ("Sugars, total including NLEA", "Sugar"),
    ("Cholesterol", "Cholesterol"),
    ("Sodium, Na", "Sodium"),
    ("Calcium, Ca", "Calcium"),
    ("Iron, Fe", "Iron"),
    ("Potassium, K", "Potassium"),
];

/// Display alias for a reference nutrient name, if it is a focus nutrient
#[must_use]
pub fn focus_alias(reference_name: &str) -> Option<&'static str> {
    FOCUS_NUTRIENTS
        .iter()
        .find(|(name, _)| *name == reference_name)
        .map(|(_, alias)| *alias)
}

/// Unit suffix rendered after an aggregated nutrient value
#[must_use]
pub fn display_unit(alias: &str) -> &'static str {
    if alias == CALORIES {
        CALORIES_UNIT
    } else {
        DEFAULT_UNIT
    }
}

/// Translated nutrient display names per language code
pub const NUTRIENT_NAME_TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "ta",
        &[
            ("Calories", "கேலரிகள்"),
            ("Protein", "புரதம்"),
            ("Fat", "கொழுப்பு"),
            ("Carbohydrates", "கார்போஹைட்ரேட்டுகள்"),
            ("Fiber", "நார்"),
            ("Sugar", "சர்க்கரை"),
            ("Cholesterol", "கொலஸ்ட்ரால்"),
            ("Sodium", "சோடியம்"),
            ("Calcium", "கால்சியம்"),
            ("Iron", "இரும்பு"),
            ("Potassium", "பொட்டாசியம்"),
        ],
    ),
    (
        "hn",
        &[
            ("Calories", "कैलोरी"),
            ("Protein", "प्रोटीन"),
            ("Fat", "वसा"),
            ("Carbohydrates", "कार्बोहाइड्रेट"),
            ("Fiber", "रेशा"),
            ("Sugar", "शुगर"),
            ("Cholesterol", "कोलेस्ट्रॉल"),
            ("Sodium", "सोडियम"),
            ("Calcium", "कैल्शियम"),
            ("Iron", "लोहा"),
            ("Potassium", "पोटैशियम"),
        ],
    ),
];
