// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds a small multilingual recipe dataset and loads it into a reference context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `smart_recipe`

use std::path::Path;
use std::sync::Once;
use std::{env, fs, io};

use serde_json::{json, Value};
use smart_recipe::dataset::{tables, MemorySource, ReferenceContext};
use smart_recipe_intelligence::ScalingConfig;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(io::stderr)
            .try_init()
            .ok();
    });
}

/// Recipe workbook with English, Tamil, and Hindi recipes
pub fn recipes_table() -> Value {
    json!({
        "sheets": [
            {
                "name": "South Indian",
                "rows": [
                    {
                        "name": "Rice Bowl",
                        "TamilName": "சாதம்",
                        "ingredients_en": "2 cups rice, 1 tsp salt",
                        "ingredients_ta": "2 கப் அரிசி, 1 டீஸ்பூன் உப்பு",
                        "instructions_en": "Wash the rice. Cook the rice in water with salt.",
                        "instructions_ta": "அரிசி கழுவவும். உப்பு சேர்த்து வேகவைக்கவும்.",
                        "cooking": 20
                    },
                    {
                        "name": "Lemon Rice",
                        "ingredients_en": "1 cup rice, 2 tbsp sugar, water, salt to taste",
                        "instructions_en": "Cook the rice. Mix in the sugar and salt.",
                        "cooking": "15 mins",
                        "servings": 4
                    },
                    {
                        "name": "Sugar Syrup",
                        "ingredients_en": "2 tbsp sugar",
                        "instructions_en": "Dissolve the sugar in hot water.",
                        "cooking": "about ten minutes"
                    }
                ]
            },
            {
                "name": "North Indian",
                "rows": [
                    {
                        "name": "Dal Tadka",
                        "hindiName": "दाल तड़का",
                        "ingredients_en": "1 cup toor dal, 1/2 tsp salt",
                        "ingredients_hn": "1 कप तूर दाल, 1/2 चम्मच नमक",
                        "instructions_en": "Boil the dal. Add salt.",
                        "instructions_hn": "दाल उबालें। नमक डालें।",
                        "cook_time": "30"
                    }
                ]
            },
            {
                "name": "Drafts",
                "rows": [
                    {
                        "name": "Mystery Soup",
                        "ingredients_en": "1 cup water",
                        "instructions_en": "Boil."
                    }
                ]
            },
            {
                "name": "Regional Only",
                "rows": [
                    {
                        "TamilName": "அவல் பாயசம்",
                        "ingredients_ta": "1 கப் அவல்",
                        "instructions_ta": "அவல் வேகவைக்கவும்.",
                        "cooking": 10
                    }
                ]
            }
        ]
    })
}

/// Translation rows with scale types
pub fn translations_table() -> Value {
    json!([
        {"en": "rice", "scale_type": "LINEAR", "ta": "அரிசி", "hn": "चावल"},
        {"en": "salt", "scale_type": "FIXED", "ta": "உப்பு", "hn": "नमक"},
        {"en": "toor dal", "scale_type": "LINEAR", "hn": "तूर दाल"},
        {"en": "sugar", "scale_type": "LINEAR", "ta": "சர்க்கரை"},
        {"en": "cardamom", "scale_type": "LOG", "ta": "ஏலக்காய்"}
    ])
}

/// Reference foods
pub fn food_table() -> Value {
    json!([
        {"fdc_id": 1, "description": "Sugar, granulated"},
        {"fdc_id": 2, "description": "Rice, white, raw"},
        {"fdc_id": 3, "description": "Salt, table"},
        {"fdc_id": 4, "description": "Salt, table"}
    ])
}

/// Nutrient definitions, including one excluded by rank
pub fn nutrient_table() -> Value {
    json!([
        {"id": 1008, "name": "Energy", "unit_name": "KCAL", "rank": 300.0},
        {"id": 1005, "name": "Carbohydrate, by difference", "unit_name": "G", "rank": 1110.0},
        {"id": 1093, "name": "Sodium, Na", "unit_name": "MG", "rank": 5800.0},
        {"id": 1003, "name": "Protein", "unit_name": "G", "rank": 999999.0}
    ])
}

/// Per-food nutrient amounts per 100 g
pub fn food_nutrient_table() -> Value {
    json!([
        {"fdc_id": 1, "nutrient_id": 1008, "amount": 387.0},
        {"fdc_id": 1, "nutrient_id": 1005, "amount": 100.0},
        {"fdc_id": 1, "nutrient_id": 1003, "amount": 0.5},
        {"fdc_id": 2, "nutrient_id": 1008, "amount": 365.0},
        {"fdc_id": 2, "nutrient_id": 1005, "amount": 80.0},
        {"fdc_id": 3, "nutrient_id": 1093, "amount": 38758.0},
        {"fdc_id": 4, "nutrient_id": 1093, "amount": 38000.0},
        {"fdc_id": 4, "nutrient_id": 1008, "amount": 0.0}
    ])
}

/// In-memory source holding every fixture table
pub fn memory_source() -> MemorySource {
    MemorySource::new()
        .with_table(tables::RECIPES, recipes_table())
        .with_table(tables::INGREDIENTS_TRANSLATION, translations_table())
        .with_table(tables::FOOD, food_table())
        .with_table(tables::NUTRIENT, nutrient_table())
        .with_table(tables::FOOD_NUTRIENT, food_nutrient_table())
}

/// Reference context over the fixture dataset with default tuning
pub async fn load_context() -> ReferenceContext {
    init_test_logging();
    ReferenceContext::load(&memory_source(), ScalingConfig::default())
        .await
        .expect("fixture dataset loads")
}

/// Write `value` as pretty JSON to `dir/<name>.json`
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    let content = serde_json::to_string_pretty(value).unwrap();
    fs::write(dir.join(format!("{name}.json")), content).unwrap();
}

/// Write `value` as YAML to `dir/<name>.yaml`
pub fn write_yaml(dir: &Path, name: &str, value: &Value) {
    let content = serde_yaml::to_string(value).unwrap();
    fs::write(dir.join(format!("{name}.yaml")), content).unwrap();
}
