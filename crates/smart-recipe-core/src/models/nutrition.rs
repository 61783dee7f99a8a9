// ABOUTME: Nutrient reference models joined from food, nutrient, and food-nutrient tables
// ABOUTME: Raw row shapes for dataset files plus the joined per-100g NutrientRecord
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated nutrient amounts keyed by display alias
pub type NutrientAmounts = BTreeMap<String, f64>;

/// Row of the reference food table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRow {
    /// Reference food identifier
    pub fdc_id: i64,
    /// Free-text food description
    pub description: String,
}

/// Row of the reference nutrient definition table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientDefinitionRow {
    /// Nutrient identifier
    pub id: i64,
    /// Canonical nutrient name
    pub name: String,
    /// Unit the amounts are expressed in
    #[serde(default)]
    pub unit_name: String,
    /// Display rank; the excluded sentinel marks unused definitions
    #[serde(default)]
    pub rank: Option<f64>,
}

/// Row of the food ↔ nutrient amount table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrientRow {
    /// Reference food identifier
    pub fdc_id: i64,
    /// Nutrient identifier
    pub nutrient_id: i64,
    /// Amount per 100 g of food
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A focus nutrient amount for one reference food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientRecord {
    /// Reference food identifier
    pub food_id: i64,
    /// Canonical nutrient name
    pub nutrient_name: String,
    /// Display alias (energy variants share `Calories`)
    pub alias: String,
    /// Amount per 100 g of food
    pub amount_per_100g: f64,
}
