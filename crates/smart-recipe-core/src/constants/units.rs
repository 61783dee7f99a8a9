// ABOUTME: Unit conversion constants for turning ingredient quantities into grams
// ABOUTME: Covers metric and imperial mass plus common volumetric and count cooking units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Grams per kilogram
pub const GRAMS_PER_KG: f64 = 1000.0;
/// Grams per milligram
pub const GRAMS_PER_MG: f64 = 0.001;
/// Grams per pound
pub const GRAMS_PER_LB: f64 = 453.592;
/// Grams per ounce
pub const GRAMS_PER_OZ: f64 = 28.3495;
/// Approximate grams per tablespoon
pub const GRAMS_PER_TBSP: f64 = 14.2;
/// Approximate grams per teaspoon
pub const GRAMS_PER_TSP: f64 = 4.7;
/// Approximate grams per cup
pub const GRAMS_PER_CUP: f64 = 240.0;
/// Approximate grams per milliliter (water density)
pub const GRAMS_PER_ML: f64 = 1.0;
/// Approximate grams per liter
pub const GRAMS_PER_LITER: f64 = 1000.0;
/// Approximate grams per countable piece
pub const GRAMS_PER_PIECE: f64 = 50.0;
/// Approximate grams per pinch
pub const GRAMS_PER_PINCH: f64 = 0.36;
/// Approximate grams per garlic clove
pub const GRAMS_PER_CLOVE: f64 = 3.0;
/// Approximate grams per slice
pub const GRAMS_PER_SLICE: f64 = 30.0;

/// Unit spellings (lower-case) and their gram factor
pub const UNIT_GRAMS: &[(&[&str], f64)] = &[
    (&["g", "gm", "gms", "gram", "grams", "gr"], 1.0),
    (&["kg", "kgs", "kilogram", "kilograms"], GRAMS_PER_KG),
    (&["mg", "milligram", "milligrams"], GRAMS_PER_MG),
    (&["lb", "lbs", "pound", "pounds"], GRAMS_PER_LB),
    (&["oz", "ounce", "ounces"], GRAMS_PER_OZ),
    (
        &["tbsp", "tbsps", "tbs", "tablespoon", "tablespoons", "tbl"],
        GRAMS_PER_TBSP,
    ),
    (&["tsp", "tsps", "teaspoon", "teaspoons"], GRAMS_PER_TSP),
    (&["cup", "cups", "c"], GRAMS_PER_CUP),
    (&["ml", "milliliter", "milliliters", "millilitre", "millilitres"], GRAMS_PER_ML),
    (&["l", "liter", "liters", "litre", "litres"], GRAMS_PER_LITER),
    (
        &["piece", "pieces", "pc", "pcs", "no", "nos", "whole"],
        GRAMS_PER_PIECE,
    ),
    (&["pinch", "pinches"], GRAMS_PER_PINCH),
    (&["clove", "cloves"], GRAMS_PER_CLOVE),
    (&["slice", "slices"], GRAMS_PER_SLICE),
];
