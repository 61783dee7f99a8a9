// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure reference data for languages, nutrients, units, and text heuristics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Reference data that ships with the engine. Everything here is immutable and
//! read by the algorithm crate through explicit context objects; tables that can
//! be replaced from the dataset directory only provide their defaults here.

/// Language codes and recipe dataset column names
pub mod languages;
/// Focus nutrients, display aliases, and per-language nutrient names
pub mod nutrients;
/// Default override tables and word lists for text heuristics
pub mod overrides;
/// Unit conversion factors to grams
pub mod units;

/// Default tuning values
pub mod defaults {
    /// Serving count recipes are authored for when the dataset has no servings column
    pub const BASE_SERVINGS: u32 = 2;
    /// Minimum similarity (0-1) for a fuzzy scale-type match
    pub const SCALE_TYPE_SIMILARITY_CUTOFF: f64 = 0.75;
    /// Minimum similarity (0-1) for a fuzzy nutrient reference match
    pub const NUTRITION_MATCH_THRESHOLD: f64 = 0.6;
    /// Cooking time never grows beyond this multiple of the original
    pub const COOK_TIME_MAX_MULTIPLIER: f64 = 1.7;
    /// Lower bound for a scaled cooking time, in minutes
    pub const COOK_TIME_FLOOR_MINUTES: f64 = 5.0;
    /// Characters inspected before a match when looking for a section header
    pub const SECTION_HEADER_WINDOW_CHARS: usize = 20;
    /// Tolerance when snapping a fractional part to a quarter, half, or third
    pub const FRACTION_SNAP_TOLERANCE: f64 = 0.005;
    /// Sentinel rendered when a cooking time cannot be parsed
    pub const TIME_NOT_AVAILABLE: &str = "N/A";
}
