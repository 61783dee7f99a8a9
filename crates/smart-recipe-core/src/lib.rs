// ABOUTME: Core types and constants for the Smart Recipe scaling engine
// ABOUTME: Foundation crate with error handling, ingredient/recipe models, and reference constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smart Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe scaling
//! engine. This crate is designed to change infrequently so that the algorithm
//! crate and the application crate can be rebuilt independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   locally recovered `Fallback` conditions
//! - **constants**: Language columns, focus nutrients, unit conversions, defaults
//! - **models**: Parsed/scaled ingredients, translation entries, nutrient records,
//!   recipe records and the request result shapes

/// Unified error handling system with standard error codes
pub mod errors;

/// Reference constants organized by domain
pub mod constants;

/// Core data models (ingredients, recipes, nutrients)
pub mod models;
