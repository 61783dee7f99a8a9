// ABOUTME: Main library entry point for the Smart Recipe scaling service
// ABOUTME: Wires configuration, logging, dataset loading, and the recipe services together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smart Recipe
//!
//! Scales multilingual recipes to a new number of servings, rewrites their
//! instructions with the scaled quantities, and estimates nutrition from a
//! USDA-style nutrient reference.
//!
//! ## Architecture
//!
//! - **`smart-recipe-core`**: error taxonomy, data model, reference constants
//! - **`smart-recipe-intelligence`**: parsing, scaling, matching, rewriting
//! - **this crate**: configuration, logging, dataset loading, services, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smart_recipe::config::AppConfig;
//! use smart_recipe::dataset::ReferenceContext;
//! use smart_recipe::errors::AppResult;
//! use smart_recipe::services::scale_recipe;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let ctx = ReferenceContext::from_directory(&config.data_dir, config.scaling).await?;
//!
//!     let scaled = scale_recipe(&ctx, "Pongal", 4)?;
//!     println!("{} serves {}", scaled.recipe_title, scaled.new_servings);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Reference dataset loading and recipe lookup
pub mod dataset;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Recipe scaling and nutrition services
pub mod services;
