// ABOUTME: Service layer exposing the two public recipe operations
// ABOUTME: Functions take the shared reference context and return typed results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe nutrition totals
pub mod nutrition;
/// Recipe scaling
pub mod scaling;

pub use nutrition::get_nutrition_for_recipe;
pub use scaling::scale_recipe;
