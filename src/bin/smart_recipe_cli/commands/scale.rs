// ABOUTME: `scale` command printing a recipe scaled to the requested servings
// ABOUTME: Thin wrapper over the scaling service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smart_recipe::dataset::ReferenceContext;
use smart_recipe::errors::AppResult;
use smart_recipe::services::scale_recipe;

use super::print_json;

pub fn run(ctx: &ReferenceContext, recipe: &str, servings: i64, pretty: bool) -> AppResult<()> {
    let scaled = scale_recipe(ctx, recipe, servings)?;
    print_json(&scaled, pretty)
}
