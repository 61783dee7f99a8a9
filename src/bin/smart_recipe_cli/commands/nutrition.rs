// ABOUTME: `nutrition` command printing total focus nutrients of a recipe
// ABOUTME: Thin wrapper over the nutrition service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use smart_recipe::dataset::ReferenceContext;
use smart_recipe::errors::AppResult;
use smart_recipe::services::get_nutrition_for_recipe;

use super::print_json;

pub fn run(
    ctx: &ReferenceContext,
    recipe: &str,
    language: Option<&str>,
    pretty: bool,
) -> AppResult<()> {
    let nutrition = get_nutrition_for_recipe(ctx, recipe, language)?;
    print_json(&nutrition, pretty)
}
