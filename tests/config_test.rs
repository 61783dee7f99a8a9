// ABOUTME: Tests for environment configuration loading
// ABOUTME: Exercises defaults, overrides, and invalid values through SMART_RECIPE_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use smart_recipe::config::environment::env_keys;
use smart_recipe::config::AppConfig;
use smart_recipe::errors::ErrorCode;
use smart_recipe::logging::LogFormat;

const ALL_KEYS: [&str; 6] = [
    env_keys::DATA_DIR,
    env_keys::BASE_SERVINGS,
    env_keys::SCALE_TYPE_CUTOFF,
    env_keys::NUTRITION_THRESHOLD,
    env_keys::COOK_TIME_MAX_MULTIPLIER,
    env_keys::COOK_TIME_FLOOR_MINUTES,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.scaling.base_servings, 2);
    assert!((config.scaling.cook_time_max_multiplier - 1.7).abs() < f64::EPSILON);
    assert!((config.scaling.nutrition_threshold - 0.6).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_overrides() {
    clear_env();
    env::set_var(env_keys::DATA_DIR, "/srv/recipes");
    env::set_var(env_keys::BASE_SERVINGS, "4");
    env::set_var(env_keys::COOK_TIME_MAX_MULTIPLIER, " 2.0 ");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/recipes"));
    assert_eq!(config.scaling.base_servings, 4);
    assert!((config.scaling.cook_time_max_multiplier - 2.0).abs() < f64::EPSILON);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_value() {
    clear_env();
    env::set_var(env_keys::BASE_SERVINGS, "two");
    let error = AppConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_value() {
    clear_env();
    env::set_var(env_keys::NUTRITION_THRESHOLD, "1.5");
    let error = AppConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("anything"), LogFormat::Compact);
}
