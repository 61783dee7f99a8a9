// ABOUTME: Error types for the application crate, re-exported from the core crate
// ABOUTME: Adds conversions from algorithm configuration errors into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The application shares `AppError` with the core crate so service callers
//! see one error type with one set of codes.

pub use smart_recipe_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails, Fallback,
};
use smart_recipe_intelligence::ConfigError;

/// Convert a configuration validation failure into an `AppError`
#[must_use]
pub fn config_error(error: ConfigError) -> AppError {
    AppError::config(error.to_string()).with_source(error)
}
