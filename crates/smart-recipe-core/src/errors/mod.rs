// ABOUTME: Unified error types for recipe scaling and nutrition requests
// ABOUTME: Defines ErrorCode, AppError, and the locally recovered Fallback conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Only two conditions are fatal to a request: the recipe cannot be found, or
//! the dataset lacks a column the request needs. Everything else the engine
//! runs into while parsing and matching free text is recovered locally and
//! described by [`Fallback`] for logging.
//!
//! Startup failures (unreadable reference files, invalid configuration) share the
//! same [`AppError`] type so the binary has a single error path.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Fallback conditions recovered without failing the request
pub mod fallback;

pub use fallback::Fallback;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Request validation (3000-3999)
    /// Request parameter outside its valid domain
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource lookup (4000-4999)
    /// No recipe row matches the requested name in any sheet or language
    #[serde(rename = "RECIPE_NOT_FOUND")]
    RecipeNotFound = 4000,

    // Dataset schema (6000-6999)
    /// A required dataset column is absent and no English fallback exists
    #[serde(rename = "SCHEMA_MISSING")]
    SchemaMissing = 6000,
    /// Configuration value missing or out of range
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6001,

    // Internal errors (9000-9999)
    /// Reference data could not be read from storage
    #[serde(rename = "DATASET_LOAD_ERROR")]
    DatasetLoad = 9000,
    /// Reference data could not be decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9002,
}

impl ErrorCode {
    /// Process exit status for this error, following `sysexits.h`
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::InvalidInput => 64,
            Self::RecipeNotFound | Self::SchemaMissing | Self::SerializationError => 65,
            Self::DatasetLoad => 66,
            Self::InternalError => 70,
            Self::ConfigInvalid => 78,
        }
    }

    /// User-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::RecipeNotFound => "Recipe not found",
            Self::SchemaMissing => "Recipe dataset is missing a required column",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::DatasetLoad => "Reference dataset could not be loaded",
            Self::SerializationError => "Reference dataset could not be decoded",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Additional context attached to an error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the resource involved (recipe name, file path, column)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource identifier to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit status for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.code.exit_code()
    }

    /// No row matches `recipe_name` in any sheet or language
    #[must_use]
    pub fn recipe_not_found(recipe_name: impl Into<String>) -> Self {
        let recipe_name = recipe_name.into();
        Self::new(
            ErrorCode::RecipeNotFound,
            format!("Recipe '{recipe_name}' not found"),
        )
        .with_resource_id(recipe_name)
    }

    /// Column `column` is absent for `language` and no English fallback exists
    #[must_use]
    pub fn schema_missing(
        sheet: impl Into<String>,
        column: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let sheet = sheet.into();
        let column = column.into();
        let language = language.into();
        Self::new(
            ErrorCode::SchemaMissing,
            format!("Sheet '{sheet}' has no '{column}' column for language '{language}'"),
        )
        .with_resource_id(column.clone())
        .with_details(serde_json::json!({
            "sheet": sheet,
            "column": column,
            "language": language,
        }))
    }

    /// Invalid request parameter
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid configuration value
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Reference data could not be read
    #[must_use]
    pub fn dataset_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::DatasetLoad,
            format!("{path}: {}", message.into()),
        )
        .with_resource_id(path)
    }

    /// Reference data could not be decoded
    #[must_use]
    pub fn serialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(
            ErrorCode::SerializationError,
            format!("{path}: {}", message.into()),
        )
        .with_resource_id(path)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body for CLI output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error payload carried by [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.context.details,
            },
        }
    }
}
