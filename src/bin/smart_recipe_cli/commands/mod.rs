// ABOUTME: Command handlers for the smart-recipe CLI
// ABOUTME: Shared JSON output and error reporting for scale and nutrition commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod nutrition;
pub mod scale;

use std::process::ExitCode;

use serde::Serialize;
use smart_recipe::errors::{AppError, AppResult, ErrorResponse};

/// Write `value` to stdout as JSON
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AppError::internal(format!("failed to render output: {e}")).with_source(e))?;
    println!("{rendered}");
    Ok(())
}

/// Write the error body to stdout and map the error to an exit status
pub fn print_error(error: AppError) -> ExitCode {
    let status = error.exit_code();
    let body = ErrorResponse::from(error);
    match serde_json::to_string(&body) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("failed to render error: {e}"),
    }
    ExitCode::from(status)
}
