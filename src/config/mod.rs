// ABOUTME: Configuration module for the Smart Recipe application
// ABOUTME: Environment-driven settings for the dataset location and scaling thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration
pub mod environment;

pub use environment::AppConfig;
