// ABOUTME: Read-only dataset sources that yield reference tables as JSON values
// ABOUTME: Directory source reads JSON or YAML files with tokio; memory source serves tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// File extensions tried for each table, in order
const TABLE_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// A queryable, read-only store of named tables
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and errors
    fn describe(&self) -> String;

    /// Read table `name`, or `None` when the source has no such table
    ///
    /// # Errors
    ///
    /// Returns `DatasetLoad` when the table exists but cannot be read and
    /// `SerializationError` when its content cannot be decoded
    async fn read_table(&self, name: &str) -> AppResult<Option<Value>>;
}

/// Tables stored as `<name>.json`, `<name>.yaml`, or `<name>.yml` in one directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Source reading from `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn locate(&self, name: &str) -> AppResult<Option<PathBuf>> {
        for extension in TABLE_EXTENSIONS {
            let path = self.root.join(format!("{name}.{extension}"));
            let exists = fs::try_exists(&path).await.map_err(|e| {
                AppError::dataset_load(path.display().to_string(), e.to_string()).with_source(e)
            })?;
            if exists {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl DatasetSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn read_table(&self, name: &str) -> AppResult<Option<Value>> {
        let Some(path) = self.locate(name).await? else {
            return Ok(None);
        };
        let location = path.display().to_string();
        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| AppError::dataset_load(&location, e.to_string()).with_source(e))?;
        debug!(table = name, path = %location, bytes = content.len(), "Read dataset table");
        parse_table(&path, &content).map(Some)
    }
}

/// Decode file content by extension
fn parse_table(path: &Path, content: &str) -> AppResult<Value> {
    let location = path.display().to_string();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(content)
            .map_err(|e| AppError::serialization(&location, e.to_string()).with_source(e)),
        _ => serde_json::from_str(content)
            .map_err(|e| AppError::serialization(&location, e.to_string()).with_source(e)),
    }
}

/// Tables held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, Value>,
}

impl MemorySource {
    /// Empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table
    #[must_use]
    pub fn with_table(mut self, name: impl Into<String>, table: Value) -> Self {
        self.tables.insert(name.into(), table);
        self
    }
}

#[async_trait]
impl DatasetSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory ({} tables)", self.tables.len())
    }

    async fn read_table(&self, name: &str) -> AppResult<Option<Value>> {
        Ok(self.tables.get(name).cloned())
    }
}
