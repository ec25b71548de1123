//! Batch property updates on a JSON file.
//!
//! The whole document is parsed before anything is touched and written back
//! only after every update has been resolved. A raised failure therefore
//! never leaves a partially updated file behind.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tasksmith_core::{error_codes, Error, JsonKind, Result, TaskContext};
use tasksmith_utils::write_atomic_string;

use super::path::PropertyPath;
use crate::task::{Configure, Task, TaskSettings};

/// One pending property change
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    pub property: String,
    pub value: Value,
}

/// Updates properties of a JSON file and writes the result
#[derive(Debug, Clone)]
pub struct UpdateJsonFileTask {
    file: PathBuf,
    output: Option<PathBuf>,
    updates: Vec<UpdateRequest>,
    fail_if_property_not_found: bool,
    fail_on_type_mismatch: bool,
    settings: TaskSettings,
}

impl UpdateJsonFileTask {
    /// Create a task updating `file`, which is also the default output
    #[must_use]
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            output: None,
            updates: Vec::new(),
            fail_if_property_not_found: true,
            fail_on_type_mismatch: false,
            settings: TaskSettings::default(),
        }
    }

    /// Write the updated document to `output` instead of the input file
    #[must_use]
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Queue an update. Requests accumulate and run in insertion order.
    #[must_use]
    pub fn update(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.updates.push(UpdateRequest {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    /// Queue several updates at once
    #[must_use]
    pub fn update_many<I, K, V>(mut self, updates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.updates
            .extend(updates.into_iter().map(|(property, value)| UpdateRequest {
                property: property.into(),
                value: value.into(),
            }));
        self
    }

    /// Whether an unresolved property aborts the task (default `true`).
    ///
    /// When disabled the update is skipped with a warning and the task
    /// returns code 3 after applying the remaining updates.
    #[must_use]
    pub fn fail_if_property_not_found(mut self, fail: bool) -> Self {
        self.fail_if_property_not_found = fail;
        self
    }

    /// Whether a value of a different type aborts the task (default `false`).
    ///
    /// When disabled the existing value is overwritten and a warning logged.
    #[must_use]
    pub fn fail_on_type_mismatch(mut self, fail: bool) -> Self {
        self.fail_on_type_mismatch = fail;
        self
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The path the result is written to
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.file)
    }

    #[must_use]
    pub fn updates(&self) -> &[UpdateRequest] {
        &self.updates
    }

    fn load(&self, path: &Path) -> Result<Value> {
        if !path.is_file() {
            return Err(Error::file_not_found(&self.file));
        }
        let content =
            fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
        serde_json::from_str(&content).map_err(|e| Error::invalid_document(path, e))
    }

    /// Apply every queued update to `document`.
    ///
    /// Returns the code to report when no failure was raised: `0`, or `3` if
    /// some property was skipped.
    fn apply(&self, document: &mut Value, ctx: &mut TaskContext) -> Result<i32> {
        let mut code = error_codes::SUCCESS;

        for request in &self.updates {
            let span = tracing::info_span!(
                "update",
                property = %request.property,
                path = %self.file.display()
            );
            let _guard = span.enter();

            let target = match PropertyPath::parse(&request.property) {
                Some(path) => path.resolve_mut(document),
                None => None,
            };

            let Some(current) = target else {
                if self.fail_if_property_not_found {
                    return Err(Error::property_not_found(&request.property, &self.file));
                }
                ctx.warn(format!(
                    "Property {} not found in {}. Skipping update.",
                    request.property,
                    self.file.display()
                ));
                code = error_codes::PROPERTY_NOT_FOUND;
                continue;
            };

            if !JsonKind::same(current, &request.value) {
                let expected = JsonKind::of(current);
                let actual = JsonKind::of(&request.value);
                if self.fail_on_type_mismatch {
                    return Err(Error::type_mismatch(&request.property, expected, actual));
                }
                ctx.warn(format!(
                    "Property {} type mismatch. Expected {expected}, got {actual}. Overwriting.",
                    request.property
                ));
            }

            ctx.debug(format!("Setting {} to {}", request.property, request.value));
            *current = request.value.clone();
        }

        Ok(code)
    }
}

impl Task for UpdateJsonFileTask {
    fn name(&self) -> &str {
        "UpdateJsonFileTask"
    }

    fn settings(&self) -> &TaskSettings {
        &self.settings
    }

    fn run(&self, ctx: &mut TaskContext) -> Result<i32> {
        let input = ctx.resolve(&self.file);
        let mut document = self.load(&input)?;

        if self.updates.is_empty() {
            return Err(Error::nothing_to_update(&self.file));
        }

        let code = self.apply(&mut document, ctx)?;

        let output = ctx.resolve(self.output_path());
        let mut rendered = serde_json::to_string_pretty(&document)?;
        rendered.push('\n');
        write_atomic_string(&output, &rendered)?;

        ctx.info(format!(
            "Applied {} update(s) from {} to {}",
            self.updates.len(),
            input.display(),
            output.display()
        ));
        Ok(code)
    }
}

impl Configure for UpdateJsonFileTask {
    fn settings_mut(&mut self) -> &mut TaskSettings {
        &mut self.settings
    }
}
