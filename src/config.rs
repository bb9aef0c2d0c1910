//! Manifest loading for the `prioqueue` demonstrator.
//!
//! A manifest is a TOML file with an optional `[queue]` table holding the
//! construction parameters and a list of `[[tasks]]` to submit:
//!
//! ```toml
//! [queue]
//! capacity = 100
//! max_priority = 10
//!
//! [[tasks]]
//! command = "rotate-logs"
//! priority = 2
//! ```
//!
//! Values are kept raw so the queue's own conforming rules decide what they
//! become; [`Config::validate`] reports what will be changed or refused.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::queue::QueueConfig;
use crate::queue::priority::{self, Mode};

/// Result of manifest validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Root manifest structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// One submission read from the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub command: String,
    pub priority: f64,
}

impl Config {
    /// Load a manifest from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax
    /// - Required fields are missing or have invalid types
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))
    }

    /// Parse a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the manifest.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error listing every fatal problem:
    /// - Capacity below 1 after truncation, or NaN (`inf` means unbounded)
    /// - `max_priority` that is NaN, `+inf`, or beyond `u32::MAX`
    /// - Tasks with an empty command or a NaN priority
    ///
    /// Infinite task priorities are not fatal; they are clamped like any
    /// other out-of-range value and reported as warnings.
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 1. Queue parameters
        if let Err(e) = priority::conform_capacity(self.queue.capacity) {
            errors.push(format!("queue.capacity: {e}"));
        }

        let max_priority = match priority::conform(self.queue.max_priority, Mode::Construction) {
            Ok(level) => Some(level),
            Err(e) => {
                errors.push(format!(
                    "queue.max_priority: {e} (allowed range: 0-{})",
                    u32::MAX
                ));
                None
            }
        };

        if let Some(level) = max_priority {
            if level == 0 {
                warnings.push(
                    "queue.max_priority conforms to 0, the queue behaves as a plain FIFO"
                        .to_string(),
                );
            } else if f64::from(level) != self.queue.max_priority {
                warnings.push(format!(
                    "queue.max_priority {} will be truncated to {level}",
                    self.queue.max_priority
                ));
            }
        }

        // 2. Tasks
        for (idx, task) in self.tasks.iter().enumerate() {
            let label = if task.command.is_empty() {
                format!("tasks[{idx}]")
            } else {
                format!("tasks[{idx}] '{}'", task.command)
            };

            if task.command.trim().is_empty() {
                errors.push(format!("{label}: command cannot be empty"));
            }

            // Without a usable ceiling only the NaN check is meaningful.
            let ceiling = max_priority.unwrap_or(u32::MAX);
            match priority::conform(task.priority, Mode::Push { max_priority: ceiling }) {
                Ok(level) if max_priority.is_some() && f64::from(level) != task.priority => {
                    warnings.push(format!(
                        "{label}: priority {} will be conformed to {level}",
                        task.priority
                    ));
                }
                Ok(_) => {}
                Err(e) => errors.push(format!("{label}: {e}")),
            }
        }

        // 3. Capacity against the task list
        if let Ok(Some(capacity)) = priority::conform_capacity(self.queue.capacity)
            && self.tasks.len() > capacity
        {
            warnings.push(format!(
                "{} tasks exceed queue.capacity {capacity}; {} will be rejected",
                self.tasks.len(),
                self.tasks.len() - capacity
            ));
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Manifest validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }

        Ok(ValidationResult { warnings })
    }
}
