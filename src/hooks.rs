//! Hook descriptor extraction and on-disk validation.
//!
//! Claude Code's `hooks` section maps event names (`PreToolUse`, …) to lists
//! of matcher objects; each matcher holds a `hooks` list of descriptors, and
//! each descriptor names a `command`. This module only checks that command
//! paths exist as files — hook contents are Claude Code's business.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SetupError};

/// One entry in a matcher's `hooks` list.
#[derive(Debug, Clone, Deserialize)]
pub struct HookDescriptor {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub command: String,
}

/// Collect every non-empty `command` under the `hooks` section, without
/// duplicates. A missing or empty section yields an empty list, and entries
/// of unexpected shape are skipped rather than treated as errors.
pub fn extract_hook_commands(settings: &Value) -> Vec<String> {
    let mut commands = Vec::new();

    let Some(events) = settings.get("hooks").and_then(Value::as_object) else {
        return commands;
    };

    for matchers in events.values() {
        let Some(matchers) = matchers.as_array() else {
            continue;
        };
        for matcher in matchers {
            let Some(entries) = matcher.get("hooks").and_then(Value::as_array) else {
                continue;
            };
            for entry in entries {
                let Ok(descriptor) = serde_json::from_value::<HookDescriptor>(entry.clone())
                else {
                    continue;
                };
                if descriptor.command.is_empty() {
                    continue;
                }
                if !commands.contains(&descriptor.command) {
                    commands.push(descriptor.command);
                }
            }
        }
    }

    commands
}

/// Check each command path for existence as a regular file.
///
/// All missing paths are collected before failing; the report never stops at
/// the first absent hook.
pub fn validate_paths(commands: &[String]) -> Result<()> {
    let missing: Vec<PathBuf> = commands
        .iter()
        .map(PathBuf::from)
        .filter(|path| !path.is_file())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SetupError::MissingHookPaths(missing))
    }
}
