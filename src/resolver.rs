//! Settings template resolution.
//!
//! A template is plain text containing zero or more `$CLAUDE_CONFIG_DIR`
//! placeholders. Resolution is a pure textual substitution followed by a JSON
//! parse; the parsed value is kept alongside the substituted text so the
//! emitted bytes are always the text verbatim, never a re-serialization.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{Result, SetupError};
use crate::hooks;

/// Placeholder token replaced with the installation root.
pub const PLACEHOLDER: &str = "$CLAUDE_CONFIG_DIR";

/// Default template filename, co-located with the installation root.
pub const DEFAULT_TEMPLATE: &str = "settings.template.json";

/// Resolver inputs. The installation root is passed in explicitly so the
/// resolver stays pure and testable with arbitrary roots.
#[derive(Debug, Clone)]
pub struct Resolver {
    pub template_path: PathBuf,
    pub install_root: PathBuf,
}

/// The template after substitution: the exact output text plus its parsed
/// form for hook extraction.
#[derive(Debug, Clone)]
pub struct ResolvedDocument {
    pub text: String,
    pub value: Value,
}

/// Replace every placeholder occurrence with the installation root.
/// Infallible; a template without the token passes through unchanged.
pub fn substitute(template: &str, install_root: &str) -> String {
    template.replace(PLACEHOLDER, install_root)
}

impl Resolver {
    pub fn new(template_path: PathBuf, install_root: PathBuf) -> Self {
        Self {
            template_path,
            install_root,
        }
    }

    /// Load the template, substitute the placeholder, and parse the result.
    ///
    /// A missing or unreadable template maps to [`SetupError::TemplateNotFound`];
    /// text that does not parse after substitution maps to
    /// [`SetupError::InvalidJson`] carrying serde_json's detail.
    pub fn resolve(&self) -> Result<ResolvedDocument> {
        let raw = fs::read_to_string(&self.template_path).map_err(|source| {
            SetupError::TemplateNotFound {
                path: self.template_path.clone(),
                source,
            }
        })?;

        let text = substitute(&raw, &self.install_root.to_string_lossy());
        let value: Value = serde_json::from_str(&text)?;

        Ok(ResolvedDocument { text, value })
    }
}

impl ResolvedDocument {
    /// Every hook command referenced by the settings, deduplicated.
    pub fn hook_commands(&self) -> Vec<String> {
        hooks::extract_hook_commands(&self.value)
    }
}
