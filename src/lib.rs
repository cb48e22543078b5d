//! Settings template resolver for the Claude Code toolkit.
//!
//! The toolkit ships a portable `settings.template.json` in which every
//! machine-specific path is written as `$CLAUDE_CONFIG_DIR`. This crate
//! substitutes the placeholder with the real installation root, checks that
//! the result is valid JSON, and verifies that every hook command the
//! settings reference exists on disk before the document is emitted.
//!
//! Settings that point at absent hook scripts would break Claude Code on the
//! next tool call, so emit and write modes refuse to produce output unless
//! validation passes.

pub mod cli;
pub mod error;
pub mod hooks;
pub mod resolver;

pub use error::{Result, SetupError};
pub use resolver::{ResolvedDocument, Resolver};
