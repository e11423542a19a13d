//! Rule generation and JSON rendering.
//!
//! One rule is produced per remap entry, in input order; the result is
//! rendered as pretty-printed JSON suitable for pasting into the
//! `complex_modifications` section of karabiner.json.

use anyhow::{Context, Result};

use crate::models::{RemapEntry, RemapRule};

/// Builds one Yubikey-scoped rule per remap entry, preserving entry order.
#[must_use]
pub fn generate_rules(entries: &[RemapEntry]) -> Vec<RemapRule> {
    entries.iter().map(RemapRule::for_remap).collect()
}

/// Renders rules as an indented JSON array (no trailing newline).
pub fn render_rules_json(rules: &[RemapRule]) -> Result<String> {
    serde_json::to_string_pretty(rules).context("Failed to serialize rules to JSON")
}
