//! The substitution engine.
//!
//! Rules are applied one after another, each over the output of the previous
//! one, so a later rule sees text introduced by an earlier replacement. Every
//! match of a rule is replaced, but a rule is recorded as fired only once per
//! pass no matter how many occurrences it rewrote.

use crate::error::MigrateError;
use crate::rules::{Rule, RuleSet};
use std::borrow::Cow;
use std::path::Path;

/// Result of running a rule set over one piece of text
#[derive(Debug, Clone)]
pub struct Substitution<'r> {
    pub content: String,
    pub fired: Vec<&'r Rule>,
    pub changed: bool,
}

pub fn apply<'r>(content: &str, rules: &'r RuleSet) -> Substitution<'r> {
    let mut current = Cow::Borrowed(content);
    let mut fired = Vec::new();

    for rule in rules {
        if !rule.pattern.is_match(&current) {
            continue;
        }

        let replaced = match rule
            .pattern
            .replace_all(&current, rule.replacement.as_str())
        {
            Cow::Borrowed(_) => None,
            Cow::Owned(text) => Some(text),
        };
        if let Some(text) = replaced {
            current = Cow::Owned(text);
        }
        fired.push(rule);
    }

    let changed = current != content;
    Substitution {
        content: current.into_owned(),
        fired,
        changed,
    }
}

/// Decode raw file bytes as UTF-8, attributing failures to `path`
pub fn decode(path: &Path, bytes: Vec<u8>) -> Result<String, MigrateError> {
    String::from_utf8(bytes).map_err(|source| MigrateError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
