use crate::error::MigrateError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pattern/replacement pair as written in the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// A named group of rules. The name is only used for display.
#[derive(Debug, Clone, Copy)]
pub struct RuleCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub rules: &'static [RuleSpec],
}

const fn rule(pattern: &'static str, replacement: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        replacement,
    }
}

/// Generic UI components that moved into the `oxui` crate
pub const UI_RULES: RuleCategory = RuleCategory {
    name: "ui",
    description: "UI components moved to oxui",
    rules: &[
        rule(r"use crate::ui::shadcn::", r"use oxui::shadcn::"),
        rule(r"use crate::ui::radix::", r"use oxui::radix::"),
        rule(r"use crate::ui::custom::", r"use oxui::custom::"),
        rule(
            r"use crate::ui::components::animated_grid",
            r"use oxui::components::animated_grid",
        ),
        rule(
            r"use crate::ui::components::confirm_dialog",
            r"use oxui::components::confirm_dialog",
        ),
        rule(
            r"use crate::ui::components::error",
            r"use oxui::components::error",
        ),
        rule(
            r"use crate::ui::components::form",
            r"use oxui::components::form",
        ),
        rule(
            r"use crate::ui::components::loading_overlay",
            r"use oxui::components::loading_overlay",
        ),
        rule(
            r"use crate::ui::components::portal_v2",
            r"use oxui::components::portal_v2",
        ),
    ],
};

/// Domain-specific components that moved into `ruxlog_shared`
pub const DOMAIN_RULES: RuleCategory = RuleCategory {
    name: "domain",
    description: "Domain components moved to ruxlog_shared",
    rules: &[
        rule(
            r"use crate::ui::components::tag",
            r"use ruxlog_shared::components::tag",
        ),
        rule(
            r"use crate::ui::components::user_avatar",
            r"use ruxlog_shared::components::user_avatar",
        ),
    ],
};

pub const STORE_RULES: RuleCategory = RuleCategory {
    name: "store",
    description: "Store modules moved to ruxlog_shared",
    rules: &[
        rule(r"use crate::store::", r"use ruxlog_shared::store::"),
        rule(r"from crate::store", r"from ruxlog_shared::store"),
    ],
};

/// The built-in rule table, in application order
pub const RULE_TABLE: &[RuleCategory] = &[UI_RULES, DOMAIN_RULES, STORE_RULES];

/// Module directories, relative to the scanned source root, that are dead
/// once every import has been rewritten
pub const RETIRED_MODULES: &[&str] = &["ui", "store"];

/// A compiled substitution rule
#[derive(Debug, Clone)]
pub struct Rule {
    pub category: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl Rule {
    pub fn new(category: &str, pattern: &str, replacement: &str) -> Result<Self, MigrateError> {
        let regex = Regex::new(pattern).map_err(|source| MigrateError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            category: category.to_string(),
            pattern: regex,
            replacement: replacement.to_string(),
        })
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            category: self.category.clone(),
            pattern: self.pattern_str().to_string(),
            replacement: self.replacement.clone(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern_str(), self.replacement)
    }
}

/// Owned, serializable view of a rule for reports and listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub category: String,
    pub pattern: String,
    pub replacement: String,
}

impl fmt::Display for RuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.replacement)
    }
}

/// Ordered, immutable sequence of compiled rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile the built-in rule table
    pub fn builtin() -> Result<Self, MigrateError> {
        Self::compile(RULE_TABLE)
    }

    pub fn compile(categories: &[RuleCategory]) -> Result<Self, MigrateError> {
        let mut rules = Vec::new();
        for category in categories {
            for spec in category.rules {
                rules.push(Rule::new(category.name, spec.pattern, spec.replacement)?);
            }
        }
        Ok(Self { rules })
    }

    /// Build an ad-hoc rule set, all rules under one category
    pub fn from_pairs(category: &str, pairs: &[(&str, &str)]) -> Result<Self, MigrateError> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::new(category, pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
