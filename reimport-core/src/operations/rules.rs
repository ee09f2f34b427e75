use crate::output::RulesResult;
use crate::rules::{Rule, RuleSet, RETIRED_MODULES};
use anyhow::Result;

/// High-level rules operation - equivalent to `reimport rules`
///
/// Compiles the built-in table so a broken pattern surfaces here rather than
/// halfway through a migration.
pub fn rules_operation(use_color: bool) -> Result<RulesResult> {
    let rules = RuleSet::builtin()?;

    Ok(RulesResult {
        rules: rules.iter().map(Rule::summary).collect(),
        retired_modules: RETIRED_MODULES.iter().map(ToString::to_string).collect(),
        use_color,
    })
}
