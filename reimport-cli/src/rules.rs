use anyhow::Result;
use reimport_core::{rules_operation, OutputFormatter};

use crate::OutputFormat;

pub fn handle_rules(output: OutputFormat, use_color: bool) -> Result<()> {
    let result = rules_operation(use_color)?;

    print!("{}", result.format(output.into()));
    if output == OutputFormat::Json {
        println!();
    }

    Ok(())
}
