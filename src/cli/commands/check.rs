use anyhow::Result;

use super::helper::build_linter;
use crate::cli::{args::CheckCommand, exit_status::ExitStatus, report};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let linter = build_linter(&cmd.common, &cmd.rules)?;
    let result = linter.lint(cmd.max_warnings)?;

    report::report(&result);

    Ok(ExitStatus::from_result(&result))
}
