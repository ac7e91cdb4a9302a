use anyhow::Result;

use super::helper::build_linter;
use crate::cli::{
    args::{LanguagesCommand, RuleArgs},
    exit_status::ExitStatus,
    report,
};

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let linter = build_linter(&cmd.common, &RuleArgs::default())?;
    report::print_languages(&linter.get_languages()?);
    Ok(ExitStatus::Success)
}
