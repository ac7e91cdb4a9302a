use anyhow::Result;

use super::helper::build_linter;
use crate::cli::{args::KeysCommand, exit_status::ExitStatus, report};

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let linter = build_linter(&cmd.common, &cmd.rules)?;
    report::print_keys(&linter.get_keys()?);
    Ok(ExitStatus::Success)
}
