use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, keys::keys, languages::languages},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
