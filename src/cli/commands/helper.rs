use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::{
    cli::args::{CommonArgs, RuleArgs},
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    core::Linter,
};

/// Build a [`Linter`] from CLI arguments, the config file and defaults.
///
/// Priority: CLI arguments > `.keylintrc.json` > defaults. Relative paths
/// resolve against the current directory.
pub fn build_linter(common: &CommonArgs, rule_args: &RuleArgs) -> Result<Linter> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    build_linter_in(&cwd, common, rule_args)
}

pub fn build_linter_in(dir: &Path, common: &CommonArgs, rule_args: &RuleArgs) -> Result<Linter> {
    let ConfigLoadResult { config, path } = load_config(dir)?;

    if common.verbose {
        match &path {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    let project = common.project.clone().or(config.project).ok_or_else(|| {
        anyhow!(
            "No project path given. Use --project or set \"project\" in {}",
            CONFIG_FILE_NAME
        )
    })?;
    let languages = common.languages.clone().or(config.languages).ok_or_else(|| {
        anyhow!(
            "No languages path given. Use --languages or set \"languages\" in {}",
            CONFIG_FILE_NAME
        )
    })?;
    let ignore = common.ignore.clone().or(config.ignore);

    let mut rules = config.rules;
    rule_args.apply(&mut rules);

    Ok(
        Linter::new(project, languages, ignore.as_deref(), Some(rules))
            .with_base_dir(dir)
            .with_verbose(common.verbose),
    )
}
