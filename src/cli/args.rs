//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Cross-check view keys against language files
//! - `keys`: List every used or declared key
//! - `languages`: List loaded languages with their key counts
//! - `init`: Initialize a keylint configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{ErrorType, RulesConfig, ToggleRule};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Path arguments shared by every command that reads a project.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source views: glob, directory, file or comma-separated list (overrides config file)
    #[arg(short, long, env = "KEYLINT_PROJECT")]
    pub project: Option<String>,

    /// Language files: glob, directory, file or comma-separated list (overrides config file)
    #[arg(short, long, env = "KEYLINT_LANGUAGES")]
    pub languages: Option<String>,

    /// Paths or globs to exclude from both sets (overrides config file)
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rule overrides, applied over the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct RuleArgs {
    /// Level for keys used in views but declared in no language
    #[arg(long, value_enum)]
    pub keys_on_views: Option<ErrorType>,

    /// Level for keys declared but never used
    #[arg(long, value_enum)]
    pub zombie_keys: Option<ErrorType>,

    /// Level for empty translation values
    #[arg(long, value_enum)]
    pub empty_keys: Option<ErrorType>,

    /// Warning count at which the check fails
    #[arg(long)]
    pub max_warning: Option<usize>,

    /// Resolve namespace usages such as t(`errors.${code}`)
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "enable")]
    pub deep_search: Option<ToggleRule>,

    /// Key excluded from every rule (repeatable)
    #[arg(long = "ignored-keys", value_name = "KEY")]
    pub ignored_keys: Vec<String>,

    /// Extra key pattern with one capture group (repeatable)
    #[arg(long = "custom-pattern", value_name = "REGEX")]
    pub custom_patterns: Vec<String>,
}

impl RuleArgs {
    /// Override `rules` with every option given on the command line.
    ///
    /// Repeatable options extend the configured lists.
    pub fn apply(&self, rules: &mut RulesConfig) {
        if let Some(level) = self.keys_on_views {
            rules.keys_on_views = level;
        }
        if let Some(level) = self.zombie_keys {
            rules.zombie_keys = level;
        }
        if let Some(level) = self.empty_keys {
            rules.empty_keys = level;
        }
        if let Some(max) = self.max_warning {
            rules.max_warning = max;
        }
        if let Some(toggle) = self.deep_search {
            rules.deep_search = toggle;
        }
        rules.ignored_keys.extend(self.ignored_keys.iter().cloned());
        rules
            .custom_reg_exp_to_find_keys
            .extend(self.custom_patterns.iter().cloned());
    }
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Override the warning threshold for this run only
    #[arg(long)]
    pub max_warnings: Option<usize>,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check views against language files (keys on views, zombie keys, empty keys)
    Check(CheckCommand),
    /// List every key used in views or declared in a language
    Keys(KeysCommand),
    /// List loaded languages and their key counts
    Languages(LanguagesCommand),
    /// Initialize a new .keylintrc.json configuration file
    Init,
}
