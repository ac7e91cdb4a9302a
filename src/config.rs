use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;

use crate::{
    error::LintError,
    issues::{Rule, Severity},
};

pub const CONFIG_FILE_NAME: &str = ".keylintrc.json";

/// Level a severity rule runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    /// Never evaluate the rule.
    Disable,
    Warning,
    Error,
}

impl ErrorType {
    /// Severity of findings produced at this level, `None` when disabled.
    pub fn severity(self) -> Option<Severity> {
        match self {
            ErrorType::Disable => None,
            ErrorType::Warning => Some(Severity::Warning),
            ErrorType::Error => Some(Severity::Error),
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Disable => write!(f, "disable"),
            ErrorType::Warning => write!(f, "warning"),
            ErrorType::Error => write!(f, "error"),
        }
    }
}

/// On/off switch for non-severity options.
///
/// Accepts `"enable"`, `"disable"`, `true` and `false` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToggleRule {
    Enable,
    #[default]
    Disable,
}

impl ToggleRule {
    pub fn is_enabled(self) -> bool {
        self == ToggleRule::Enable
    }
}

impl From<bool> for ToggleRule {
    fn from(enabled: bool) -> Self {
        if enabled {
            ToggleRule::Enable
        } else {
            ToggleRule::Disable
        }
    }
}

impl<'de> Deserialize<'de> for ToggleRule {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(flag) => Ok(flag.into()),
            Raw::Name(name) => match name.as_str() {
                "enable" => Ok(ToggleRule::Enable),
                "disable" => Ok(ToggleRule::Disable),
                other => Err(D::Error::custom(format!(
                    "unknown variant `{}`, expected `enable` or `disable`",
                    other
                ))),
            },
        }
    }
}

/// Rule configuration for a lint run.
///
/// Deserializing a partial object merges it over [`RulesConfig::default`]
/// field by field. Unknown option names and out-of-domain values are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RulesConfig {
    pub keys_on_views: ErrorType,
    pub zombie_keys: ErrorType,
    pub empty_keys: ErrorType,
    /// Warning count at or above which a result is "full of warnings".
    pub max_warning: usize,
    pub deep_search: ToggleRule,
    /// Exact key paths excluded from every rule.
    pub ignored_keys: Vec<String>,
    /// Extra extraction patterns, each with exactly one capture group.
    pub custom_reg_exp_to_find_keys: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            keys_on_views: ErrorType::Warning,
            zombie_keys: ErrorType::Warning,
            empty_keys: ErrorType::Warning,
            max_warning: 0,
            deep_search: ToggleRule::Disable,
            ignored_keys: Vec::new(),
            custom_reg_exp_to_find_keys: Vec::new(),
        }
    }
}

impl RulesConfig {
    /// Parse and validate a JSON rules object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| LintError::Config(format!("rules are not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Build from an already parsed JSON value, merging over defaults.
    pub fn from_value(value: Value) -> Result<Self> {
        let config: RulesConfig =
            serde_json::from_value(value).map_err(|e| LintError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate values serde cannot check.
    ///
    /// Every custom pattern must compile and define exactly one capture group.
    pub fn validate(&self) -> Result<()> {
        self.custom_patterns().map(|_| ())
    }

    /// Compile `customRegExpToFindKeys`.
    pub fn custom_patterns(&self) -> Result<Vec<Regex>> {
        self.custom_reg_exp_to_find_keys
            .iter()
            .map(|pattern| -> Result<Regex> {
                let regex = Regex::new(pattern).map_err(|e| {
                    LintError::Config(format!(
                        "invalid pattern in 'customRegExpToFindKeys': \"{}\" ({})",
                        pattern, e
                    ))
                })?;
                // captures_len counts the implicit whole-match group.
                if regex.captures_len() != 2 {
                    return Err(LintError::Config(format!(
                        "pattern \"{}\" in 'customRegExpToFindKeys' must define exactly one capture group",
                        pattern
                    ))
                    .into());
                }
                Ok(regex)
            })
            .collect()
    }

    /// Severity the given rule reports at, `None` when disabled.
    pub fn severity_of(&self, rule: Rule) -> Option<Severity> {
        match rule {
            Rule::KeysOnViews => self.keys_on_views.severity(),
            Rule::ZombieKeys => self.zombie_keys.severity(),
            Rule::EmptyKeys => self.empty_keys.severity(),
        }
    }

    pub fn is_deep_search(&self) -> bool {
        self.deep_search.is_enabled()
    }

    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_keys.iter().any(|k| k == key)
    }
}

/// Contents of a `.keylintrc.json` file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Source path, glob or comma-separated list.
    #[serde(default)]
    pub project: Option<String>,
    /// Language file path, glob or comma-separated list.
    #[serde(default)]
    pub languages: Option<String>,
    /// Paths and globs excluded from both sets.
    #[serde(default)]
    pub ignore: Option<String>,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        project: Some("./src/**/*.{html,ts,tsx,js,jsx}".to_string()),
        languages: Some("./src/locales/*.json".to_string()),
        ignore: None,
        rules: RulesConfig::default(),
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                LintError::Config(format!("{} in {}", e, path.display()))
            })?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
