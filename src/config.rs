use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".citylistrc.json";

/// Words that cannot name the exported constant.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_export_name")]
    pub export_name: String,
}

fn default_input() -> String {
    "uscities.csv".to_string()
}

fn default_column() -> String {
    "city".to_string()
}

fn default_output() -> String {
    "cities.js".to_string()
}

fn default_export_name() -> String {
    "cities".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            column: default_column(),
            output: default_output(),
            export_name: default_export_name(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
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
    /// Directory that relative paths in `config` are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

/// Fully resolved inputs for one transform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub column: String,
    pub output: PathBuf,
    pub export_name: String,
}

impl Settings {
    /// Build settings from a loaded config. Paths from a config file are
    /// resolved against the directory holding it; defaults stay relative to
    /// the working directory.
    pub fn from_config(loaded: ConfigLoadResult) -> Self {
        let ConfigLoadResult {
            config,
            base_dir,
            from_file,
        } = loaded;
        let resolve = |path: String| {
            if from_file {
                base_dir.join(path)
            } else {
                PathBuf::from(path)
            }
        };
        Self {
            input: resolve(config.input),
            column: config.column,
            output: resolve(config.output),
            export_name: config.export_name,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.column.is_empty() {
            bail!("Column name must not be empty");
        }
        if !is_valid_identifier(&self.export_name) {
            bail!(
                "Invalid export name \"{}\": expected a JavaScript identifier",
                self.export_name
            );
        }
        Ok(())
    }
}

/// Checks that `name` can be used as `export const <name>`.
///
/// ```
/// use citylist::config::is_valid_identifier;
///
/// assert!(is_valid_identifier("cities"));
/// assert!(is_valid_identifier("$usCities_2"));
/// assert!(!is_valid_identifier("2cities"));
/// assert!(!is_valid_identifier("us-cities"));
/// assert!(!is_valid_identifier("const"));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') && !RESERVED_WORDS.contains(&name)
}
