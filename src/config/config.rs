use std::{fs, path::Path};

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::error::{Error, Res};

pub const CONFIG_FILE: &str = "astwalk.toml";

pub static DEFAULT_CONFIG_TOML: &str = r#"# astwalk configuration

[options]
validate = true     # Validate trees before rendering
style = "postfix"   # Default render style (postfix|infix|outline)
debug-mode = false  # Log each visited node
"#;

/// How a tree is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Post-order, one token per line.
    Postfix,
    /// Parenthesized infix expression.
    Infix,
    /// Indented pre-order dump.
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Check the arity of every node before rendering.
    pub validate: bool,
    /// Style used when none is given on the command line.
    pub style: Style,
    /// Log each visited node. Raises the default log level from warn to
    /// debug unless RUST_LOG says otherwise.
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate: true,
            style: Style::Postfix,
            debug_mode: false,
        }
    }
}

impl Config {
    /// Config used by tests. Trees are rendered as given, so malformed
    /// trees can be inspected.
    pub fn test() -> Self {
        Self {
            validate: false,
            ..Self::default()
        }
    }

    /// Parse the contents of a config file. Missing options keep their
    /// default value.
    pub fn parse(src: &str) -> Res<Config> {
        let file: ConfigFile =
            toml::from_str(src).map_err(|e| Error::Config(e.message().to_owned()))?;
        let defaults = Config::default();
        let options = file.options;

        Ok(Config {
            validate: options.validate.unwrap_or(defaults.validate),
            style: options.style.unwrap_or(defaults.style),
            debug_mode: options.debug_mode.unwrap_or(defaults.debug_mode),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    options: Options,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Options {
    validate: Option<bool>,
    style: Option<Style>,
    debug_mode: Option<bool>,
}

/// Load config from path. A missing file gives the default config. Called
/// before logging is set up, so it does not log.
pub fn load_config_file(path: &Path) -> Res<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let src = fs::read_to_string(path)
        .map_err(|e| Error::Io(format!("failed to read file {}: {}", path.display(), e)))?;
    Config::parse(&src)
}
