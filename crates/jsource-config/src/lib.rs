//! Workspace configuration for jsource tools.
//!
//! A single TOML document carries the parser options, the printer layout and the logging setup:
//!
//! ```toml
//! [parse]
//! editable = true
//!
//! [format]
//! indent_style = "spaces"
//! indent_width = 2
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Once;

use jsource_format::FormatConfig;
use jsource_syntax::{ParseOptions, Parser};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// File names checked by [`discover_config_path`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["jsource.toml", ".jsource.toml"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsourceConfig {
    pub parse: ParseOptions,
    pub format: FormatConfig,
    pub logging: LoggingConfig,
}

impl JsourceConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::load_from_str(&text)?;
        tracing::debug!(target = "jsource.config", path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// A parser using the configured options.
    pub fn parser(&self) -> Parser {
        Parser::new(self.parse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// A simple level (`info`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,

    /// Write logs to stderr. When disabled, events are filtered but discarded.
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    /// Directives for the configured level. A bare level (any case, `warning`, or a verbosity
    /// number `0` to `5`) becomes its canonical name. Anything else is passed through as a
    /// directive string. A blank level means `info`.
    pub fn level_directives(&self) -> String {
        let level = self.level.trim();
        if level.is_empty() {
            return Self::default_level();
        }
        let bare = if level.eq_ignore_ascii_case("warning") {
            "warn"
        } else {
            level
        };
        match bare.parse::<LevelFilter>() {
            Ok(filter) => filter.to_string(),
            Err(_) => level.to_owned(),
        }
    }

    /// Configured directives followed by `overrides`, so that overrides win per target.
    pub(crate) fn directives_with(&self, overrides: Option<&str>) -> String {
        let level = self.level_directives();
        match overrides.map(str::trim).filter(|value| !value.is_empty()) {
            Some(overrides) => format!("{level},{overrides}"),
            None => level,
        }
    }

    /// Filter for the configured level plus `overrides`. Unparsable overrides are ignored and
    /// an unparsable level falls back to `info`.
    pub(crate) fn filter_for(&self, overrides: Option<&str>) -> EnvFilter {
        [self.directives_with(overrides), self.level_directives()]
            .iter()
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }

    /// The effective filter: the configured level with `RUST_LOG` layered on top.
    pub fn env_filter(&self) -> EnvFilter {
        self.filter_for(std::env::var("RUST_LOG").ok().as_deref())
    }

    fn make_writer(&self) -> BoxMakeWriter {
        if !self.stderr {
            return BoxMakeWriter::new(std::io::sink);
        }
        // Test harness output capture only sees the stdlib print macros.
        if cfg!(debug_assertions) {
            BoxMakeWriter::new(tracing_subscriber::fmt::writer::TestWriter::with_stderr)
        } else {
            BoxMakeWriter::new(std::io::stderr)
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The `Display` form quotes the offending input; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

/// First existing file among [`CONFIG_FILE_NAMES`] in `root`.
pub fn discover_config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .into_iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Loads the configuration for `root`, or the defaults when no config file exists.
pub fn load_for_root(root: &Path) -> Result<(JsourceConfig, Option<PathBuf>), ConfigError> {
    let Some(path) = discover_config_path(root) else {
        return Ok((JsourceConfig::default(), None));
    };
    let config = JsourceConfig::load_from_path(&path)?;
    Ok((config, Some(path)))
}

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// Safe to call multiple times; only the first call has an effect. An already installed global
/// subscriber is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(config.env_filter());
        let installed = if config.json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(config.make_writer()),
                )
                .try_init()
        } else {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(config.make_writer()),
                )
                .try_init()
        };
        if installed.is_ok() {
            tracing::debug!(
                target = "jsource.config",
                level = %config.level,
                json = config.json,
                "tracing initialized"
            );
        }
    });
}

#[cfg(test)]
mod tests;
