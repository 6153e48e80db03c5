use std::io::Write;
use std::sync::{Arc, Mutex};

use jsource_format::{IndentStyle, LineEnding};
use jsource_model::Node;
use pretty_assertions::assert_eq;
use tracing_subscriber::layer::SubscriberExt;

use crate::{discover_config_path, load_for_root, ConfigError, JsourceConfig, LoggingConfig};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_with(logging: &LoggingConfig, overrides: Option<&str>, emit: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::registry()
        .with(logging.filter_for(overrides))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || writer.clone())
                .with_ansi(false),
        );
    tracing::subscriber::with_default(subscriber, emit);
    captured.text()
}

#[test]
fn empty_document_is_the_default_config() {
    let config = JsourceConfig::load_from_str("").unwrap();
    assert_eq!(config, JsourceConfig::default());
    assert!(!config.parse.editable);
    assert!(config.parse.literal_aware);
    assert_eq!(config.format.indent_style, IndentStyle::Tabs);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.stderr);
}

#[test]
fn loads_every_section() {
    let config = JsourceConfig::load_from_str(
        r#"
[parse]
editable = true
literal_aware = false

[format]
indent_style = "spaces"
indent_width = 2
newline = "crlf"
insert_final_newline = true

[logging]
level = "debug"
json = true
stderr = false
"#,
    )
    .unwrap();

    assert!(config.parse.editable);
    assert!(!config.parse.literal_aware);
    assert_eq!(config.format.indent_style, IndentStyle::Spaces);
    assert_eq!(config.format.indent_width, 2);
    assert_eq!(config.format.newline, LineEnding::Crlf);
    assert!(config.format.insert_final_newline);
    assert_eq!(
        config.logging,
        LoggingConfig {
            level: "debug".to_owned(),
            json: true,
            stderr: false,
        }
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let err = JsourceConfig::load_from_str("[format]\nmax_width = 80\n").unwrap_err();
    let ConfigError::Toml(message) = &err else {
        panic!("expected a toml error, got {err:?}");
    };
    assert!(message.contains("max_width"), "{message}");

    assert!(JsourceConfig::load_from_str("[lint]\n").is_err());
}

#[test]
fn toml_errors_do_not_echo_the_document() {
    let err = JsourceConfig::load_from_str("[parse]\neditable = \"sure\"\n").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("failed to parse toml config: "), "{text}");
    assert!(!text.contains("[parse]"), "{text}");
}

#[test]
fn configured_parser_uses_the_parse_options() {
    let config = JsourceConfig::load_from_str("[parse]\neditable = true\n").unwrap();
    let class = config.parser().parse_class("class Empty {\n}").unwrap();
    assert!(class.is_editable());
}

#[test]
fn load_from_path_and_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsource.toml");
    std::fs::write(&path, "[format]\nindent_width = 8\n").unwrap();

    let config = JsourceConfig::load_from_path(&path).unwrap();
    assert_eq!(config.format.indent_width, 8);

    let missing = dir.path().join("missing.toml");
    let err = JsourceConfig::load_from_path(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"), "{err}");
}

#[test]
fn discovery_prefers_the_plain_file_name() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(discover_config_path(dir.path()), None);
    let (config, path) = load_for_root(dir.path()).unwrap();
    assert_eq!(config, JsourceConfig::default());
    assert_eq!(path, None);

    std::fs::write(dir.path().join(".jsource.toml"), "[parse]\neditable = true\n").unwrap();
    assert_eq!(
        discover_config_path(dir.path()),
        Some(dir.path().join(".jsource.toml"))
    );

    std::fs::write(dir.path().join("jsource.toml"), "").unwrap();
    let (config, path) = load_for_root(dir.path()).unwrap();
    assert_eq!(path, Some(dir.path().join("jsource.toml")));
    assert!(!config.parse.editable);
}

fn logging(level: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_owned(),
        ..LoggingConfig::default()
    }
}

#[test]
fn bare_levels_become_canonical_names() {
    assert_eq!(logging(" DEBUG ").level_directives(), "debug");
    assert_eq!(logging("Warning").level_directives(), "warn");
    assert_eq!(logging("OFF").level_directives(), "off");
    assert_eq!(logging("4").level_directives(), "debug");
    assert_eq!(logging("").level_directives(), "info");
    assert_eq!(
        logging("warn,jsource.syntax=trace").level_directives(),
        "warn,jsource.syntax=trace"
    );
}

#[test]
fn overrides_follow_the_configured_level() {
    let config = logging("Warning");
    assert_eq!(config.directives_with(None), "warn");
    assert_eq!(config.directives_with(Some("  ")), "warn");
    assert_eq!(
        config.directives_with(Some(" jsource_syntax=trace ")),
        "warn,jsource_syntax=trace"
    );
}

#[test]
fn overrides_win_per_target() {
    let text = capture_with(&logging("warn"), Some("jsource_config=trace"), || {
        tracing::info!(target: "other_target", "not visible");
        tracing::trace!(target: "jsource_config", "visible trace");
    });
    assert!(!text.contains("not visible"), "{text}");
    assert!(text.contains("visible trace"), "{text}");
}

#[test]
fn level_filters_events() {
    let text = capture_with(&logging("DEBUG"), None, || {
        tracing::trace!("not visible");
        tracing::debug!("visible");
    });
    assert!(!text.contains("not visible"), "{text}");
    assert!(text.contains("visible"), "{text}");
}

#[test]
fn directive_strings_filter_by_target() {
    let text = capture_with(&logging("warn,jsource_config=trace"), None, || {
        tracing::info!(target: "other_target", "not visible");
        tracing::warn!(target: "other_target", "visible warn");
        tracing::trace!(target: "jsource_config", "visible trace");
    });
    assert!(!text.contains("not visible"), "{text}");
    assert!(text.contains("visible warn"), "{text}");
    assert!(text.contains("visible trace"), "{text}");
}

#[test]
fn init_tracing_is_idempotent() {
    let logging = LoggingConfig {
        stderr: false,
        ..LoggingConfig::default()
    };
    crate::init_tracing(&logging);
    crate::init_tracing(&logging);
}
