use crate::asm::OutputFormat;
use crate::project::Config;

#[test]
fn config_defaults() {
    let config = Config::default();

    assert_eq!(config.label_prefix(), "loc");
    assert!(config.show_addresses());
    assert_eq!(config.indent(), 4);
    assert_eq!(config.format(), OutputFormat::Text);
}

#[test]
fn config_empty_file() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_file() {
    let config: Config =
        serde_json::from_str(r#"{"label_prefix": "L", "format": "JSON", "indent": 2}"#).unwrap();

    assert_eq!(config.label_prefix(), "L");
    assert!(config.show_addresses());
    assert_eq!(config.indent(), 2);
    assert_eq!(config.format(), OutputFormat::Json);
}

#[test]
fn config_bad_format() {
    let config: Result<Config, _> = serde_json::from_str(r#"{"format": "html"}"#);

    assert!(config.is_err());
}

#[test]
fn config_missing_file() {
    let err = Config::read("this-file-does-not-exist.json").unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
