use super::*;

#[test]
fn config_default_values() {
    let config = Config::default();

    assert_eq!(config.content.max_lines, 500);
    assert_eq!(config.hotspots.threshold, 3);
    assert_eq!(
        config.scanner.extensions,
        vec!["cpp", "c", "cc", "h", "hpp"]
    );
    assert_eq!(config.scanner.exclude_dirs, vec!["extern", "build"]);
    assert!(config.scanner.exclude.is_empty());
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[scanner]
extensions = ["rs"]

[content]
max_lines = 300
"#,
    )
    .unwrap();

    assert_eq!(config.scanner.extensions, vec!["rs"]);
    assert_eq!(config.scanner.exclude_dirs, vec!["extern", "build"]);
    assert_eq!(config.content.max_lines, 300);
    assert_eq!(config.hotspots.threshold, 3);
}

#[test]
fn unknown_keys_are_rejected() {
    let result = toml::from_str::<Config>("[content]\nmax_line = 10\n");
    assert!(result.is_err());

    let result = toml::from_str::<Config>("[structure]\nmax_files = 10\n");
    assert!(result.is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = Config::default();
    config.scanner.exclude.push("**/generated/**".to_string());
    config.hotspots.threshold = 7;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}
