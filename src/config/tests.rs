use super::{ClapConfig, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_loads_defaults() {
    let config = ClapConfig::defaults().expect("Should load default config");

    assert_eq!(config.output, "clap.file");
    assert!(config.extensions.is_empty());
    assert!(!config.follow_links);
    assert!(!config.use_gitignore);
    assert!(config.filter().is_empty());
}

#[test]
fn test_cli_overrides_win() {
    let overrides = ConfigOverrides {
        output: Some("all.txt".to_string()),
        extensions: vec!["Go".to_string(), ".md".to_string()],
        follow_links: true,
        use_gitignore: false,
    };
    let config = ClapConfig::load(None, &overrides).unwrap();

    assert_eq!(config.output, "all.txt");
    assert!(config.follow_links);
    assert!(config.filter().contains(".go"));
    assert!(config.filter().contains(".md"));
}

#[test]
fn test_custom_toml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("clap.toml");
    fs::write(
        &path,
        r#"
output = "bundle.txt"
extensions = ["rs", "toml"]
use_gitignore = true
"#,
    )
    .unwrap();

    let config = ClapConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();
    assert_eq!(config.output, "bundle.txt");
    assert_eq!(config.extensions, vec!["rs", "toml"]);
    assert!(config.use_gitignore);
    assert!(!config.follow_links);
}

#[test]
fn test_custom_yaml_config_is_overridden_by_cli() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("clap.yml");
    fs::write(&path, "output: from-file.txt\nextensions: [py]\n").unwrap();

    let overrides = ConfigOverrides {
        output: Some("from-cli.txt".to_string()),
        ..Default::default()
    };
    let config = ClapConfig::load(Some(&path), &overrides).unwrap();

    assert_eq!(config.output, "from-cli.txt");
    assert_eq!(config.extensions, vec!["py"]);
}

#[test]
fn test_custom_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("clap.json");
    fs::write(&path, r#"{ "follow_links": true }"#).unwrap();

    let config = ClapConfig::load(Some(&path), &ConfigOverrides::default()).unwrap();
    assert!(config.follow_links);
    assert_eq!(config.output, "clap.file");
}

#[test]
fn test_missing_custom_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let err = ClapConfig::load(Some(&path), &ConfigOverrides::default()).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_empty_output_name_is_rejected() {
    let overrides = ConfigOverrides {
        output: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(ClapConfig::load(None, &overrides).is_err());
}

#[test]
fn test_empty_extension_token_is_a_bare_dot() {
    let overrides = ConfigOverrides {
        extensions: vec![String::new()],
        ..Default::default()
    };
    let config = ClapConfig::load(None, &overrides).unwrap();

    assert!(config.filter().contains("."));
    assert!(config.filter().matches(std::path::Path::new("dir/weird.")));
    assert!(!config.filter().matches(std::path::Path::new("dir/plain")));
}
