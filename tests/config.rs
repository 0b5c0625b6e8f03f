use schemagen::config::database_from_url;
use schemagen::{Config, ExportError, RenderOptions};
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_settings_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schemagen.toml");
    fs::write(
        &path,
        r#"
database_url = "mysql://root@localhost:3306/shop"

[render]
model_namespace = "Shop\\Models"
"#,
    )
    .unwrap();

    let config = Config::load(&path, true).unwrap();
    assert_eq!(config.database_url().unwrap(), "mysql://root@localhost:3306/shop");
    assert_eq!(config.database_name().unwrap(), "shop");
    assert_eq!(config.render.model_namespace, "Shop\\Models");
    assert_eq!(config.render.go_package, "models");
}

#[test]
fn explicit_database_wins_over_url() {
    let config = Config::from_toml(
        "database_url = \"mysql://root@localhost/shop\"\ndatabase = \"inventory\"\n",
    )
    .unwrap();
    assert_eq!(config.database_name().unwrap(), "inventory");
}

#[test]
fn missing_file_is_optional_unless_required() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load(&path, false).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.render, RenderOptions::default());
    assert!(matches!(config.database_url(), Err(ExportError::Config(_))));
    assert!(matches!(config.database_name(), Err(ExportError::Config(_))));

    assert!(matches!(Config::load(&path, true), Err(ExportError::Io(_))));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Config::from_toml("databse_url = \"mysql://x/y\"\n").unwrap_err();
    assert!(matches!(err, ExportError::Toml(_)));
}

#[test]
fn database_name_from_url() {
    assert_eq!(
        database_from_url("mysql://user:pw@db:3306/shop?ssl-mode=disabled").as_deref(),
        Some("shop")
    );
    assert_eq!(database_from_url("mysql://localhost/").as_deref(), None);
    assert_eq!(database_from_url("mysql://localhost").as_deref(), None);
    assert_eq!(database_from_url("not a url").as_deref(), None);
}
