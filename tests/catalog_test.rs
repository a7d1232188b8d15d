//! コンテンツJSONと設定ファイルの統合テスト

use portfolio_common::SiteContent;
use portfolio_site::config::Config;
use portfolio_site::error::SiteError;
use portfolio_site::site::{load_content, load_content_file};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_exported_content_loads_back() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("site.json");

    let content = SiteContent::default();
    std::fs::write(&path, content.to_json().unwrap()).unwrap();

    let loaded = load_content_file(&path).expect("読み込み失敗");
    assert_eq!(loaded, content);
}

#[test]
fn test_load_missing_file() {
    let result = load_content_file(&PathBuf::from("/nonexistent/site-12345.json"));
    assert!(matches!(result, Err(SiteError::FileNotFound(_))));
}

#[test]
fn test_load_duplicate_ids() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dup.json");

    let mut content = SiteContent::default();
    let first = content.projects[0].clone();
    content.projects.push(first);
    std::fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    let result = load_content_file(&path);
    assert!(matches!(
        result,
        Err(SiteError::Common(portfolio_common::Error::DuplicateProjectId(id))) if id == "1"
    ));
}

#[test]
fn test_flag_path_is_used() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("custom.json");

    let mut content = SiteContent::default();
    content.owner = "Someone Else".to_string();
    std::fs::write(&path, content.to_json().unwrap()).unwrap();

    let loaded = load_content(&Config::default(), Some(&path)).unwrap();
    assert_eq!(loaded.owner, "Someone Else");
}

#[test]
fn test_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        catalog_path: Some(PathBuf::from("site.json")),
        output_dir: PathBuf::from("public_html"),
        assets_dir: Some(PathBuf::from("public")),
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_missing_file_is_default() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(loaded, Config::default());
}
