//! 静的HTML出力の統合テスト

use portfolio_common::{ProjectRecord, SiteContent};
use portfolio_site::error::SiteError;
use portfolio_site::render::{render_site, RenderOptions};
use std::path::Path;
use tempfile::tempdir;

fn options(output: &Path) -> RenderOptions {
    RenderOptions {
        output_dir: output.to_path_buf(),
        assets_dir: None,
        year: 2026,
    }
}

fn scenario_content() -> SiteContent {
    let record = |id: &str, title: &str, tags: &[&str]| ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        image: format!("{}.png", id),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        demo_url: None,
        repo_url: Some(format!("https://example.com/{}", id)),
    };

    let mut content = SiteContent::default();
    content.projects = vec![
        record("1", "Enroll", &["React", "AWS"]),
        record("2", "DevDoc", &["Python", "AWS"]),
    ];
    content
}

#[test]
fn test_render_writes_index_tag_pages_and_manifest() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = render_site(&scenario_content(), &options(dir.path())).expect("出力失敗");

    // index + React + AWS + Python
    assert_eq!(report.pages, 4);
    assert_eq!(report.assets, 0);
    assert_eq!(report.written, 5);
    assert_eq!(report.unchanged, 0);

    for file in ["index.html", "tags/react.html", "tags/aws.html", "tags/python.html", "style.css", "manifest.json"] {
        assert!(dir.path().join(file).exists(), "ファイルがない: {}", file);
    }

    let python = std::fs::read_to_string(dir.path().join("tags/python.html")).unwrap();
    assert!(python.contains(">DevDoc<"));
    assert!(!python.contains(">Enroll<"));

    let aws = std::fs::read_to_string(dir.path().join("tags/aws.html")).unwrap();
    let enroll = aws.find(">Enroll<").expect("Enrollがない");
    let devdoc = aws.find(">DevDoc<").expect("DevDocがない");
    assert!(enroll < devdoc, "カタログ順が保たれていない");
}

#[test]
fn test_rerender_skips_unchanged_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let content = scenario_content();

    render_site(&content, &options(dir.path())).unwrap();
    let second = render_site(&content, &options(dir.path())).unwrap();

    assert_eq!(second.written, 0);
    assert_eq!(second.unchanged, 5);
}

#[test]
fn test_changed_content_rewrites_only_affected_pages() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut content = scenario_content();
    render_site(&content, &options(dir.path())).unwrap();

    content.projects[1].description = "Rewritten".to_string();
    let report = render_site(&content, &options(dir.path())).unwrap();

    // index / aws / python が変わる。react と style.css はそのまま
    assert_eq!(report.written, 3);
    assert_eq!(report.unchanged, 2);
}

#[test]
fn test_dropped_tag_page_is_removed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut content = scenario_content();
    render_site(&content, &options(dir.path())).unwrap();
    assert!(dir.path().join("tags/python.html").exists());

    content.projects[1].tags = vec!["AWS".to_string()];
    let report = render_site(&content, &options(dir.path())).unwrap();

    assert_eq!(report.pages, 3);
    assert_eq!(report.removed, 1);
    assert!(!dir.path().join("tags/python.html").exists());
    assert!(dir.path().join("tags/aws.html").exists());

    let manifest = std::fs::read_to_string(dir.path().join("manifest.json")).unwrap();
    assert!(!manifest.contains("tags/python.html"));
}

#[test]
fn test_unlisted_files_are_left_alone() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("CNAME"), "example.com").unwrap();

    let content = scenario_content();
    render_site(&content, &options(dir.path())).unwrap();
    let report = render_site(&content, &options(dir.path())).unwrap();

    assert_eq!(report.removed, 0);
    assert!(dir.path().join("CNAME").exists());
}

#[test]
fn test_deleted_file_is_rewritten() {
    let dir = tempdir().expect("Failed to create temp dir");
    let content = scenario_content();
    render_site(&content, &options(dir.path())).unwrap();

    std::fs::remove_file(dir.path().join("tags/react.html")).unwrap();
    let report = render_site(&content, &options(dir.path())).unwrap();

    assert_eq!(report.written, 1);
    assert!(dir.path().join("tags/react.html").exists());
}

#[test]
fn test_assets_are_copied_recursively() {
    let dir = tempdir().expect("Failed to create temp dir");
    let assets = tempdir().expect("Failed to create temp dir");
    std::fs::create_dir_all(assets.path().join("img")).unwrap();
    std::fs::write(assets.path().join("photo.jpg"), b"jpeg").unwrap();
    std::fs::write(assets.path().join("img/logo.png"), b"png").unwrap();
    std::fs::write(assets.path().join("style.css"), b"body{}").unwrap();

    let mut opts = options(dir.path());
    opts.assets_dir = Some(assets.path().to_path_buf());
    let report = render_site(&scenario_content(), &opts).unwrap();

    // style.css は生成物と衝突するのでスキップ
    assert_eq!(report.assets, 2);
    assert_eq!(std::fs::read(dir.path().join("img/logo.png")).unwrap(), b"png");
    assert_eq!(std::fs::read(dir.path().join("photo.jpg")).unwrap(), b"jpeg");
    let css = std::fs::read_to_string(dir.path().join("style.css")).unwrap();
    assert!(css.contains(".tabs-trigger"));
}

#[test]
fn test_missing_assets_dir_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut opts = options(dir.path());
    opts.assets_dir = Some(dir.path().join("no-such-assets"));

    let result = render_site(&scenario_content(), &opts);
    assert!(matches!(result, Err(SiteError::FileNotFound(_))));
}

#[test]
fn test_empty_catalog_renders_index_only() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut content = scenario_content();
    content.projects.clear();

    let report = render_site(&content, &options(dir.path())).unwrap();
    assert_eq!(report.pages, 1);

    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(index.contains("No projects match this filter."));
}

#[test]
fn test_duplicate_ids_fail_before_writing() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("dist");
    let mut content = scenario_content();
    content.projects[1].id = "1".to_string();

    let result = render_site(&content, &options(&out));
    assert!(matches!(result, Err(SiteError::Common(portfolio_common::Error::DuplicateProjectId(_)))));
    assert!(!out.exists());
}
