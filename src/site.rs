//! サイトコンテンツの解決

use crate::config::Config;
use crate::error::{Result, SiteError};
use portfolio_common::SiteContent;
use std::path::Path;

/// コンテンツを読み込む
///
/// パスが解決できなければ組み込みコンテンツを返す。
pub fn load_content(config: &Config, flag: Option<&Path>) -> Result<SiteContent> {
    match config.resolve_catalog(flag) {
        Some(path) => load_content_file(&path),
        None => {
            tracing::debug!("using built-in site content");
            Ok(SiteContent::default())
        }
    }
}

/// JSONファイルからコンテンツを読み込み、プロジェクトIDを検証
pub fn load_content_file(path: &Path) -> Result<SiteContent> {
    if !path.exists() {
        return Err(SiteError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    let content = SiteContent::from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        projects = content.projects.len(),
        experiences = content.experiences.len(),
        "loaded site content"
    );
    Ok(content)
}
