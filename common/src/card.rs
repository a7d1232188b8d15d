//! プロジェクトカードの表示データ
//!
//! 未指定の項目は固定の既定値で埋める。既定値の適用は `CardProps::resolve` の1箇所のみ。

use crate::types::ProjectRecord;

pub const DEFAULT_TITLE: &str = "Project Title";
pub const DEFAULT_DESCRIPTION: &str =
    "A short description of the project showcasing the key features and technologies used.";
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=600&q=80";
pub const DEFAULT_TAGS: &[&str] = &["React", "TypeScript", "Tailwind CSS"];
/// リンク先がないときの中立なリンク
pub const DEFAULT_REPO_URL: &str = "#";

/// カードに渡す値（未指定は None）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub repo_url: Option<String>,
}

/// 既定値適用後のカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub repo_url: String,
}

impl ProjectCard {
    /// 画像のaltテキスト
    pub fn image_alt(&self) -> &str {
        &self.title
    }

    /// 新しいタブで開くリンク属性
    pub const LINK_TARGET: &'static str = "_blank";
    pub const LINK_REL: &'static str = "noopener noreferrer";
}

impl Default for ProjectCard {
    fn default() -> Self {
        CardProps::default().resolve()
    }
}

impl CardProps {
    /// 既定値とマージして表示データを作る
    pub fn resolve(self) -> ProjectCard {
        ProjectCard {
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: self
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image: self.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            tags: self
                .tags
                .unwrap_or_else(|| DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()),
            repo_url: self.repo_url.unwrap_or_else(|| DEFAULT_REPO_URL.to_string()),
        }
    }
}

impl From<&ProjectRecord> for CardProps {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: Some(record.title.clone()),
            description: Some(record.description.clone()),
            image: Some(record.image.clone()),
            tags: Some(record.tags.clone()),
            repo_url: record.repo_url.clone(),
        }
    }
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        CardProps::from(record).resolve()
    }
}
