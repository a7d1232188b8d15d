//! プロジェクトカタログ
//!
//! カタログは実行中に変化しないので、タグインデックスは構築時に1回だけ計算する。

use crate::error::{Error, Result};
use crate::filter::filter_projects;
use crate::tags::TagIndex;
use crate::types::{ProjectRecord, SiteContent};
use std::collections::HashSet;

/// 検証済みのプロジェクト一覧とタグインデックス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
    tags: TagIndex,
}

impl ProjectCatalog {
    /// IDの重複を検証してカタログを構築
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        validate_unique_ids(&projects)?;
        let tags = TagIndex::build(&projects);
        Ok(Self { projects, tags })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn tags(&self) -> &TagIndex {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// タグで絞り込んだ一覧
    pub fn filtered(&self, tag: &str) -> Vec<&ProjectRecord> {
        filter_projects(&self.projects, tag)
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        let projects = crate::content::default_projects();
        let tags = TagIndex::build(&projects);
        Self { projects, tags }
    }
}

fn validate_unique_ids(projects: &[ProjectRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(Error::DuplicateProjectId(project.id.clone()));
        }
    }
    Ok(())
}

impl SiteContent {
    /// JSON文字列から読み込み（プロジェクトIDを検証）
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        validate_unique_ids(&content.projects)?;
        Ok(content)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// プロジェクト部分をカタログ化
    pub fn catalog(&self) -> Result<ProjectCatalog> {
        ProjectCatalog::new(self.projects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, tags: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: format!("Project {}", id),
            description: String::new(),
            image: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            demo_url: None,
            repo_url: None,
        }
    }

    #[test]
    fn test_new_computes_tag_index() {
        let catalog = ProjectCatalog::new(vec![
            record("1", &["React", "AWS"]),
            record("2", &["Python", "AWS"]),
        ])
        .unwrap();

        assert_eq!(catalog.tags().as_slice(), ["all", "React", "AWS", "Python"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("2").map(|p| p.title.as_str()), Some("Project 2"));
        assert!(catalog.get("9").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = ProjectCatalog::new(vec![record("1", &[]), record("1", &["Go"])]);
        assert!(matches!(result, Err(Error::DuplicateProjectId(id)) if id == "1"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = ProjectCatalog::new(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.tags().as_slice(), ["all"]);
        assert!(catalog.filtered("all").is_empty());
    }

    #[test]
    fn test_default_catalog_matches_content() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.projects(), SiteContent::default().projects.as_slice());
        assert_eq!(catalog.filtered("Matplotlib").len(), 2);
    }

    #[test]
    fn test_site_content_from_json_validates_ids() {
        let mut content = SiteContent::default();
        content.projects.push(record("1", &["Dup"]));
        let json = serde_json::to_string(&content).unwrap();

        assert!(matches!(
            SiteContent::from_json(&json),
            Err(Error::DuplicateProjectId(_))
        ));
    }

    #[test]
    fn test_site_content_from_invalid_json() {
        assert!(matches!(SiteContent::from_json("{"), Err(Error::Json(_))));
    }
}
