//! タグインデックス
//!
//! カタログ全体のタグを重複なしで集め、先頭に "all" を置く。
//! 並びは初出順（レコード順 → レコード内のタグ順）。

use crate::types::ProjectRecord;
use std::collections::HashSet;

/// 「絞り込みなし」を表す予約タグ
pub const ALL_TAG: &str = "all";

/// 重複なしのタグ列（先頭は常に [`ALL_TAG`]）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    /// レコード列からタグインデックスを構築
    pub fn build(projects: &[ProjectRecord]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(ALL_TAG);

        let mut tags = vec![ALL_TAG.to_string()];
        for tag in projects.iter().flat_map(|p| p.tags.iter()) {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }

        Self { tags }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// "all" を除いた実タグ
    pub fn real_tags(&self) -> impl Iterator<Item = &str> {
        self.iter().skip(1)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// "all" を含む件数
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// 常にfalse（"all" が必ず入る）
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// タグインデックスを構築（関数版）
pub fn build_tag_index(projects: &[ProjectRecord]) -> Vec<String> {
    TagIndex::build(projects).tags
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
    fn test_empty_catalog_yields_only_all() {
        assert_eq!(build_tag_index(&[]), vec!["all"]);
    }

    #[test]
    fn test_first_seen_order() {
        let projects = vec![record("1", &["React", "AWS"]), record("2", &["Python", "AWS"])];
        assert_eq!(build_tag_index(&projects), vec!["all", "React", "AWS", "Python"]);
    }

    #[test]
    fn test_no_duplicates_within_record() {
        let projects = vec![record("1", &["Rust", "Rust", "Wasm"])];
        assert_eq!(build_tag_index(&projects), vec!["all", "Rust", "Wasm"]);
    }

    #[test]
    fn test_literal_all_tag_folds_into_sentinel() {
        let projects = vec![record("1", &["all", "Go"])];
        assert_eq!(build_tag_index(&projects), vec!["all", "Go"]);
    }

    #[test]
    fn test_case_variants_are_distinct() {
        let projects = vec![record("1", &["react", "React"])];
        assert_eq!(build_tag_index(&projects), vec!["all", "react", "React"]);
    }

    #[test]
    fn test_records_without_tags_are_tolerated() {
        let projects = vec![record("1", &[]), record("2", &["CSV"])];
        let index = TagIndex::build(&projects);
        assert_eq!(index.len(), 2);
        assert_eq!(index.real_tags().collect::<Vec<_>>(), vec!["CSV"]);
    }

    #[test]
    fn test_default_catalog_properties() {
        let projects = crate::content::default_projects();
        let index = TagIndex::build(&projects);

        assert_eq!(index.as_slice()[0], ALL_TAG);
        let unique: HashSet<&str> = index.iter().collect();
        assert_eq!(unique.len(), index.len());
        for project in &projects {
            for tag in &project.tags {
                assert!(index.contains(tag), "タグが欠落: {}", tag);
            }
        }
    }
}
