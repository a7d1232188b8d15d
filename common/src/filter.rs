//! タグによる絞り込み
//!
//! - FilterState: 選択中のタグ（初期値 "all"）
//! - filter_projects: 選択タグでカタログを絞り込む（順序保持）

use crate::tags::ALL_TAG;
use crate::types::ProjectRecord;

/// 選択中のタグ
///
/// `select` は存在チェックをしない。存在しないタグなら結果が空になるだけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected: ALL_TAG.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, tag: impl Into<String>) {
        self.selected = tag.into();
    }

    /// "all" に戻す
    pub fn reset(&mut self) {
        self.selected = ALL_TAG.to_string();
    }

    pub fn is_all(&self) -> bool {
        self.selected == ALL_TAG
    }

    /// 現在の選択でカタログを絞り込む
    pub fn apply<'a>(&self, projects: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter_projects(projects, &self.selected)
    }
}

/// 選択タグでプロジェクトを絞り込む
///
/// "all" なら全件をそのまま、それ以外はタグを含むレコードのみを元の順序で返す。
pub fn filter_projects<'a>(projects: &'a [ProjectRecord], tag: &str) -> Vec<&'a ProjectRecord> {
    if tag == ALL_TAG {
        return projects.iter().collect();
    }

    projects.iter().filter(|p| p.has_tag(tag)).collect()
}
