//! サイトコンテンツの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProjectRecord: プロジェクトギャラリーの1件
//! - ExperienceItem: 職歴タイムラインの1件
//! - Profile / ContactInfo: ヒーローとコンタクト欄
//! - SiteContent: ページ全体

use serde::{Deserialize, Serialize};

/// プロジェクト1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// 画像のURLまたはローカルパス
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl ProjectRecord {
    /// タグを含むか（完全一致、大文字小文字を区別）
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// 職歴1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub current: bool,
}

/// ソーシャルリンク（あるものだけ表示）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// ヒーローセクションのプロフィール
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub description: String,
    pub avatar_url: String,
    pub resume_url: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

impl Profile {
    /// アバター画像のaltテキスト
    pub fn avatar_alt(&self) -> String {
        format!("{}'s profile picture", self.name)
    }
}

/// 表示用テキストとリンク先の組
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// コンタクトセクション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub intro: String,
    pub email: ContactLink,
    pub github: ContactLink,
    pub linkedin: ContactLink,
}

/// セクション見出し
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

/// ページ全体のコンテンツ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// フッターの著作権表示に使う名前
    pub owner: String,
    pub profile: Profile,
    pub projects_heading: SectionHeading,
    pub projects: Vec<ProjectRecord>,
    pub experience_heading: SectionHeading,
    pub experiences: Vec<ExperienceItem>,
    pub contact: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_record_deserialize_camel_case() {
        let json = r#"{
            "id": "7",
            "title": "Tiny",
            "description": "desc",
            "image": "tiny.png",
            "tags": ["Rust"],
            "repoUrl": "https://example.com/repo"
        }"#;

        let record: ProjectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, "7");
        assert_eq!(record.repo_url.as_deref(), Some("https://example.com/repo"));
        assert_eq!(record.demo_url, None);
    }

    #[test]
    fn test_project_record_missing_tags_is_empty() {
        let json = r#"{"id":"1","title":"t","description":"d","image":"i"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_project_record_serialize_skips_absent_links() {
        let record = ProjectRecord {
            id: "1".into(),
            title: "t".into(),
            description: "d".into(),
            image: "i".into(),
            tags: vec![],
            demo_url: None,
            repo_url: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("demoUrl"));
        assert!(!json.contains("repoUrl"));
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let record = ProjectRecord {
            id: "1".into(),
            title: "t".into(),
            description: "d".into(),
            image: "i".into(),
            tags: vec!["React".into()],
            demo_url: None,
            repo_url: None,
        };
        assert!(record.has_tag("React"));
        assert!(!record.has_tag("react"));
    }

    #[test]
    fn test_experience_current_defaults_false() {
        let json = r#"{
            "id": "1", "company": "Acme", "position": "Dev",
            "duration": "2020", "location": "Remote", "description": "d"
        }"#;
        let item: ExperienceItem = serde_json::from_str(json).unwrap();
        assert!(!item.current);
        assert!(item.achievements.is_empty());
        assert_eq!(item.logo, None);
    }
}
