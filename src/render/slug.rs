//! タグのファイル名用スラッグ

use portfolio_common::TagIndex;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// 空になったときの代替スラッグ
const FALLBACK_SLUG: &str = "tag";

/// 小文字化し、英数字以外の連続を "-" にまとめる
pub fn slugify(tag: &str) -> String {
    lazy_static::lazy_static! {
        static ref NON_ALNUM_RE: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
    }

    let lower = tag.to_lowercase();
    let slug = NON_ALNUM_RE.replace_all(&lower, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// タグ → スラッグの対応表（"all" は含まない）
///
/// 衝突したものはタグインデックス順に -2, -3 ... を付ける。
#[derive(Debug, Clone, Default)]
pub struct TagSlugs {
    by_tag: HashMap<String, String>,
}

impl TagSlugs {
    pub fn build(index: &TagIndex) -> Self {
        let mut used: HashSet<String> = HashSet::new();
        let mut by_tag = HashMap::new();

        for tag in index.real_tags() {
            let base = slugify(tag);
            let mut slug = base.clone();
            let mut n = 2;
            while !used.insert(slug.clone()) {
                slug = format!("{}-{}", base, n);
                n += 1;
            }
            by_tag.insert(tag.to_string(), slug);
        }

        Self { by_tag }
    }

    pub fn get(&self, tag: &str) -> Option<&str> {
        self.by_tag.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}
