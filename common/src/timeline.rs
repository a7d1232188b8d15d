//! 職歴タイムラインのレイアウト

use crate::types::ExperienceItem;

/// タイムライン上の配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    /// 偶数番目は左、奇数番目は右
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineSide::Left => "left",
            TimelineSide::Right => "right",
        }
    }
}

/// タイムラインの1項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub index: usize,
    pub side: TimelineSide,
    pub item: &'a ExperienceItem,
}

impl TimelineEntry<'_> {
    pub fn show_achievements(&self) -> bool {
        !self.item.achievements.is_empty()
    }

    pub fn logo_alt(&self) -> String {
        format!("{} logo", self.item.company)
    }
}

/// 入力順のままタイムライン項目を作る
pub fn timeline(items: &[ExperienceItem]) -> Vec<TimelineEntry<'_>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| TimelineEntry {
            index,
            side: TimelineSide::for_index(index),
            item,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_experiences;

    #[test]
    fn test_sides_alternate() {
        let mut items = default_experiences();
        items.push(items[0].clone());
        let entries = timeline(&items);

        let sides: Vec<TimelineSide> = entries.iter().map(|e| e.side).collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }

    #[test]
    fn test_preserves_order() {
        let items = default_experiences();
        let entries = timeline(&items);
        assert_eq!(entries[0].item.position, "Associate Developer");
        assert_eq!(entries[1].item.position, "Software Engineer Intern");
    }

    #[test]
    fn test_achievements_hidden_when_empty() {
        let mut items = default_experiences();
        items[0].achievements.clear();
        let entries = timeline(&items);
        assert!(!entries[0].show_achievements());
        assert!(entries[1].show_achievements());
        assert_eq!(entries[0].logo_alt(), "SAP logo");
    }

    #[test]
    fn test_empty_timeline() {
        assert!(timeline(&[]).is_empty());
    }
}
