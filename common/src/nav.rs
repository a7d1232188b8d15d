//! ナビゲーション
//!
//! ページ内セクションとモバイルメニューの開閉状態。

/// ページ内セクション（表示順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// 要素ID
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// ナビゲーションの表示名
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// アンカーリンク（"#projects" など）
    pub fn anchor(&self) -> String {
        format!("#{}", self.id())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// モバイルメニューの開閉
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// セクション移動後の状態。移動先が見つかったときだけ閉じる。
    pub fn after_navigate(&mut self, target_found: bool) {
        if target_found {
            self.close();
        }
    }
}
