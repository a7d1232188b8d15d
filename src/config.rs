use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログJSONを指定する環境変数
pub const CATALOG_ENV: &str = "PORTFOLIO_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// サイトコンテンツJSON（未設定なら組み込みコンテンツ）
    pub catalog_path: Option<PathBuf>,
    /// 静的HTMLの出力先
    pub output_dir: PathBuf,
    /// 出力先にコピーする画像などのディレクトリ
    pub assets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_dir: PathBuf::from("dist"),
            assets_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SiteError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-site").join("config.json"))
    }

    /// 使用するカタログのパス
    ///
    /// 優先順: 引数 → 環境変数 → 設定ファイル
    pub fn resolve_catalog(&self, flag: Option<&Path>) -> Option<PathBuf> {
        self.resolve_catalog_with(flag, std::env::var(CATALOG_ENV).ok().as_deref())
    }

    /// 環境変数の値を渡して解決（空文字は未設定扱い）
    pub fn resolve_catalog_with(&self, flag: Option<&Path>, env: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = flag {
            return Some(path.to_path_buf());
        }

        match env {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => self.catalog_path.clone(),
        }
    }
}
