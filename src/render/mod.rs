//! 静的HTML出力
//!
//! - index.html: 全プロジェクト
//! - tags/<slug>.html: タグごとに絞り込んだページ
//! - style.css: Webアプリと共通のスタイル
//! - 素材ディレクトリの中身（指定時）

pub mod html;
pub mod manifest;
pub mod slug;

use crate::error::{Result, SiteError};
use chrono::Datelike;
use html::{render_page, PageDepth};
use manifest::{content_hash, Manifest, MANIFEST_FILE_NAME};
use portfolio_common::{SiteContent, ALL_TAG};
use slug::TagSlugs;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const STYLESHEET: &str = include_str!("../../web-wasm/style.css");

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_dir: PathBuf,
    pub assets_dir: Option<PathBuf>,
    /// フッターに表示する年
    pub year: i32,
}

impl RenderOptions {
    pub fn new(output_dir: PathBuf, assets_dir: Option<PathBuf>) -> Self {
        Self {
            output_dir,
            assets_dir,
            year: chrono::Local::now().year(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// 生成したHTMLページ数
    pub pages: usize,
    /// コピー対象の素材数
    pub assets: usize,
    pub written: usize,
    pub unchanged: usize,
    /// 前回の出力にあって今回なくなったファイル
    pub removed: usize,
}

/// 出力ファイル（相対パスと内容）
struct OutputFile {
    path: String,
    bytes: Vec<u8>,
}

/// サイト全体を出力
pub fn render_site(content: &SiteContent, options: &RenderOptions) -> Result<RenderReport> {
    let catalog = content.catalog()?;
    let slugs = TagSlugs::build(catalog.tags());
    let mut report = RenderReport::default();
    let mut outputs = Vec::new();

    outputs.push(OutputFile {
        path: "index.html".to_string(),
        bytes: render_page(content, &catalog, &slugs, ALL_TAG, PageDepth::Root, options.year)
            .into_bytes(),
    });

    for tag in catalog.tags().real_tags() {
        let slug = slugs
            .get(tag)
            .ok_or_else(|| SiteError::Render(format!("タグのスラッグがありません: {}", tag)))?;
        outputs.push(OutputFile {
            path: format!("tags/{}.html", slug),
            bytes: render_page(content, &catalog, &slugs, tag, PageDepth::Tag, options.year)
                .into_bytes(),
        });
    }
    report.pages = outputs.len();

    outputs.push(OutputFile {
        path: "style.css".to_string(),
        bytes: STYLESHEET.as_bytes().to_vec(),
    });

    if let Some(assets_dir) = &options.assets_dir {
        let generated: HashSet<String> = outputs.iter().map(|o| o.path.clone()).collect();
        for asset in collect_assets(assets_dir)? {
            if generated.contains(&asset.path) || asset.path == MANIFEST_FILE_NAME {
                tracing::warn!(path = %asset.path, "asset conflicts with generated file, skipped");
                continue;
            }
            report.assets += 1;
            outputs.push(asset);
        }
    }

    write_outputs(&options.output_dir, outputs, &mut report)?;

    tracing::info!(
        output = %options.output_dir.display(),
        pages = report.pages,
        written = report.written,
        unchanged = report.unchanged,
        removed = report.removed,
        "render finished"
    );
    Ok(report)
}

/// 前回のマニフェストと同じハッシュのファイルは書き直さない
fn write_outputs(output_dir: &Path, outputs: Vec<OutputFile>, report: &mut RenderReport) -> Result<()> {
    std::fs::create_dir_all(output_dir)?;
    let previous = Manifest::load(output_dir);
    let mut manifest = Manifest::default();

    for output in outputs {
        let hash = content_hash(&output.bytes);
        let target = output_dir.join(&output.path);

        if previous.get(&output.path) == Some(hash.as_str()) && target.exists() {
            tracing::debug!(path = %output.path, "unchanged");
            report.unchanged += 1;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&target, &output.bytes)?;
            tracing::debug!(path = %output.path, bytes = output.bytes.len(), "written");
            report.written += 1;
        }

        manifest.insert(output.path, hash);
    }

    remove_stale(output_dir, &previous, &manifest, report)?;
    manifest.save(output_dir)
}

/// 前回のマニフェストにだけ載っているファイルを削除
fn remove_stale(
    output_dir: &Path,
    previous: &Manifest,
    current: &Manifest,
    report: &mut RenderReport,
) -> Result<()> {
    for path in previous.paths() {
        if current.get(path).is_some() || path.split('/').any(|c| c == ".." || c.is_empty()) {
            continue;
        }

        let target = output_dir.join(path);
        if target.is_file() {
            std::fs::remove_file(&target)?;
            tracing::debug!(path = %path, "removed stale output");
            report.removed += 1;
        }
    }
    Ok(())
}

/// 素材ディレクトリ以下のファイルを相対パス順に集める
fn collect_assets(assets_dir: &Path) -> Result<Vec<OutputFile>> {
    if !assets_dir.is_dir() {
        return Err(SiteError::FileNotFound(assets_dir.display().to_string()));
    }

    let mut assets = Vec::new();
    for entry in WalkDir::new(assets_dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path
            .strip_prefix(assets_dir)
            .map_err(|e| SiteError::Render(e.to_string()))?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join("/");

        assets.push(OutputFile {
            path: relative,
            bytes: std::fs::read(path)?,
        });
    }

    // パス順でソート
    assets.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(assets)
}
