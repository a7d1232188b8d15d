use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのカタログ確認・静的HTML出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// サイトコンテンツJSON（省略時は環境変数・設定・組み込みの順）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// タグインデックスを表示（先頭は all）
    Tags,

    /// タグで絞り込んだプロジェクトを表示
    Projects {
        /// 絞り込みタグ（大文字小文字を区別）
        #[arg(short, long, default_value = "all")]
        tag: String,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// JavaScriptなしで閲覧できる静的HTMLを出力
    Render {
        /// 出力ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// コピーする素材ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// サイトコンテンツJSONの書き出し・検証
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// カタログJSONのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 素材ディレクトリを設定
        #[arg(long)]
        set_assets: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// 現在のコンテンツをJSONで書き出す
    Export {
        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// JSONファイルを読み込んで検証
    Check {
        #[arg(required = true)]
        file: PathBuf,
    },
}
