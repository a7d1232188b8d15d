//! ポートフォリオサイトのCLIライブラリ
//!
//! カタログの解決・確認と、JavaScriptなしで閲覧できる静的HTMLの出力。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod site;
