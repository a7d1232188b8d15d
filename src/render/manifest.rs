//! 出力ファイルのマニフェスト
//!
//! 出力ファイルのSHA-256を記録し、内容が変わらないファイルは書き直さない。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 相対パス（"/" 区切り） → SHA-256
    files: BTreeMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            files: BTreeMap::new(),
        }
    }
}

impl Manifest {
    const CURRENT_VERSION: u32 = 1;

    /// マニフェストを読み込み（なければ・壊れていれば空）
    pub fn load(output_dir: &Path) -> Self {
        let path = output_dir.join(MANIFEST_FILE_NAME);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, Manifest>(BufReader::new(file)) {
            Ok(manifest) if manifest.version == Self::CURRENT_VERSION => manifest,
            Ok(_) => {
                tracing::warn!("manifest version mismatch, rewriting all files");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "manifest unreadable, rewriting all files");
                Self::default()
            }
        }
    }

    pub fn save(&self, output_dir: &Path) -> Result<()> {
        let file = File::create(output_dir.join(MANIFEST_FILE_NAME))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// 記録済みの相対パス
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn insert(&mut self, path: String, hash: String) {
        self.files.insert(path, hash);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// SHA-256（16進小文字）
pub fn content_hash(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
