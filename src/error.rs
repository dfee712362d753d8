//! 統一エラーハンドリング
//!
//! マイグレーション全体で使用するエラー型を定義します。
//! ファイル不在は `MigrationOutcome::NotFound` として回復されるため、ここには含まれません。

use std::path::PathBuf;
use thiserror::Error;

/// db_migrate 全体で使用する統一エラー型
#[derive(Debug, Error)]
pub enum MigrationError {
    // ========================================
    // 読み込み関連エラー
    // ========================================
    #[error("Failed to read database file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ========================================
    // 書き込み関連エラー
    // ========================================
    #[error("Failed to write database file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ========================================
    // 設定関連エラー
    // ========================================
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, MigrationError>;

impl MigrationError {
    /// エラーがユーザーアクションで解決可能かどうかを判定
    pub fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            MigrationError::Parse { .. } | MigrationError::Config(_)
        )
    }

    /// エラーに関係するファイルパス（あれば）
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            MigrationError::Read { path, .. }
            | MigrationError::Parse { path, .. }
            | MigrationError::Write { path, .. } => Some(path),
            MigrationError::Config(_) => None,
        }
    }
}
