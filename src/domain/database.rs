//! データベース構造とマイグレーション規則 – ドメイン層
//!
//! 旧形式（トップレベルが配列）を現行形式
//! `{ "posts", "services", "metrics", "process" }` へ包み直します。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// パース直後のトップレベル形状
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseShape {
    /// 旧形式: 投稿レコードの配列
    Sequence(Vec<Value>),
    /// 現行形式（キー構成は問わない）
    Mapping(Map<String, Value>),
    /// 配列でもオブジェクトでもない値
    Other(Value),
}

impl DatabaseShape {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Array(records) => DatabaseShape::Sequence(records),
            Value::Object(map) => DatabaseShape::Mapping(map),
            other => DatabaseShape::Other(other),
        }
    }
}

/// 現行形式のデータベース
///
/// フィールド順がそのまま JSON のキー順になります。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentDatabase {
    pub posts: Vec<Value>,
    pub services: Vec<Value>,
    pub metrics: Vec<Value>,
    pub process: Vec<Value>,
}

impl CurrentDatabase {
    /// 旧形式の配列を `posts` に格納し、残りを空で初期化します。
    pub fn from_legacy(posts: Vec<Value>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }
}

/// 1 回の実行結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// 旧形式を書き換えた
    Migrated { posts: usize },
    /// dry-run: 書き換え対象だが書き込んでいない
    WouldMigrate { posts: usize },
    /// 既に現行形式（または配列以外）なので何もしない
    AlreadyMigrated,
    /// ファイルが存在しない
    NotFound,
}

impl std::fmt::Display for MigrationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrationOutcome::Migrated { posts } => {
                write!(f, "✅ Database migrated to object structure ({posts} posts)")
            }
            MigrationOutcome::WouldMigrate { posts } => write!(
                f,
                "🔍 Database would be migrated to object structure ({posts} posts)"
            ),
            MigrationOutcome::AlreadyMigrated => {
                write!(f, "ℹ️ Database already in object structure")
            }
            MigrationOutcome::NotFound => write!(f, "❌ Database file not found"),
        }
    }
}

/// データベース永続化 I/F
pub trait DatabaseRepository: Send + Sync {
    /// 対象データベースの場所（ログ・エラー表示用）
    fn path(&self) -> &Path;
    /// ファイルを読み込んでパースする。存在しなければ `None`。
    fn load(&self) -> Result<Option<Value>>;
    /// 現行形式で全体を上書きする。
    fn save(&self, db: &CurrentDatabase) -> Result<()>;

    /// 旧形式なら現行形式へ書き換える
    fn migrate(&self) -> Result<MigrationOutcome> {
        execute(self, false)
    }

    /// 書き込みを行わずに結果だけを判定する
    fn inspect(&self) -> Result<MigrationOutcome> {
        execute(self, true)
    }
}

fn execute<R: DatabaseRepository + ?Sized>(repo: &R, dry_run: bool) -> Result<MigrationOutcome> {
    let Some(value) = repo.load()? else {
        return Ok(MigrationOutcome::NotFound);
    };

    match DatabaseShape::classify(value) {
        DatabaseShape::Sequence(records) => {
            let posts = records.len();
            if dry_run {
                return Ok(MigrationOutcome::WouldMigrate { posts });
            }
            repo.save(&CurrentDatabase::from_legacy(records))?;
            Ok(MigrationOutcome::Migrated { posts })
        }
        DatabaseShape::Mapping(_) | DatabaseShape::Other(_) => {
            Ok(MigrationOutcome::AlreadyMigrated)
        }
    }
}
