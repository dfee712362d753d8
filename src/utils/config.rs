//! グローバル環境変数設定
//!
//! アプリケーション全体で使用する環境変数を一元管理。
//! プロセス起動時に一度だけ初期化し、以降はどこからでもアクセス可能。

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// グローバル環境変数設定
static ENV_CONFIG: OnceCell<Arc<EnvConfig>> = OnceCell::new();

/// データベースファイルのパスを指定する環境変数
pub const DATABASE_PATH_VAR: &str = "DB_MIGRATE_DATABASE_PATH";
/// `.env` の代わりに読み込む環境変数ファイル
pub const ENV_PATH_VAR: &str = "DB_MIGRATE_ENV_PATH";

/// 環境変数設定
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// データベースファイルのパス
    pub database_path: Option<String>,
    /// XDG Data Home ディレクトリ
    pub xdg_data_home: Option<String>,
}

impl EnvConfig {
    /// 現在のプロセス環境から読み取る
    pub fn from_env() -> Self {
        EnvConfig {
            database_path: non_empty_var(DATABASE_PATH_VAR),
            xdg_data_home: non_empty_var("XDG_DATA_HOME"),
        }
    }

    /// 環境変数から設定を初期化
    ///
    /// `.env` 読み込みの後に呼び出す。
    /// 既に初期化済みの場合は何もしない（冪等）。
    pub fn init() {
        // 並列実行時の競合を考慮：既に他のスレッドが初期化していても成功とする
        let _ = ENV_CONFIG.set(Arc::new(Self::from_env()));
    }

    /// 設定を取得（未初期化ならこの時点の環境から初期化する）
    pub fn get() -> Arc<EnvConfig> {
        ENV_CONFIG
            .get_or_init(|| Arc::new(Self::from_env()))
            .clone()
    }
}

pub(crate) fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
