//! `.env` ファイルの読み込み
//!
//! `DB_MIGRATE_ENV_PATH` が指定されていればそのファイルを、なければカレントから
//! 親方向に `.env` を探して読み込む。既存の環境変数は上書きしない。
//! ログ初期化より前に呼ばれるため、結果は戻り値で返し呼び出し側が記録する。

use crate::utils::config::{ENV_PATH_VAR, non_empty_var};
use std::path::PathBuf;

/// 読み込んだ環境変数ファイルのパスを返す（見つからない・読めない場合は `None`）
pub fn load_env() -> Option<PathBuf> {
    match non_empty_var(ENV_PATH_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            dotenvy::from_path(&path).ok().map(|()| path)
        }
        None => dotenvy::dotenv().ok(),
    }
}
