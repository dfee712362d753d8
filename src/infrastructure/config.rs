//! データベースファイルの場所を決定する
//!
//! 優先順位: `--path` > `DB_MIGRATE_DATABASE_PATH` > データディレクトリ既定値。
//! ここではディレクトリを作成しない（ファイル不在時に副作用を残さないため）。

use crate::error::{MigrationError, Result};
use crate::utils::config::EnvConfig;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "db_migrate";
pub const DATABASE_FILE_NAME: &str = "database.json";

fn data_dir(config: &EnvConfig) -> Result<PathBuf> {
    if let Some(xdg_data_home) = &config.xdg_data_home {
        return Ok(PathBuf::from(xdg_data_home).join(APP_DIR_NAME));
    }

    let proj = ProjectDirs::from("com", "user", APP_DIR_NAME)
        .ok_or_else(|| MigrationError::Config("cannot resolve platform data dir".into()))?;
    Ok(proj.data_local_dir().to_path_buf())
}

pub fn default_database_path(config: &EnvConfig) -> Result<PathBuf> {
    Ok(data_dir(config)?.join(DATABASE_FILE_NAME))
}

/// CLI 引数と環境変数からデータベースのパスを決める
pub fn resolve_database_path(cli_path: Option<PathBuf>, config: &EnvConfig) -> Result<PathBuf> {
    if let Some(p) = cli_path {
        return Ok(p);
    }
    if let Some(p) = &config.database_path {
        return Ok(PathBuf::from(p));
    }
    default_database_path(config)
}
