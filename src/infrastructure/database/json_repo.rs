//! JSON ファイル版 DatabaseRepository 実装
use crate::domain::database::{CurrentDatabase, DatabaseRepository};
use crate::error::{MigrationError, Result};
use serde_json::{Value, to_writer_pretty};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

pub struct JsonFileDatabaseRepo {
    path: PathBuf,
}

impl JsonFileDatabaseRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 書き込み先の実体。シンボリックリンクはリンク先を書き換える。
    fn target_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn write_tmp(&self, tmp: &Path, db: &CurrentDatabase) -> io::Result<()> {
        let mut w = BufWriter::new(fs::File::create(tmp)?);
        to_writer_pretty(&mut w, db)?;
        w.flush()?;
        w.into_inner().map_err(|e| e.into_error())?.sync_all()
    }

    fn replace(&self, target: &Path, tmp: &Path, db: &CurrentDatabase) -> io::Result<()> {
        self.write_tmp(tmp, db)?;
        // 元ファイルのパーミッションを引き継ぐ
        if let Ok(meta) = fs::metadata(target) {
            fs::set_permissions(tmp, meta.permissions())?;
        }
        fs::rename(tmp, target)
    }
}

impl DatabaseRepository for JsonFileDatabaseRepo {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "database file does not exist");
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path).map_err(|source| MigrationError::Read {
            path: self.path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&text).map_err(|source| MigrationError::Parse {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "database file loaded");
        Ok(Some(value))
    }

    fn save(&self, db: &CurrentDatabase) -> Result<()> {
        // 一時ファイルに書き出してから rename で置き換える
        let target = self.target_path();
        let tmp = target.with_extension("json.tmp");
        if let Err(source) = self.replace(&target, &tmp, db) {
            let _ = fs::remove_file(&tmp);
            return Err(MigrationError::Write {
                path: self.path.clone(),
                source,
            });
        }
        debug!(path = %self.path.display(), target = %target.display(), "database file replaced");
        Ok(())
    }
}
