use crate::domain::database::{DatabaseRepository, MigrationOutcome};
use crate::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// マイグレーションの実行オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationOptions {
    /// 書き込みを行わない
    pub dry_run: bool,
}

/// 1 つのデータベースファイルに対してマイグレーションを 1 回実行する
pub struct MigrationService<R: DatabaseRepository> {
    repo: R,
}

impl<R: DatabaseRepository> MigrationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    pub fn run(&self, options: MigrationOptions) -> Result<MigrationOutcome> {
        let path = self.path().display();
        let outcome = if options.dry_run {
            self.repo.inspect()?
        } else {
            self.repo.migrate()?
        };

        match outcome {
            MigrationOutcome::Migrated { posts } => {
                info!(%path, posts, "database migrated to object structure");
            }
            MigrationOutcome::WouldMigrate { posts } => {
                info!(%path, posts, "dry run: database would be migrated");
            }
            MigrationOutcome::AlreadyMigrated => {
                info!(%path, "database already in object structure");
            }
            MigrationOutcome::NotFound => {
                warn!(%path, "database file not found");
            }
        }
        Ok(outcome)
    }
}
