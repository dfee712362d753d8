//! db_migrate: 旧形式（配列）の JSON データベースを
//! `posts` / `services` / `metrics` / `process` のオブジェクト構造へ移行する。

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use application::{MigrationOptions, MigrationService};
pub use domain::database::{CurrentDatabase, DatabaseRepository, DatabaseShape, MigrationOutcome};
pub use error::{MigrationError, Result};
pub use infrastructure::database::JsonFileDatabaseRepo;
