use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "migrate_db",
    author,
    version,
    about = "Migrate a legacy list-shaped JSON database into the object structure"
)]
pub struct Cli {
    /// データベースファイルのパス（省略時は DB_MIGRATE_DATABASE_PATH / データディレクトリ）
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// 書き込みを行わず結果だけ表示
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
