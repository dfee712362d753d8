//! migrate_db: データベースファイルを一度だけ新構造へ移行する CLI。
//! 結果は stdout に 1 行で出力し、パース・書き込みエラーは非ゼロ終了とする。
use clap::Parser;
use db_migrate::{
    JsonFileDatabaseRepo, MigrationOptions, MigrationService,
    cli::Cli,
    infrastructure::config::resolve_database_path,
    utils::{config::EnvConfig, env::load_env, logging::init_tracing},
};
use tracing::{debug, error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 読み込み（RUST_LOG も含むためログ初期化より先）
    let env_file = load_env();
    init_tracing();
    if let Some(p) = &env_file {
        debug!(path = %p.display(), "loaded env file");
    }
    EnvConfig::init();

    let cli = Cli::parse();
    let path = resolve_database_path(cli.path, &EnvConfig::get())?;

    let service = MigrationService::new(JsonFileDatabaseRepo::new(path));
    let outcome = service
        .run(MigrationOptions {
            dry_run: cli.dry_run,
        })
        .inspect_err(|e| {
            let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
            error!(%path, user_actionable = e.is_user_actionable(), "migration failed: {e}");
            if e.is_user_actionable() {
                eprintln!("Hint: fix the database file or configuration and run again");
            }
        })?;

    println!("{outcome}");
    Ok(())
}
