//! tracing の初期化
//!
//! stdout は結果の 1 行だけに使うため、ログは stderr へ出力する。
//! レベルは `RUST_LOG` で指定し、未指定時は `warn`。

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // 二重初期化は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
