use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化 CLI 日誌。`level` 來自設定檔，`RUST_LOG` 優先。
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_filter = match (verbose, level) {
        (true, _) => "module_info_count=debug,info".to_string(),
        (false, Some(level)) => format!("module_info_count={}", level),
        (false, None) => "module_info_count=info".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
