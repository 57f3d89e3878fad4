use clap::Parser;
use module_info_count::utils::{logger, validation::Validate};
use module_info_count::{AnalyzeError, Analyzer, CliConfig, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let analyzer = Analyzer::new(LocalStorage::default());
    match analyzer.run(&settings.input_path) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    }
}

fn fail(e: &AnalyzeError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
