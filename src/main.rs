use clap::Parser;
use ffragrance::core::ConfigProvider;
use ffragrance::utils::{logger, validation::Validate};
use ffragrance::{CliConfig, FragranceError, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(logger::LogFormat::from_flag(cli.json_logs), cli.verbose);

    tracing::info!("Starting ffragrance");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let config = TomlConfig::from_file(&path).unwrap_or_else(|e| exit_with(e));
            run(config).await
        }
        None => run(cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    if let Err(e) = ffragrance::serve(&config).await {
        tracing::error!("❌ Server stopped with error: {}", e);
        exit_with(e);
    }

    Ok(())
}

fn exit_with(e: FragranceError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
