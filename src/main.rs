use clap::Parser;
use parcel_track::utils::{logger, validation::Validate};
use parcel_track::{app, build_service, CliConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting parcel-track server");

    let config = match cli.load_tracking_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let service = Arc::new(build_service(&config)?);
    let router = app(service);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    tracing::info!("📡 Listening on {}", cli.bind);

    axum::serve(listener, router).await?;
    Ok(())
}
