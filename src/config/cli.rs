use crate::config::TrackingConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parcel-track")]
#[command(about = "Unified shipment tracking endpoint (YunExpress + GLS + Shopify)")]
pub struct CliConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "PARCEL_TRACK_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// TOML configuration file; environment variables are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_tracking_config(&self) -> Result<TrackingConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TrackingConfig::from_file(path)
            }
            None => {
                tracing::info!("📁 Loading configuration from environment");
                TrackingConfig::from_env()
            }
        }
    }
}
