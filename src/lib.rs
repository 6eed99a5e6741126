pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::TrackingConfig;
pub use crate::core::router::{classify, RequestError, TrackingQuery, TrackingService};
pub use crate::domain::model::{Courier, ShipmentStatus, TrackingEvent, TrackingResult};
pub use crate::server::{app, build_service, HttpTrackingService};
pub use crate::utils::error::{Result, TrackingError};
