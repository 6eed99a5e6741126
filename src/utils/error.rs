use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Order not found: {order_number}")]
    OrderNotFound { order_number: String },

    #[error("{service} responded with HTTP {status}")]
    UpstreamStatus { service: &'static str, status: u16 },
}

pub type Result<T> = std::result::Result<T, TrackingError>;
