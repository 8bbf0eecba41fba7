use thiserror::Error;

// Bring in specific errors from other modules we want to wrap
use crate::catalog::CatalogError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(
        "Terminal is {width}x{height}; the storefront needs at least {min_width}x{min_height}"
    )]
    MountUnavailable {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

pub type AppResult<T> = Result<T, AppError>;
