pub mod app;
pub mod cart;
pub mod catalog;
pub mod category;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod grid;
pub mod hit;
pub mod logging;
pub mod modal;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState, Focus};
pub use catalog::{CatalogSource, CategorySelector, HttpCatalog, PlantDetail, PlantId, PlantSummary};
pub use config::AppConfig;
