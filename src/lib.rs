//! Travel Assistant API Library

pub mod catalog;
pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;

pub use catalog::{CatalogStore, DestinationRecord};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use query::{QueryService, SearchResponse, TravelQuery};
