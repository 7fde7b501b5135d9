//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional) → process environment
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, load_config, load_dotenv, ConfigError};
pub use schema::AppConfig;
pub use schema::{
    CatalogConfig, CorsConfig, DatabaseConfig, ListenerConfig, ObservabilityConfig,
    SecurityConfig, TimeoutConfig,
};
pub use validation::ValidationError;
