//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → cors.rs (origin allow-list)
//!     → handlers.rs (query service over the catalog)
//!     → error.rs (failures as {"detail": ...})
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
