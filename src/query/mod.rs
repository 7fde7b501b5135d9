//! Query subsystem.
//!
//! Stateless operations answering the three catalog queries: list all,
//! lookup by destination substring, and filtered search.

pub mod service;
pub mod types;

pub use service::{QueryError, QueryService};
pub use types::{SearchResponse, TravelQuery, NO_MATCH_MESSAGE};
