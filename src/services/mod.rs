//! Application services
//!
//! - `ingest`: decode, store and broadcast inbound notifications
//! - `query`: read-only snapshot and health reporting

pub mod ingest;
pub mod query;

pub use ingest::{decode_payload, IngestService};
pub use query::QueryService;
