//! Utility functions and helpers
//!
//! This module contains timestamp formatting helpers.

pub mod time;

pub use time::{format_capture_time, iso8601_now, record_timestamp};
