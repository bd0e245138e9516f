//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the REST API, the dashboard page and the WebSocket
//! live-push channel.

pub mod http;
pub mod rest;
pub mod websocket;

pub use http::{create_router, serve};
