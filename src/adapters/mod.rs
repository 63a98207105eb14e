//! Adapters - Implementations of ports and inbound transports.
//!
//! - `catalog` - embedded and file-backed catalog sources
//! - `http` - Axum REST API

pub mod catalog;
pub mod http;
