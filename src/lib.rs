//! quote-service - An in-memory HTTP service for storing and sampling quotes
//!
//! Quotes live only for the lifetime of the process.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quotes;
