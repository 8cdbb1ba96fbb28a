//! # Quote HTTP Server Module
//!
//! Axum server exposing the quote store over HTTP.
//!
//! # Endpoints
//!
//! - `POST /quotes` - Save a quote
//! - `GET /quotes[?author=]` - List quotes, optionally by author
//! - `GET /quotes/random` - One quote chosen at random
//! - `DELETE /quotes/{id}` - Delete a quote
//!
//! Anything else answers 404 `{"message":"Endpoint not found"}`.

pub mod config;
pub mod quote_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use quote_routes::{quote_routes, QuoteState};
pub use server::HttpServer;
