//! # Quotes
//!
//! In-memory quote storage and the types exchanged over HTTP.
//!
//! - `model`: `Quote`, the create payload, and the message envelope
//! - `store`: `QuoteStore`, the single source of truth for quotes and ids
//! - `errors`: `QuoteError` and its HTTP status mapping

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{QuoteError, QuoteResult};
pub use model::{MessageResponse, NewQuote, Quote, QuoteId};
pub use store::QuoteStore;
