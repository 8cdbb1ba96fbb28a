//! Quote data model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{QuoteError, QuoteResult};

/// Store-assigned quote identifier
pub type QuoteId = i64;

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    pub quote: String,
}

impl Quote {
    /// A quote not yet saved; `QuoteStore::add` overwrites the id
    pub fn new(author: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            id: 0,
            author: author.into(),
            quote: quote.into(),
        }
    }
}

/// Create payload for `POST /quotes`
///
/// Both fields decode as optional so a missing field is reported by
/// [`NewQuote::validate`] rather than by serde. Unknown fields, including a
/// caller-supplied `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
}

impl NewQuote {
    /// Decode a request body
    ///
    /// Only a top-level JSON object is accepted; serde would otherwise also
    /// map a positional array onto the struct fields.
    pub fn from_slice(body: &[u8]) -> QuoteResult<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)
            .map_err(|e| QuoteError::InvalidJson(e.to_string()))?;

        serde_json::from_value(Value::Object(object))
            .map_err(|e| QuoteError::InvalidJson(e.to_string()))
    }

    /// Check required fields and turn the payload into an unsaved quote
    pub fn validate(self) -> QuoteResult<Quote> {
        let author = required(self.author, "author")?;
        let quote = required(self.quote, "quote")?;
        Ok(Quote::new(author, quote))
    }
}

fn required(value: Option<String>, field: &'static str) -> QuoteResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(QuoteError::MissingField(field)),
    }
}

/// `{"message": ...}` envelope used for confirmations and some 404s
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
