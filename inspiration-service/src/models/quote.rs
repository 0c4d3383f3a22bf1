use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const QUOTE_COLLECTION: &str = "quote";

/// Incoming quote payload. `text` is required and non-empty; the
/// optionals only have to be strings when present.
#[derive(Debug, Deserialize, Validate)]
pub struct NewQuote {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    pub author: Option<String>,
    pub mood: Option<String>,
}

impl NewQuote {
    /// Checks the raw payload shape before anything touches the store.
    /// serde reports the first violated constraint (missing `text`, wrong
    /// type on any field); the validator rules run on top of that.
    pub fn parse(value: serde_json::Value) -> Result<Self, AppError> {
        let quote: NewQuote = serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(anyhow::anyhow!("invalid quote payload: {}", e)))?;
        quote.validate()?;
        Ok(quote)
    }
}

/// Persisted quote document. Absent optionals are stored as nulls, so
/// listed documents always carry the `author` and `mood` keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: Option<String>,
    pub mood: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Quote {
    pub fn new(text: String, author: Option<String>, mood: Option<String>) -> Self {
        Self {
            text,
            author,
            mood,
            created_at: Utc::now(),
        }
    }
}

impl From<NewQuote> for Quote {
    fn from(new: NewQuote) -> Self {
        Quote::new(new.text, new.author, new.mood)
    }
}
