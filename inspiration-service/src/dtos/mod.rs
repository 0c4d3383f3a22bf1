pub mod quotes;

pub use quotes::{document_to_response, ListQuotesParams, QuoteSavedResponse};
