pub mod quote;

pub use quote::{NewQuote, Quote, QUOTE_COLLECTION};
