pub mod health;
pub mod quotes;

pub use health::{diagnostics, hello, root};
pub use quotes::{create_quote, list_quotes, random_quote};
