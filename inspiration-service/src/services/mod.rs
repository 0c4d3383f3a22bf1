pub mod database;
pub mod seed;

pub use database::{DocumentStore, MongoStore};
pub use seed::{seed_quotes, SeedReport};
