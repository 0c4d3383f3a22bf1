use crate::models::{Quote, QUOTE_COLLECTION};
use crate::services::DocumentStore;
use mongodb::bson;

const SAMPLE_QUOTES: [(&str, &str, &str); 3] = [
    ("Stay hungry, stay foolish.", "Steve Jobs", "motivation"),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        "work",
    ),
    (
        "Whether you think you can or you think you can’t, you’re right.",
        "Henry Ford",
        "mindset",
    ),
];

#[derive(Debug)]
pub struct SeedReport {
    pub inserted: usize,
    pub warnings: Vec<String>,
}

/// Best-effort insertion of the sample quotes. Individual failures become
/// warnings in the report instead of errors, and the caller decides
/// whether to care.
pub async fn seed_quotes(store: &dyn DocumentStore) -> SeedReport {
    let mut report = SeedReport {
        inserted: 0,
        warnings: Vec::new(),
    };

    for (text, author, mood) in SAMPLE_QUOTES {
        let quote = Quote::new(
            text.to_string(),
            Some(author.to_string()),
            Some(mood.to_string()),
        );
        let document = match bson::to_document(&quote) {
            Ok(document) => document,
            Err(e) => {
                report
                    .warnings
                    .push(format!("failed to encode sample quote {:?}: {}", text, e));
                continue;
            }
        };

        match store.create_document(QUOTE_COLLECTION, document).await {
            Ok(id) => {
                tracing::debug!(id = %id, "Seeded sample quote");
                report.inserted += 1;
            }
            Err(e) => {
                report
                    .warnings
                    .push(format!("failed to seed sample quote {:?}: {}", text, e));
            }
        }
    }

    report
}
