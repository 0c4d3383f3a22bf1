use crate::dtos::{document_to_response, ListQuotesParams, QuoteSavedResponse};
use crate::models::{NewQuote, Quote, QUOTE_COLLECTION};
use crate::services::seed_quotes;
use crate::startup::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use mongodb::bson::{self, doc, Document};
use rand::seq::SliceRandom;
use service_core::error::AppError;

const DEFAULT_LIST_LIMIT: i64 = 20;
const RANDOM_CANDIDATE_LIMIT: i64 = 50;

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<QuoteSavedResponse>, AppError> {
    let quote = Quote::from(NewQuote::parse(payload)?);

    // Store trouble on the creation path answers 400, like every other
    // rejected write.
    let id = persist_quote(&state, &quote)
        .await
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!("{}", e)))?;

    tracing::info!(id = %id, "Quote saved");

    Ok(Json(QuoteSavedResponse {
        id,
        message: "Quote saved".to_string(),
    }))
}

async fn persist_quote(state: &AppState, quote: &Quote) -> Result<String, AppError> {
    let store = state.store()?;
    let document = bson::to_document(quote)?;
    store.create_document(QUOTE_COLLECTION, document).await
}

pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<ListQuotesParams>,
) -> Result<Json<Vec<serde_json::Value>>, AppError> {
    let store = state.store()?;
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    let filter = match params.mood {
        Some(mood) => doc! { "mood": mood },
        None => Document::new(),
    };

    let documents = store.get_documents(QUOTE_COLLECTION, filter, limit).await?;

    Ok(Json(
        documents.into_iter().map(document_to_response).collect(),
    ))
}

pub async fn random_quote(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = state.store()?;

    let mut candidates = store
        .get_documents(QUOTE_COLLECTION, Document::new(), RANDOM_CANDIDATE_LIMIT)
        .await?;

    if candidates.is_empty() {
        let report = seed_quotes(store.as_ref()).await;
        for warning in &report.warnings {
            tracing::warn!("{}", warning);
        }
        tracing::info!(inserted = report.inserted, "Seeded sample quotes");

        candidates = store
            .get_documents(QUOTE_COLLECTION, Document::new(), RANDOM_CANDIDATE_LIMIT)
            .await?;
    }

    let chosen = candidates
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::EmptyResult("no quotes available".to_string()))?;

    Ok(Json(document_to_response(chosen)))
}
