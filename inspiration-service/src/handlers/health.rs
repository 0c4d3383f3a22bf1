use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Inspiration API is running" }))
}

pub async fn hello() -> impl IntoResponse {
    Json(json!({ "message": "Hello from the backend API!" }))
}

fn truncated(message: &str) -> String {
    message.chars().take(50).collect()
}

fn env_flag(set: bool) -> &'static str {
    if set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

/// Store diagnostic. Never answers with an error status: every failure is
/// folded into a descriptive string in the body, truncated so the
/// endpoint does not leak full error detail.
pub async fn diagnostics(State(state): State<AppState>) -> impl IntoResponse {
    let (database, connection_status, collections) = match &state.store {
        Some(store) => match store.list_collection_names().await {
            Ok(names) => (
                "✅ Connected & Working".to_string(),
                "Connected",
                names.into_iter().take(10).collect(),
            ),
            Err(e) => (
                format!("⚠️  Connected but Error: {}", truncated(&e.to_string())),
                "Connected",
                Vec::new(),
            ),
        },
        None => (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            Vec::new(),
        ),
    };

    Json(json!({
        "backend": "✅ Running",
        "database": database,
        "database_url": env_flag(state.config.database.url.is_some()),
        "database_name": env_flag(state.config.database.name.is_some()),
        "connection_status": connection_status,
        "collections": collections,
    }))
}
