use async_trait::async_trait;
use inspiration_service::config::{DatabaseConfig, InspirationConfig};
use inspiration_service::services::DocumentStore;
use inspiration_service::startup::Application;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawns the application on a random port with the given store
    /// substituted for the real one. `None` simulates a process started
    /// without DATABASE_URL.
    pub async fn spawn(store: Option<Arc<dyn DocumentStore>>) -> Self {
        let config = test_config(store.is_some());
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept requests.
        let client = reqwest::Client::new();
        let url = format!("{}/", address);
        for _ in 0..50 {
            if client.get(&url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

fn test_config(store_configured: bool) -> InspirationConfig {
    InspirationConfig {
        common: CoreConfig { port: 0 },
        database: DatabaseConfig {
            url: store_configured.then(|| "mongodb://localhost:27017".to_string()),
            name: store_configured.then(|| "inspiration_test".to_string()),
        },
    }
}

/// Store substitute backed by a map of collections, with the same
/// exact-match filter semantics the service relies on.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.lock().await;
        let documents = collections.get(collection).cloned().unwrap_or_default();
        Ok(documents
            .into_iter()
            .filter(|document| filter.iter().all(|(key, value)| document.get(key) == Some(value)))
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.collections.lock().await.keys().cloned().collect())
    }
}

/// Store substitute where every operation fails, as if the database were
/// unreachable.
pub struct FailingStore;

const FAILURE_DETAIL: &str =
    "connection refused: the document database is unreachable and this message runs well past fifty characters";

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(FAILURE_DETAIL)))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(FAILURE_DETAIL)))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(FAILURE_DETAIL)))
    }
}

/// Store substitute that reads fine but rejects every write, so seeding
/// can never make the collection non-empty.
pub struct ReadOnlyEmptyStore;

#[async_trait]
impl DocumentStore for ReadOnlyEmptyStore {
    async fn create_document(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<String, AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("write rejected")))
    }

    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Document,
        _limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        Ok(Vec::new())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(Vec::new())
    }
}
