use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::FindOptions,
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

/// Generic handle on a document database: one collection name in, raw
/// BSON documents out. Handlers depend on this seam, so tests substitute
/// a fake store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document and returns the store-assigned id as a string.
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError>;

    /// Returns up to `limit` documents matching an exact-match field
    /// filter (empty filter = no constraint). Ordering is store-default.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to build MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Document store initialized");
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<String, AppError> {
        let result = self
            .collection(collection)
            .insert_one(document, None)
            .await
            .map_err(AppError::from)?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = self
            .collection(collection)
            .find(filter, options)
            .await
            .map_err(AppError::from)?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(AppError::from)? {
            documents.push(document);
        }
        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(doc! {})
            .await
            .map_err(AppError::from)
    }
}
