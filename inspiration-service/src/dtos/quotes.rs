use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct ListQuotesParams {
    pub mood: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuoteSavedResponse {
    pub id: String,
    pub message: String,
}

/// Maps store-native types to their transport representation: ObjectId
/// becomes the 24-hex string, datetimes become RFC 3339 strings. All
/// other values go through the relaxed JSON conversion.
pub fn document_to_response(document: Document) -> Value {
    let mut object = Map::with_capacity(document.len());
    for (key, value) in document {
        let value = match value {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            Bson::DateTime(dt) => Value::String(dt.to_chrono().to_rfc3339()),
            other => other.into(),
        };
        object.insert(key, value);
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId, DateTime};

    #[test]
    fn object_ids_become_hex_strings() {
        let oid = ObjectId::new();
        let response = document_to_response(doc! { "_id": oid });

        assert_eq!(response["_id"], Value::String(oid.to_hex()));
        assert_eq!(response["_id"].as_str().unwrap().len(), 24);
    }

    #[test]
    fn datetimes_become_rfc3339_strings() {
        let response =
            document_to_response(doc! { "created_at": DateTime::from_millis(1_700_000_000_000) });

        assert_eq!(response["created_at"], "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn scalars_and_nulls_pass_through() {
        let response = document_to_response(doc! {
            "text": "Test quote",
            "author": Bson::Null,
            "mood": "test"
        });

        assert_eq!(response["text"], "Test quote");
        assert!(response["author"].is_null());
        assert_eq!(response["mood"], "test");
    }
}
