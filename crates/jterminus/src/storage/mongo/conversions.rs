//! Conversions between feedback records and BSON documents.

use mongodb::bson::{Bson, DateTime, Document};
use serde_json::{Number, Value};

use jterminus_core::feedback::{FeedbackId, FeedbackRecord};

/// Build the document stored for a record.
///
/// Key order is `name`, `email`, `message`, client extras in the order
/// received, then `timestamp` and `status`.
pub fn record_to_document(record: &FeedbackRecord) -> Document {
    let mut document = Document::new();
    document.insert("name", record.name.as_str());
    document.insert("email", record.email.as_str());
    document.insert("message", record.message.as_str());

    for (key, value) in &record.extra {
        document.insert(key.as_str(), json_to_bson(value));
    }

    document.insert(
        "timestamp",
        DateTime::from_millis(record.timestamp.timestamp_millis()),
    );
    document.insert("status", record.status.as_str());

    document
}

/// Convert a client JSON value into BSON.
///
/// Integers are stored as `Int32` when they fit, then `Int64`. Anything
/// wider, such as a `u64` above `i64::MAX`, is stored as a `Double`.
pub fn json_to_bson(value: &Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => number_to_bson(n),
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(items.iter().map(json_to_bson).collect()),
        Value::Object(fields) => Bson::Document(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), json_to_bson(value)))
                .collect(),
        ),
    }
}

fn number_to_bson(n: &Number) -> Bson {
    match n.as_i64() {
        Some(i) => i32::try_from(i).map_or(Bson::Int64(i), Bson::Int32),
        None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Turn the `_id` reported by InsertOne into a [`FeedbackId`].
pub fn inserted_id_to_feedback_id(id: &Bson) -> FeedbackId {
    match id {
        Bson::ObjectId(oid) => FeedbackId::new(oid.to_hex()),
        Bson::String(s) => FeedbackId::new(s.clone()),
        other => FeedbackId::new(other.to_string()),
    }
}
