//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! JSON documents. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use humanbench_core::storage::{Document, DocumentPath, StoreError, StoredDocument};
use serde_json::{Number, Value};

use super::keys;

// ============================================================================
// JSON values
// ============================================================================

/// Convert a JSON value to its native DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
///
/// Set and binary attributes have no JSON counterpart and are rejected.
pub fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => attributes_to_document(map).map(Value::Object),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn attributes_to_document(map: &HashMap<String, AttributeValue>) -> Result<Document, StoreError> {
    map.iter()
        .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
        .collect()
}

fn parse_number(n: &str) -> Result<Number, StoreError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Number::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| StoreError::InvalidData(format!("Invalid number: {}", n)))
}

// ============================================================================
// Document items
// ============================================================================

/// Convert a document to a DynamoDB item.
pub fn document_to_item(path: &DocumentPath, data: &Document) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::collection_pk(&path.collection)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::document_sk(&path.id)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(keys::ENTITY_TYPE_DOCUMENT.to_string()),
    );

    // Data
    item.insert(
        "collection".to_string(),
        AttributeValue::S(path.collection.clone()),
    );
    item.insert("id".to_string(), AttributeValue::S(path.id.clone()));
    item.insert(
        "data".to_string(),
        AttributeValue::M(
            data.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    );

    item
}

/// Convert a DynamoDB item to a stored document.
pub fn item_to_document(
    item: &HashMap<String, AttributeValue>,
) -> Result<StoredDocument, StoreError> {
    let data = match item.get("data") {
        Some(AttributeValue::M(map)) => attributes_to_document(map)?,
        _ => {
            return Err(StoreError::InvalidData(
                "Missing or invalid field: data".to_string(),
            ))
        }
    };

    Ok(StoredDocument {
        path: DocumentPath::new(get_string(item, "collection")?, get_string(item, "id")?),
        data,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}
