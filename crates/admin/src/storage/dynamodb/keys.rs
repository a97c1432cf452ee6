//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. All functions are sync and have no side effects.

// ============================================================================
// Key prefixes
// ============================================================================

pub const COLLECTION_PREFIX: &str = "COLL#";
pub const DOCUMENT_PREFIX: &str = "DOC#";

/// Entity type stored alongside every document item.
pub const ENTITY_TYPE_DOCUMENT: &str = "DOCUMENT";

// ============================================================================
// Document keys
// ============================================================================

/// Generate partition key for a collection.
///
/// Pattern: `COLL#<collection>`
pub fn collection_pk(collection: &str) -> String {
    format!("{COLLECTION_PREFIX}{collection}")
}

/// Generate sort key for a document.
///
/// Pattern: `DOC#<document_id>`
pub fn document_sk(id: &str) -> String {
    format!("{DOCUMENT_PREFIX}{id}")
}

/// Extracts the collection name from a partition key.
pub fn parse_collection_pk(pk: &str) -> Option<&str> {
    pk.strip_prefix(COLLECTION_PREFIX)
}

/// Extracts the document id from a sort key.
pub fn parse_document_sk(sk: &str) -> Option<&str> {
    sk.strip_prefix(DOCUMENT_PREFIX)
}
