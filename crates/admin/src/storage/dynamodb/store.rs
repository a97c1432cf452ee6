//! DynamoDB document store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, Put, TransactWriteItem};
use aws_sdk_dynamodb::Client;

use humanbench_core::storage::{
    generate_document_id, merge_documents, Document, DocumentPath, DocumentStore, Result,
    StoreError, StoredDocument, WriteBatch, WriteOp,
};

use super::conversions::{document_to_item, item_to_document};
use super::error::{map_build_error, map_get_item_error, map_query_error, map_transact_write_error};
use super::keys;
use crate::config::Config;

/// `TransactWriteItems` accepts at most 100 actions.
pub const DYNAMODB_MAX_BATCH_SIZE: usize = 100;

/// Returns a display string for the target environment.
pub fn target_display(config: &Config) -> String {
    match &config.endpoint_url {
        Some(url) => format!("Local DynamoDB ({}), table {}", url, config.table_name),
        None => format!(
            "AWS DynamoDB (region: {}), table {}",
            config.region, config.table_name
        ),
    }
}

/// DynamoDB-based document store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    target: String,
}

/// A put waiting to be sent, after folding every op on the same path.
struct PendingPut {
    path: DocumentPath,
    data: Document,
    must_not_exist: bool,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            target: target.into(),
        }
    }

    /// Creates a store from configuration, using the AWS SDK default
    /// credential chain.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
        }

        let sdk_config = sdk_config_loader.load().await;
        Ok(Self::new(
            Client::new(&sdk_config),
            &config.table_name,
            target_display(config),
        ))
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Folds the batch into one put per path.
    ///
    /// A transaction may touch each item once. Merges read the current
    /// document first, so they are not isolated from concurrent writers.
    async fn plan_puts(&self, batch: WriteBatch) -> Result<(Vec<PendingPut>, Vec<DocumentPath>)> {
        let mut puts: Vec<PendingPut> = Vec::with_capacity(batch.len());
        let mut index: HashMap<DocumentPath, usize> = HashMap::new();
        let mut paths = Vec::with_capacity(batch.len());

        for op in batch.into_ops() {
            let (path, data, merge, must_not_exist) = match op {
                WriteOp::Set { path, data, merge } => (path, data, merge, false),
                WriteOp::Create { collection, data } => (
                    DocumentPath::new(collection, generate_document_id()),
                    data,
                    false,
                    true,
                ),
            };
            paths.push(path.clone());

            if let Some(&i) = index.get(&path) {
                let pending = &mut puts[i];
                if merge {
                    merge_documents(&mut pending.data, data);
                } else {
                    pending.data = data;
                }
                continue;
            }

            let data = if merge {
                match self.get(&path).await? {
                    Some(mut existing) => {
                        merge_documents(&mut existing, data);
                        existing
                    }
                    None => data,
                }
            } else {
                data
            };

            index.insert(path.clone(), puts.len());
            puts.push(PendingPut {
                path,
                data,
                must_not_exist,
            });
        }

        Ok((puts, paths))
    }
}

#[async_trait]
impl DocumentStore for DynamoDbStore {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::collection_pk(&path.collection)))
            .key("SK", AttributeValue::S(keys::document_sk(&path.id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_document(&item)?.data)),
            None => Ok(None),
        }
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let mut documents = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk AND begins_with(SK, :sk)")
                .expression_attribute_values(
                    ":pk",
                    AttributeValue::S(keys::collection_pk(collection)),
                )
                .expression_attribute_values(
                    ":sk",
                    AttributeValue::S(keys::DOCUMENT_PREFIX.to_string()),
                )
                .consistent_read(true)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_query_error)?;

            for item in result.items.unwrap_or_default() {
                documents.push(item_to_document(&item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(collection, count = documents.len(), "listed collection");
        Ok(documents)
    }

    async fn commit(&self, batch: WriteBatch) -> Result<Vec<DocumentPath>> {
        if batch.len() > DYNAMODB_MAX_BATCH_SIZE {
            return Err(StoreError::BatchTooLarge {
                size: batch.len(),
                max: DYNAMODB_MAX_BATCH_SIZE,
            });
        }
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        let (puts, paths) = self.plan_puts(batch).await?;

        let mut items = Vec::with_capacity(puts.len());
        for pending in puts {
            let put = Put::builder()
                .table_name(&self.table_name)
                .set_item(Some(document_to_item(&pending.path, &pending.data)))
                .set_condition_expression(
                    pending
                        .must_not_exist
                        .then(|| "attribute_not_exists(PK)".to_string()),
                )
                .build()
                .map_err(map_build_error)?;
            items.push(TransactWriteItem::builder().put(put).build());
        }

        self.client
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await
            .map_err(map_transact_write_error)?;

        Ok(paths)
    }

    fn max_batch_size(&self) -> usize {
        DYNAMODB_MAX_BATCH_SIZE
    }

    fn target_display(&self) -> String {
        self.target.clone()
    }
}
