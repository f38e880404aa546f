//! Acknowledgements returned to clients after a write, shaped like the
//! driver results the storefront has always received.

use std::collections::BTreeMap;

use bson::Bson;
use mongodb::results::{DeleteResult, InsertManyResult, InsertOneResult, UpdateResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneOutcome {
    pub acknowledged: bool,
    pub inserted_id: Bson,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertManyOutcome {
    pub acknowledged: bool,
    pub inserted_count: u64,
    /// Position in the submitted batch -> stored id
    pub inserted_ids: BTreeMap<String, Bson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Bson>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl InsertOneOutcome {
    pub fn new(inserted_id: impl Into<Bson>) -> Self {
        InsertOneOutcome { acknowledged: true, inserted_id: inserted_id.into() }
    }
}

impl InsertManyOutcome {
    pub fn new<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = (usize, Bson)>,
    {
        let inserted_ids: BTreeMap<String, Bson> =
            ids.into_iter().map(|(idx, id)| (idx.to_string(), id)).collect();
        InsertManyOutcome {
            acknowledged: true,
            inserted_count: inserted_ids.len() as u64,
            inserted_ids,
        }
    }
}

impl UpdateOutcome {
    pub fn new(matched_count: u64, modified_count: u64, upserted_id: Option<Bson>) -> Self {
        UpdateOutcome {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

impl DeleteOutcome {
    pub fn new(deleted_count: u64) -> Self {
        DeleteOutcome { acknowledged: true, deleted_count }
    }
}

impl From<InsertOneResult> for InsertOneOutcome {
    fn from(result: InsertOneResult) -> Self {
        InsertOneOutcome::new(result.inserted_id)
    }
}

impl From<InsertManyResult> for InsertManyOutcome {
    fn from(result: InsertManyResult) -> Self {
        InsertManyOutcome::new(result.inserted_ids)
    }
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(result: UpdateResult) -> Self {
        UpdateOutcome::new(result.matched_count, result.modified_count, result.upserted_id)
    }
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(result: DeleteResult) -> Self {
        DeleteOutcome::new(result.deleted_count)
    }
}
