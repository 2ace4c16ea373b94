use std::ops::Deref;

use bson::Bson;
use futures::StreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::Result;
use mongodb::options::FindOptions;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::util::object_id;

database_derived!(
    /// MongoDB implementation
    pub struct MongoDb(pub ::mongodb::Client, pub String);
);

impl Deref for MongoDb {
    type Target = mongodb::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MongoDb {
    /// Get the Newsdesk database
    pub fn db(&self) -> mongodb::Database {
        self.database(&self.1)
    }

    /// Get a collection by its name
    pub fn col<T: Send + Sync>(&self, collection: &str) -> mongodb::Collection<T> {
        self.db().collection(collection)
    }

    /// Filter matching a document by id, whether stored as an object id or as a string
    pub fn id_filter(id: &str) -> Document {
        doc! {
            "_id": {
                "$in": object_id::any_form(id)
            }
        }
    }

    /// Insert one document into a collection
    pub async fn insert_one<T: Serialize + Send + Sync>(
        &self,
        collection: &'static str,
        document: T,
    ) -> Result<InsertOneResult> {
        self.col::<T>(collection).insert_one(document).await
    }

    /// Count documents matching the filter
    pub async fn count_documents(&self, collection: &'static str, filter: Document) -> Result<u64> {
        self.col::<Document>(collection).count_documents(filter).await
    }

    /// Find documents matching the filter
    ///
    /// Documents that do not fit `T` are logged and left out.
    pub async fn find_with_options<O, T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        filter: Document,
        options: O,
    ) -> Result<Vec<T>>
    where
        O: Into<Option<FindOptions>>,
    {
        Ok(self
            .col::<T>(collection)
            .find(filter)
            .with_options(options)
            .await?
            .filter_map(|s| async move {
                s.map_err(|err| warn!("Skipping invalid document in {collection}: {err}"))
                    .ok()
            })
            .collect::<Vec<T>>()
            .await)
    }

    /// Find documents by their ids, in no particular order
    pub async fn find_by_ids<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        ids: &[String],
    ) -> Result<Vec<T>> {
        let ids: Vec<Bson> = ids.iter().flat_map(|id| object_id::any_form(id)).collect();
        self.find_with_options(collection, doc! { "_id": { "$in": ids } }, None)
            .await
    }

    /// Find the first document matching the filter
    pub async fn find_one<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        filter: Document,
    ) -> Result<Option<T>> {
        self.col::<T>(collection).find_one(filter).await
    }

    /// Find one document by its id
    pub async fn find_one_by_id<T: DeserializeOwned + Unpin + Send + Sync>(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<Option<T>> {
        self.find_one(collection, MongoDb::id_filter(id)).await
    }

    /// Apply an update to the first document matching the filter
    pub async fn update_one(
        &self,
        collection: &'static str,
        filter: Document,
        update: Document,
    ) -> Result<UpdateResult> {
        self.col::<Document>(collection)
            .update_one(filter, update)
            .await
    }

    /// Apply an update to a document by its id
    pub async fn update_one_by_id(
        &self,
        collection: &'static str,
        id: &str,
        update: Document,
    ) -> Result<UpdateResult> {
        self.update_one(collection, MongoDb::id_filter(id), update)
            .await
    }

    /// Delete a document by its id
    pub async fn delete_one_by_id(
        &self,
        collection: &'static str,
        id: &str,
    ) -> Result<DeleteResult> {
        self.col::<Document>(collection)
            .delete_one(MongoDb::id_filter(id))
            .await
    }
}
