//! Star storage in a MongoDB collection, one document per star.
//!
//! Write atomicity is per document and delegated to the driver; the store
//! itself keeps no locks. MongoDB assigns each document an `ObjectId`, which
//! is converted to its hex string form before it crosses the store contract
//! boundary - the native identifier type is never exposed to the API layer.

use crate::store::{StarStore, StoreError};
use async_trait::async_trait;
use common::model::star::Star;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

const DB_NAME: &str = "honowa";
const COLLECTION_NAME: &str = "stars";

/// Document shape of one star in the collection.
#[derive(Debug, Serialize, Deserialize)]
struct StarDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    text: String,
    position: [f64; 3],
    color: String,
}

impl StarDocument {
    fn into_star(self) -> Star {
        Star {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            text: self.text,
            position: self.position,
            color: self.color,
        }
    }
}

pub struct MongoStore {
    stars: Collection<StarDocument>,
}

impl MongoStore {
    /// Connects with the given connection string and binds the star
    /// collection. Connectivity problems surface on the first operation.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let stars = client.database(DB_NAME).collection(COLLECTION_NAME);
        Ok(MongoStore { stars })
    }
}

#[async_trait]
impl StarStore for MongoStore {
    async fn append(
        &self,
        text: String,
        position: [f64; 3],
        color: &str,
    ) -> Result<Star, StoreError> {
        let document = StarDocument {
            id: None,
            text,
            position,
            color: color.to_string(),
        };
        let result = self.stars.insert_one(&document).await?;

        let id = match result.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(Star {
            id,
            text: document.text,
            position: document.position,
            color: document.color,
        })
    }

    async fn list_all(&self) -> Result<Vec<Star>, StoreError> {
        let mut cursor = self.stars.find(doc! {}).await?;
        let mut stars = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            stars.push(document.into_star());
        }
        Ok(stars)
    }
}
