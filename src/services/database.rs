use anyhow::Result;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, options::ClientOptions};
use tokio_stream::StreamExt;

use crate::error::LoadError;

pub async fn create_mongo_client(url: &str) -> Result<Client> {
    let client = Client::with_options(ClientOptions::parse(url).await?)?;
    Ok(client)
}

/// Typed handle on `name` inside `database`.
pub fn get_collection(mongo_client: &Client, database: &str, name: &str) -> Collection<Document> {
    mongo_client.database(database).collection::<Document>(name)
}

/// Write every record with a single `insertMany`. Returns the number of ids
/// the server acknowledged.
pub async fn insert_records(
    collection: &Collection<Document>,
    records: Vec<Document>,
) -> Result<u64, LoadError> {
    let result = collection
        .insert_many(records, None)
        .await
        .map_err(|source| LoadError::Database {
            collection: collection.name().to_string(),
            source,
        })?;
    Ok(result.inserted_ids.len() as u64)
}

pub async fn count_records(collection: &Collection<Document>) -> Result<u64, LoadError> {
    collection
        .count_documents(doc! {}, None)
        .await
        .map_err(|source| LoadError::Database {
            collection: collection.name().to_string(),
            source,
        })
}

/// Every document in the collection, in natural order.
pub async fn fetch_records(collection: &Collection<Document>) -> Result<Vec<Document>, LoadError> {
    let to_error = |source: mongodb::error::Error| LoadError::Database {
        collection: collection.name().to_string(),
        source,
    };

    let mut cursor = collection.find(None, None).await.map_err(to_error)?;
    let mut records = Vec::new();
    while let Some(record) = cursor.next().await {
        records.push(record.map_err(to_error)?);
    }
    Ok(records)
}
