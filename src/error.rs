use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a JSON file into a collection.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Root value is not an array of objects.
    #[error("unexpected document shape in {}: {detail}", path.display())]
    Shape { path: PathBuf, detail: String },

    /// The driver refuses an empty bulk insert.
    #[error("no records in {}", path.display())]
    Empty { path: PathBuf },

    #[error("record {index} in {} is not a valid BSON document: {detail}", path.display())]
    Convert {
        path: PathBuf,
        index: usize,
        detail: String,
    },

    #[error("MongoDB error on collection '{collection}': {source}")]
    Database {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// Writing a confirmation line failed.
    #[error("failed to write confirmation: {0}")]
    Output(#[from] std::io::Error),
}
