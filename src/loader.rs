//! Seeds collections from JSON files.
//!
//! Each file is read whole, parsed whole and written with one bulk insert.
//! Loads run strictly one after another and the first failure ends the run;
//! collections written before it stay written.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jsonschema::JSONSchema;
use mongodb::bson::{Bson, Document};
use mongodb::{Client, Database};
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::config::{LoadTarget, LoaderConfig};
use crate::error::LoadError;
use crate::helpers::profiling::Probe;
use crate::services::database::insert_records;

/// Outcome of one successful load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub collection: String,
    pub inserted: u64,
    pub elapsed: Duration,
    pub memory_kb: u64,
}

pub struct Loader {
    database: Database,
    docs_dir: PathBuf,
    targets: Vec<LoadTarget>,
}

impl Loader {
    pub fn new(mongo_client: &Client, config: &LoaderConfig) -> Self {
        Self {
            database: mongo_client.database(&config.database_name),
            docs_dir: config.docs_dir.clone(),
            targets: config.targets.clone(),
        }
    }

    pub fn targets(&self) -> &[LoadTarget] {
        &self.targets
    }

    /// Load every configured target in order, writing each target's
    /// confirmation line to `out` as it completes.
    pub async fn run(&self, out: &mut impl Write) -> Result<Vec<LoadReport>, LoadError> {
        let mut reports = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let report = self.load(target).await?;
            writeln!(out, "{}", target.message)?;
            out.flush()?;
            reports.push(report);
        }
        Ok(reports)
    }

    /// Read `target`'s file and insert all of its records into its collection.
    pub async fn load(&self, target: &LoadTarget) -> Result<LoadReport, LoadError> {
        let probe = Probe::start();
        let path = target.path(&self.docs_dir);

        let records = read_records(&path).await?;
        debug!(path = %path.display(), records = records.len(), "records parsed");

        let collection = self.database.collection::<Document>(&target.collection);
        let inserted = insert_records(&collection, records).await?;

        let (elapsed, memory_kb) = probe.finish();
        info!(
            collection = %target.collection,
            inserted,
            elapsed = ?elapsed,
            memory_kb,
            "collection loaded"
        );

        Ok(LoadReport {
            collection: target.collection.clone(),
            inserted,
            elapsed,
            memory_kb,
        })
    }
}

/// Read a JSON file whose root is an array of objects and turn each object
/// into a BSON document. Nothing touches the database here.
pub async fn read_records(path: &Path) -> Result<Vec<Document>, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    check_shape(path, &value)?;

    let Value::Array(items) = value else {
        return Err(LoadError::Shape {
            path: path.to_path_buf(),
            detail: "root is not an array".to_string(),
        });
    };
    if items.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let convert_error = |detail: String| LoadError::Convert {
                path: path.to_path_buf(),
                index,
                detail,
            };
            match item {
                Value::Object(fields) => object_to_document(fields).map_err(convert_error),
                other => Err(convert_error(format!("{other} is not an object"))),
            }
        })
        .collect()
}

fn object_to_document(fields: &Map<String, Value>) -> Result<Document, String> {
    let mut document = Document::new();
    for (key, value) in fields {
        document.insert(key.clone(), value_to_bson(value)?);
    }
    Ok(document)
}

/// Integers that fit in 32 bits become `Int32`, wider ones `Int64`.
fn value_to_bson(value: &Value) -> Result<Bson, String> {
    let bson = match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::String(s) => Bson::String(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                match i32::try_from(i) {
                    Ok(small) => Bson::Int32(small),
                    Err(_) => Bson::Int64(i),
                }
            } else if n.is_u64() {
                return Err(format!("integer {n} exceeds the 64-bit signed range"));
            } else {
                match n.as_f64() {
                    Some(f) => Bson::Double(f),
                    None => return Err(format!("number {n} has no BSON representation")),
                }
            }
        }
        Value::Array(items) => Bson::Array(
            items
                .iter()
                .map(value_to_bson)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(fields) => Bson::Document(object_to_document(fields)?),
    };
    Ok(bson)
}

fn check_shape(path: &Path, value: &Value) -> Result<(), LoadError> {
    let shape_error = |detail: String| LoadError::Shape {
        path: path.to_path_buf(),
        detail,
    };

    let schema = json!({ "type": "array", "items": { "type": "object" } });
    let compiled = JSONSchema::compile(&schema).map_err(|e| shape_error(e.to_string()))?;

    if let Err(errors) = compiled.validate(value) {
        let detail = errors
            .map(|e| {
                let at = e.instance_path.to_string();
                if at.is_empty() {
                    e.to_string()
                } else {
                    format!("{at}: {e}")
                }
            })
            .collect::<Vec<_>>()
            .join("; ");
        return Err(shape_error(detail));
    }
    Ok(())
}
