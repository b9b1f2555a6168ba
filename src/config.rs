use std::path::{Path, PathBuf};

pub const MONGO_URL: &str = "mongodb://localhost:27017/";
pub const DATABASE_NAME: &str = "VEC";
pub const DOCS_DIR: &str = "Backend/docs";

/// One collection and the JSON file that seeds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTarget {
    pub collection: String,
    pub file_name: String,
    /// Line printed to stdout once the collection has been written.
    pub message: String,
}

impl LoadTarget {
    pub fn new(collection: &str, file_name: &str, message: &str) -> Self {
        Self {
            collection: collection.to_string(),
            file_name: file_name.to_string(),
            message: message.to_string(),
        }
    }

    pub fn path(&self, docs_dir: &Path) -> PathBuf {
        docs_dir.join(&self.file_name)
    }
}

/// Where the loader connects and what it loads, in order.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub mongo_url: String,
    pub database_name: String,
    pub docs_dir: PathBuf,
    pub targets: Vec<LoadTarget>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mongo_url: MONGO_URL.to_string(),
            database_name: DATABASE_NAME.to_string(),
            docs_dir: PathBuf::from(DOCS_DIR),
            targets: default_targets(),
        }
    }
}

pub fn default_targets() -> Vec<LoadTarget> {
    vec![
        LoadTarget::new("qa_form", "qa_form.json", "qa_form inserted successfully."),
        LoadTarget::new(
            "student",
            "student.json",
            "students data inserted successfully.",
        ),
        LoadTarget::new(
            "qa_question",
            "qa_question.json",
            "qa_question inserted successfully.",
        ),
        LoadTarget::new("staff", "staff.json", "staff inserted successfully."),
    ]
}
