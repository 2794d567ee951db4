//! JSON-file persistence for records.
//!
//! The whole collection lives in a single file as a pretty-printed JSON
//! array. A missing file is an empty collection; the file is created on the
//! first append.

use std::path::{Path, PathBuf};

use api_types::record::Record;
use thiserror::Error;
use tokio::{fs, sync::Mutex};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every record in insertion order.
    pub async fn load(&self) -> Result<Vec<Record>, StoreError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Appends `record` at the end of the collection and returns the new length.
    pub async fn append(&self, record: Record) -> Result<usize, StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        records.push(record);
        self.write(&records).await?;
        Ok(records.len())
    }

    async fn read(&self) -> Result<Vec<Record>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    async fn write(&self, records: &[Record]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }
}
