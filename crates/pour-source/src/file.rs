//! Local export source — a JSON file shaped exactly like the API response.

use crate::decode_rows;
use pour_core::{RawRow, RowSource, SourceError};
use std::path::PathBuf;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<RawRow>, SourceError> {
        let body = tokio::fs::read(&self.path).await.map_err(|e| SourceError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        decode_rows(&body)
    }
}
