use super::CatalogSource;
use crate::error::Result;
use crate::model::Library;
use log::trace;
use std::fs;
use std::path::PathBuf;

/// Catalog source backed by a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<Library> {
        trace!("FileSource::fetch() {}", self.location);
        let content = fs::read_to_string(&self.path)?;
        let library: Library = serde_json::from_str(&content)?;
        Ok(library)
    }

    fn location(&self) -> &str {
        &self.location
    }
}
