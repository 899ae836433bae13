use super::DataStore;
use crate::error::{Result, TodzError};
use crate::model::Todo;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: the whole list lives in one JSON document at `path`.
///
/// The path is injected by the caller (see [`crate::config::TodzConfig`]);
/// the store itself never guesses a location.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodzError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    /// Lenient by contract: a missing file, a read fault, and malformed
    /// JSON all load as the empty list. Starting over beats refusing to
    /// start; the next `save` rewrites the document from scratch.
    fn load(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(todos).map_err(TodzError::Serialization)?;
        fs::write(&self.path, content).map_err(TodzError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(TodzError::Io)?;
        Ok(true)
    }
}
