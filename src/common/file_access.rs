//! File system access as a swappable feature.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::{Container, Feature};

/// Why a [`FileAccess`] operation failed.
///
/// Deliberately coarse: callers branch on "was it there" versus "did the
/// access fail", nothing more. Failure is encoded here, inside the instance's
/// own result types, never surfaced through the container, whose accessors
/// are failure-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FileAccessError {
    /// The file does not exist.
    #[error("file not found")]
    NotFound,
    /// The file exists but could not be read, written or removed.
    #[error("file access failed")]
    AccessFailed,
}

impl FileAccessError {
    fn from_io(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::AccessFailed,
        }
    }
}

type LoadFn = Arc<dyn Fn(&Path) -> Result<Vec<u8>, FileAccessError> + Send + Sync>;
type SaveFn = Arc<dyn Fn(&Path, &[u8]) -> Result<(), FileAccessError> + Send + Sync>;
type DeleteFn = Arc<dyn Fn(&Path) -> Result<(), FileAccessError> + Send + Sync>;

/// Load/save/delete over paths, loadable as a feature.
///
/// [`FileAccess::system`] talks to the real file system; tests install a
/// closure-backed double via [`set_feature`](crate::Container::set_feature)
/// and never touch disk.
#[derive(Clone)]
pub struct FileAccess {
    load: LoadFn,
    save: SaveFn,
    delete: DeleteFn,
}

impl FileAccess {
    /// Builds an access front from the three operation closures.
    pub fn new(
        load: impl Fn(&Path) -> Result<Vec<u8>, FileAccessError> + Send + Sync + 'static,
        save: impl Fn(&Path, &[u8]) -> Result<(), FileAccessError> + Send + Sync + 'static,
        delete: impl Fn(&Path) -> Result<(), FileAccessError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            load: Arc::new(load),
            save: Arc::new(save),
            delete: Arc::new(delete),
        }
    }

    /// Reads the entire contents of the file at `path`.
    pub fn load(&self, path: &Path) -> Result<Vec<u8>, FileAccessError> {
        (self.load)(path)
    }

    /// Writes `data` to the file at `path`, replacing existing contents.
    pub fn save(&self, path: &Path, data: &[u8]) -> Result<(), FileAccessError> {
        (self.save)(path, data)
    }

    /// Removes the file at `path`.
    pub fn delete(&self, path: &Path) -> Result<(), FileAccessError> {
        (self.delete)(path)
    }

    /// The real file system. Saving creates missing parent directories.
    pub fn system() -> Self {
        Self::new(
            |path| fs::read(path).map_err(FileAccessError::from_io),
            |path, data| {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(FileAccessError::from_io)?;
                }
                fs::write(path, data).map_err(FileAccessError::from_io)
            },
            |path| fs::remove_file(path).map_err(FileAccessError::from_io),
        )
    }
}

impl Feature for FileAccess {
    type Instance = FileAccess;

    fn load(_container: &Container) -> FileAccess {
        FileAccess::system()
    }
}
