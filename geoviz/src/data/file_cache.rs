use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;

use super::PersistentCacheController;
use crate::error::GeovizError;

/// Function to modify the default file path of a cache entry.
pub type FileCachePathModifier = dyn Fn(&str) -> String + Send + Sync;

/// Modifier that drops the query string from the url.
/// Can be used as a [`FileCachePathModifier`].
pub fn remove_parameters_modifier(path: &str) -> String {
    path.split('?').next().unwrap_or(path).to_owned()
}

/// Stores downloaded datasets as files in the given folder. File names are derived from the urls.
///
/// There is no eviction. Delete the folder to force a reload.
pub struct FileCacheController {
    folder_path: PathBuf,
    file_path_modifier: Option<Box<FileCachePathModifier>>,
}

impl std::fmt::Debug for FileCacheController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCacheController")
            .field("folder_path", &self.folder_path)
            .field("has_modifier", &self.file_path_modifier.is_some())
            .finish()
    }
}

impl PersistentCacheController<str, Bytes> for FileCacheController {
    fn get(&self, key: &str) -> Option<Bytes> {
        let file_path = self.get_file_path(key);
        match std::fs::read(&file_path) {
            Ok(bytes) => {
                debug!("Cache hit for {key} in {file_path:?}");
                Some(bytes.into())
            }
            Err(_) => None,
        }
    }

    fn insert(&self, key: &str, data: &Bytes) -> Result<(), GeovizError> {
        let file_path = self.get_file_path(key);
        let Some(folder) = file_path.parent() else {
            debug!("Failed to add {key} entry to the cache {file_path:?} - no parent folder");
            return Err(GeovizError::FsIo(format!(
                "no parent folder for cache file {file_path:?}"
            )));
        };

        if let Err(err) = ensure_folder_exists(folder) {
            debug!("Failed to add {key} entry to the cache {file_path:?} - failed to create folder: {err:?}");
            return Err(err.into());
        }

        debug!("Saving entry {key} to the cache file {file_path:?}");
        std::fs::write(&file_path, data)?;
        debug!("Entry {key} saved to cache file {file_path:?}");

        Ok(())
    }
}

impl FileCacheController {
    /// Creates a new instance located in the given directory. The directory is created if it
    /// doesn't exist. Every entry is stored in a nested folder built from its url with the scheme
    /// stripped, e.g. `example.com/data/incidents.csv`. The layout can be changed with
    /// `file_path_modifier`.
    pub fn new(
        path: impl AsRef<Path>,
        file_path_modifier: Option<Box<FileCachePathModifier>>,
    ) -> Result<Self, GeovizError> {
        ensure_folder_exists(path.as_ref()).map_err(|err| {
            GeovizError::FsIo(format!(
                "failed to initialize file cache folder {:?}: {err}",
                path.as_ref()
            ))
        })?;
        Ok(Self {
            folder_path: path.as_ref().into(),
            file_path_modifier,
        })
    }

    /// Folder the cache is stored in.
    pub fn folder_path(&self) -> &Path {
        &self.folder_path
    }

    fn get_file_path(&self, url: &str) -> PathBuf {
        let stripped = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .unwrap_or(url);

        let path = match &self.file_path_modifier {
            Some(modifier) => modifier(stripped),
            None => stripped.replace(['?', '&', '='], "_"),
        };

        self.folder_path.join(Path::new(&path))
    }
}

fn ensure_folder_exists(folder_path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(folder_path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn file_path_strips_scheme() {
        let temp = TempDir::new().expect("temp dir");
        let folder = temp.path().join("cache");
        let cache = FileCacheController::new(&folder, None).expect("cache folder");
        assert!(folder.is_dir());

        assert_eq!(
            cache.get_file_path("https://example.com/data/incidents.csv"),
            folder.join("example.com/data/incidents.csv")
        );
        assert_eq!(
            cache.get_file_path("http://example.com/a.csv?limit=10"),
            folder.join("example.com/a.csv_limit_10")
        );
    }

    #[test]
    fn modifier_is_applied() {
        let temp = TempDir::new().expect("temp dir");
        let folder = temp.path().to_path_buf();
        let cache = FileCacheController::new(&folder, Some(Box::new(remove_parameters_modifier)))
            .expect("cache folder");

        assert_eq!(
            cache.get_file_path("https://example.com/a.csv?limit=10"),
            folder.join("example.com/a.csv")
        );
    }

    #[test]
    fn insert_then_get() {
        let temp = TempDir::new().expect("temp dir");
        let cache = FileCacheController::new(temp.path(), None).expect("cache folder");
        let url = "https://example.com/data/incidents.csv";

        assert_eq!(cache.get(url), None);
        cache
            .insert(url, &Bytes::from_static(b"X,Y,Category\n"))
            .expect("stored");
        assert_eq!(cache.get(url), Some(Bytes::from_static(b"X,Y,Category\n")));
        assert!(temp.path().join("example.com/data/incidents.csv").is_file());
    }
}
