use std::path::Path;

use bytes::Bytes;
use log::{info, warn};

use super::file_cache::FileCacheController;
use super::table::Table;
use super::PersistentCacheController;
use crate::error::GeovizError;

/// Cache used by the loader for remote datasets.
pub type BoxedCacheController = Box<dyn PersistentCacheController<str, Bytes> + Send + Sync>;

/// Loads CSV datasets from the network or from the file system.
///
/// Remote resources are fetched with a single GET request. There is no retry and no timeout.
pub struct DataLoader {
    http_client: reqwest::Client,
    cache: Option<BoxedCacheController>,
}

impl std::fmt::Debug for DataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

impl DataLoader {
    /// Creates a loader without a persistent cache.
    pub fn new() -> Result<Self, GeovizError> {
        let http_client = reqwest::Client::builder()
            .user_agent("geoviz/0.1")
            .build()?;

        Ok(Self {
            http_client,
            cache: None,
        })
    }

    /// Creates a loader that keeps downloaded datasets in the given folder.
    pub fn with_file_cache(path: impl AsRef<Path>) -> Result<Self, GeovizError> {
        let cache = FileCacheController::new(path, None)?;
        Ok(Self::new()?.with_cache_controller(Box::new(cache)))
    }

    /// Replaces the persistent cache.
    pub fn with_cache_controller(mut self, cache: BoxedCacheController) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Loads a table from an `http(s)://` url or a local path.
    pub async fn load(&self, source: &str) -> Result<Table, GeovizError> {
        if is_remote(source) {
            self.load_url(source).await
        } else {
            self.load_path(source)
        }
    }

    /// Fetches and parses a remote CSV resource.
    pub async fn load_url(&self, url: &str) -> Result<Table, GeovizError> {
        let bytes = self.load_bytes(url).await?;
        let table = Table::from_reader(bytes.as_ref())?;
        info!("Loaded {} rows from {url}", table.len());

        Ok(table)
    }

    /// Reads and parses a local CSV file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Table, GeovizError> {
        let table = Table::from_path(path.as_ref())?;
        info!("Loaded {} rows from {:?}", table.len(), path.as_ref());

        Ok(table)
    }

    async fn load_bytes(&self, url: &str) -> Result<Bytes, GeovizError> {
        if let Some(data) = self.cache.as_ref().and_then(|cache| cache.get(url)) {
            info!("Loaded {url} from cache");
            return Ok(data);
        }

        let data = self.load_from_web(url).await?;

        if let Some(cache) = &self.cache {
            if let Err(error) = cache.insert(url, &data) {
                warn!("Failed to write persistent cache entry: {error:?}");
            }
        }

        Ok(data)
    }

    async fn load_from_web(&self, url: &str) -> Result<Bytes, GeovizError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            info!("Failed to load {url}: {status}");
            return Err(GeovizError::Io(format!("{url} responded with {status}")));
        }

        Ok(response.bytes().await?)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::data::table::tests::SAMPLE;

    #[derive(Default)]
    struct MemoryCache {
        entries: Mutex<HashMap<String, Bytes>>,
        fail_writes: bool,
    }

    impl PersistentCacheController<str, Bytes> for MemoryCache {
        fn get(&self, key: &str) -> Option<Bytes> {
            self.entries.lock().ok()?.get(key).cloned()
        }

        fn insert(&self, key: &str, data: &Bytes) -> Result<(), GeovizError> {
            if self.fail_writes {
                return Err(GeovizError::FsIo("read only".into()));
            }
            self.entries
                .lock()
                .expect("not poisoned")
                .insert(key.to_string(), data.clone());
            Ok(())
        }
    }

    #[test]
    fn detects_remote_sources() {
        assert!(is_remote("https://example.com/a.csv"));
        assert!(is_remote("http://example.com/a.csv"));
        assert!(!is_remote("data/a.csv"));
        assert!(!is_remote("/tmp/https.csv"));
    }

    #[test]
    fn loads_local_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("written");

        let loader = DataLoader::new().expect("client");
        let source = file.path().to_str().expect("utf8 path");
        let table = tokio_test::block_on(loader.load(source)).expect("loaded");
        assert_eq!(table.shape(), (4, 5));
    }

    #[test]
    fn missing_local_file_is_fs_error() {
        let loader = DataLoader::new().expect("client");
        assert_matches!(
            loader.load_path("/definitely/not/here.csv"),
            Err(GeovizError::FsIo(_))
        );
    }

    #[test]
    fn cached_url_skips_network() {
        let url = "https://geoviz.invalid/incidents.csv";
        let cache = MemoryCache::default();
        cache
            .insert(url, &Bytes::from_static(SAMPLE.as_bytes()))
            .expect("stored");

        let loader = DataLoader::new()
            .expect("client")
            .with_cache_controller(Box::new(cache));
        let table = tokio_test::block_on(loader.load(url)).expect("loaded from cache");

        assert_eq!(table.len(), 4);
        assert_eq!(table.column_index("Category"), Some(1));
    }

    #[tokio::test]
    async fn unreachable_url_is_io_error() {
        let loader = DataLoader::new().expect("client").with_cache_controller(Box::new(
            MemoryCache {
                fail_writes: true,
                ..Default::default()
            },
        ));

        assert_matches!(
            loader.load_url("http://127.0.0.1:1/incidents.csv").await,
            Err(GeovizError::Io(_))
        );
    }
}
