//! Loading the incident datasets.
//!
//! A dataset is read into a [`Table`] with a [`DataLoader`], truncated with [`Table::limit`] and
//! converted into [`Incident`] records with [`Table::incidents`].

pub mod file_cache;
mod incident;
mod loader;
mod table;

pub use file_cache::FileCacheController;
pub use incident::{Incident, CATEGORY_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};
pub use loader::{BoxedCacheController, DataLoader};
pub use table::{Table, DEFAULT_ROW_LIMIT};

#[cfg(test)]
pub(crate) use table::tests::generated as generated_table;

use crate::error::GeovizError;

/// Persistent storage for loaded resources.
pub trait PersistentCacheController<Key: ?Sized, Data> {
    /// Returns the stored data for the key, if any.
    fn get(&self, key: &Key) -> Option<Data>;
    /// Stores the data under the key.
    fn insert(&self, key: &Key, data: &Data) -> Result<(), GeovizError>;
}
