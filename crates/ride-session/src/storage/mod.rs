pub(crate) mod file;
pub(crate) mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Durable key-value storage scoped to one device.
///
/// The session store is written against this trait so tests and hosts
/// without a filesystem can inject [`MemoryStore`].
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Deleting an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}
