use crate::utils::error::Result;

/// Persistent key-value store: the single external collaborator of the
/// core. One fixed key is ever used, but the port stays generic so tests
/// and alternative backends can plug in.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the value, fully overwriting any prior value under the key.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
