use thiserror::Error;

/// Returned by [`Tree::add`](crate::Tree::add) when the key is already in the tree.
///
/// The tree is left exactly as it was before the call.
/// The rejected key is handed back and can be recovered with [`into_key`](Self::into_key).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate key {key:?} is already in the tree")]
pub struct DuplicateKeyError<K> {
    key: K,
}

impl<K> DuplicateKeyError<K> {
    pub(crate) fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns a reference to the rejected key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error, returning the rejected key.
    pub fn into_key(self) -> K {
        self.key
    }
}
