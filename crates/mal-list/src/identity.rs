//! Content-based identity for list records.

use shared::{MediaEntry, StatusPair};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Opaque identity of a record, derived from its content
///
/// Two records with equal content always produce the same key, regardless
/// of where they live in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

impl ItemKey {
    /// Structural hash of `value`
    pub fn of<H: Hash + ?Sized>(value: &H) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Self(hasher.finish())
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A record that can be placed in a categorized list
pub trait MediaItem {
    /// Raw series/user status codes
    fn status(&self) -> StatusPair;

    /// Content-based identity, see [`ItemKey::of`]
    fn identity_key(&self) -> ItemKey;
}

impl MediaItem for MediaEntry {
    fn status(&self) -> StatusPair {
        self.status
    }

    fn identity_key(&self) -> ItemKey {
        ItemKey::of(self)
    }
}
