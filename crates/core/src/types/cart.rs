//! Cart records and their persisted encoding.
//!
//! The cart is persisted as a JSON array of [`CartEntry`] records under a
//! single store key. Each entry carries a stable synthetic [`EntryId`]
//! assigned when the product is added, so removal targets an id rather
//! than a position that can go stale under concurrent mutation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Product;

/// Stable synthetic identifier for a cart entry.
///
/// Minted at add-time. Two entries for the same product have different ids,
/// which is what makes duplicate products individually removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Mint a fresh entry id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<EntryId> for Uuid {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

/// A single entry in the cart: a product copy plus its entry id.
///
/// There is no quantity field - adding the same product twice yields two
/// separate entries. Values persisted before ids existed carry no `id`
/// field; those deserialize by minting a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Stable identifier, minted at add-time.
    #[serde(default = "EntryId::generate")]
    pub id: EntryId,
    /// Static asset reference copied from the product.
    pub image: String,
    /// Display name copied from the product.
    pub name: String,
    /// Pre-formatted price string copied from the product.
    pub price: String,
}

impl CartEntry {
    /// Create an entry by copying a product and minting a fresh id.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: EntryId::generate(),
            image: product.image.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
        }
    }
}

/// The persisted cart: an ordered sequence of entries.
///
/// Serializes transparently as a JSON array, matching the stored encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry with the given id, preserving the relative order
    /// of all other entries. Returns the removed entry, or `None` if no
    /// entry has that id.
    pub fn remove(&mut self, id: EntryId) -> Option<CartEntry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }
}

impl FromIterator<CartEntry> for Cart {
    fn from_iter<T: IntoIterator<Item = CartEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
