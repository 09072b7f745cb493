//! Catalog product records.

use serde::{Deserialize, Serialize};

/// A purchasable product in the catalog.
///
/// Products are defined once at startup and never mutated. The `image`
/// field is an opaque reference to a bundled static asset, and `price`
/// is a pre-formatted display string (e.g., `"$120"`), not an amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Static asset reference for the product image.
    pub image: String,
    /// Display name.
    pub name: String,
    /// Pre-formatted price string, currency symbol included.
    pub price: String,
}

impl Product {
    /// Create a new product record.
    #[must_use]
    pub fn new(
        image: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}
