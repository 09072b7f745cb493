//! The cart service: single owner of all cart reads and writes.
//!
//! Every call site funnels through [`CartService`], which keeps the cart
//! under one store key and serializes mutations through a single async
//! mutex. The backing store has no transactions; each write fully replaces
//! the stored value based on the writer's own read, so the lock around the
//! read-modify-write pair is what makes concurrent adds and removes apply
//! atomically relative to each other.
//!
//! Degraded paths are deliberate and logged rather than swallowed:
//! - read failure or malformed persisted data loads as an empty cart,
//! - a failed write is retried once, then reported to the caller,
//! - removing an unknown entry id is a no-op.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;

use open_fashion_core::{Cart, CartEntry, EntryId, Product};

use crate::store::{KeyValueStore, StoreError};

/// The fixed store key the cart is persisted under.
pub const CART_KEY: &str = "cartItems";

/// Errors from cart mutations.
///
/// Loads never fail; they degrade to an empty cart (see [`CartService::load`]).
#[derive(Debug, Error)]
pub enum CartError {
    /// The backing store rejected a read or write.
    #[error("cart store error: {0}")]
    Store(#[from] StoreError),

    /// The cart could not be encoded for persistence.
    #[error("cart encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Owns the persisted cart behind an explicit load/add/remove API.
pub struct CartService {
    store: Arc<dyn KeyValueStore>,
    mutation_lock: Mutex<()>,
}

impl CartService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Load the persisted cart.
    ///
    /// An absent key is an empty cart. A failed read or a malformed
    /// persisted value also loads as empty, with a warning; neither is
    /// surfaced to the caller.
    pub async fn load(&self) -> Cart {
        match self.store.get(CART_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(error = %e, "malformed persisted cart, treating as empty");
                    Cart::empty()
                }
            },
            Ok(None) => Cart::empty(),
            Err(e) => {
                tracing::warn!(error = %e, "cart read failed, treating as empty");
                Cart::empty()
            }
        }
    }

    /// Append a copy of `product` to the cart and persist it.
    ///
    /// Returns the new entry with its freshly minted id.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted after one retry.
    pub async fn add(&self, product: &Product) -> Result<CartEntry, CartError> {
        let _guard = self.mutation_lock.lock().await;

        let mut cart = self.load().await;
        let entry = CartEntry::from_product(product);
        cart.push(entry.clone());
        self.persist(&cart).await?;

        tracing::info!(entry_id = %entry.id, name = %entry.name, "added to cart");
        Ok(entry)
    }

    /// Remove the entry with the given id and persist the shrunk cart.
    ///
    /// The relative order of all other entries is preserved. An unknown id
    /// (including any id against an empty cart) is a no-op: nothing is
    /// written and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted after one retry.
    pub async fn remove(&self, id: EntryId) -> Result<Option<CartEntry>, CartError> {
        let _guard = self.mutation_lock.lock().await;

        let mut cart = self.load().await;
        let Some(removed) = cart.remove(id) else {
            tracing::warn!(entry_id = %id, "remove for unknown cart entry, ignoring");
            return Ok(None);
        };
        self.persist(&cart).await?;

        tracing::info!(entry_id = %removed.id, name = %removed.name, "removed from cart");
        Ok(Some(removed))
    }

    /// Write the cart back to the store, retrying a failed write once.
    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let raw = serde_json::to_string(cart)?;
        if let Err(first) = self.store.set(CART_KEY, &raw).await {
            tracing::warn!(error = %first, "cart write failed, retrying once");
            self.store.set(CART_KEY, &raw).await?;
        }
        Ok(())
    }
}
