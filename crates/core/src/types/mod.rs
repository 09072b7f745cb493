//! Core types for Open Fashion.
//!
//! This module provides the domain records shared between the catalog,
//! the cart service, and the persisted cart encoding.

pub mod cart;
pub mod product;

pub use cart::{Cart, CartEntry, EntryId};
pub use product::Product;
