//! Open Fashion Core - Shared types library.
//!
//! This crate provides common types used across all Open Fashion components:
//! - `storefront` - Public-facing storefront site
//! - `integration-tests` - End-to-end tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog products and cart records with their serialized forms

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
