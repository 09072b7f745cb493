//! Integration tests for Open Fashion.
//!
//! The tests live under `tests/` and drive the storefront router
//! in-process against an in-memory store, plus the file-backed store for
//! restart-survival coverage. This crate intentionally exports nothing.
