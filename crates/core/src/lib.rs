//! Shared catalog types and the variant grouping engine for Maison Lumière.
//!
//! This crate has no I/O of its own. The binaries (`maison-storefront`,
//! `maison-admin`) fetch rows from `PostgreSQL`, normalize them into
//! [`ProductRecord`]s at the repository boundary, and hand snapshots to the
//! pure functions in [`catalog`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::{GroupKey, ProductRecord, RawProductRow, StorefrontEntry, VariantMeta};
