//! Core domain types shared between the storefront and admin binaries.

mod product;
mod row;
mod variant;

pub use product::{ProductRecord, StorefrontEntry};
pub use row::RawProductRow;
pub use variant::{GroupKey, VariantMeta};
