//! Product record and merged storefront entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single catalog row as stored by the repository, normalized.
///
/// One record corresponds to one physical stock-keeping unit. Color variants
/// of the same conceptual product are separate records whose `name` encodes
/// the variant with the `" - "` separator (e.g. `"Robe Soir - Rouge"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Stable identity for this SKU.
    pub id: Uuid,
    /// URL handle, unique per catalog entry.
    pub slug: String,
    /// Display name, optionally `"<base> - <color>"`.
    pub name: String,
    /// Top-level category (e.g. "Femmes").
    pub main_category: String,
    /// Second-level category (e.g. "Robes").
    pub sub_category: String,
    /// Primary image, if any.
    pub image_url: Option<String>,
    /// Secondary images, ordered.
    pub gallery_urls: Vec<String>,
    /// Size labels, trimmed and non-empty after normalization.
    pub sizes: Vec<String>,
    /// Derived from `stock == 0` at the repository boundary.
    pub is_out_of_stock: bool,
    /// Units on hand.
    pub stock: u32,
    /// Merchandising flag: new arrival.
    pub is_new: bool,
    /// Merchandising flag: best seller.
    pub is_best_seller: bool,
    /// Creation timestamp, used for recency ordering.
    pub created_at: DateTime<Utc>,
}

/// One display-ready catalog tile: a group of variant records merged.
///
/// Scalar fields come from the group's primary record (highest
/// `created_at`); images, sizes, stock and flags are merged across the
/// whole group. See [`crate::catalog::group_for_storefront`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontEntry {
    /// Id of the primary record.
    pub id: Uuid,
    /// Slug of the primary record.
    pub slug: String,
    /// The group's base name (variant suffix stripped).
    pub name: String,
    pub main_category: String,
    pub sub_category: String,
    /// First image of the merged, deduplicated image set.
    pub image_url: Option<String>,
    /// Remaining merged images, first-seen order.
    pub gallery_urls: Vec<String>,
    /// Union of trimmed, non-empty size labels across the group.
    pub sizes: Vec<String>,
    /// True only if every member is out of stock.
    pub is_out_of_stock: bool,
    /// Sum of all members' stock.
    pub stock: u32,
    /// True if any member is flagged new.
    pub is_new: bool,
    /// True if any member is flagged best seller.
    pub is_best_seller: bool,
    /// Creation timestamp of the primary record.
    pub created_at: DateTime<Utc>,
    /// Number of records merged into this entry.
    pub variant_count: usize,
}
