//! Variant naming metadata and the grouping key.

use serde::{Deserialize, Serialize};

use super::ProductRecord;
use crate::catalog::parse_variant;

/// Base name and optional color parsed from a record's display name.
///
/// Computed by [`crate::catalog::parse_variant`]; ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMeta {
    /// Display name with any variant suffix stripped.
    pub base_name: String,
    /// The final `" - "` segment, when the name encodes one.
    pub color: Option<String>,
}

/// Case-insensitive composite identity used to cluster variant records.
///
/// Two records merge into one storefront tile only when their base name and
/// both category fields match, ignoring case. Fields are lowercased on
/// construction so lookups never have to re-fold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    base_name: String,
    main_category: String,
    sub_category: String,
}

impl GroupKey {
    /// Build a key from already-parsed parts.
    #[must_use]
    pub fn new(base_name: &str, main_category: &str, sub_category: &str) -> Self {
        Self {
            base_name: base_name.to_lowercase(),
            main_category: main_category.to_lowercase(),
            sub_category: sub_category.to_lowercase(),
        }
    }

    /// Derive the key for a record from its parsed base name and categories.
    #[must_use]
    pub fn for_record(record: &ProductRecord) -> Self {
        let meta = parse_variant(&record.name);
        Self::new(&meta.base_name, &record.main_category, &record.sub_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_key_is_case_insensitive() {
        assert_eq!(
            GroupKey::new("Robe Soir", "Femmes", "Robes"),
            GroupKey::new("ROBE SOIR", "femmes", "ROBES")
        );
    }

    #[test]
    fn group_key_separates_categories() {
        assert_ne!(
            GroupKey::new("Robe Soir", "Femmes", "Robes"),
            GroupKey::new("Robe Soir", "Enfants", "Robes")
        );
    }
}
