//! Raw database row shape and boundary normalization.
//!
//! The `products` table allows NULL in most columns; the engine does not.
//! Every row is normalized exactly once, here, before it reaches any
//! grouping code. Downstream code can therefore rely on trimmed slugs,
//! non-NULL arrays, non-negative stock and a derived out-of-stock flag.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::ProductRecord;

/// Size label substituted when a row carries no usable size array.
pub const DEFAULT_SIZE_LABEL: &str = "Taille unique";

/// Option-typed mirror of one `products` row, before normalization.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct RawProductRow {
    pub id: Uuid,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub main_category: Option<String>,
    pub sub_category: Option<String>,
    pub image_url: Option<String>,
    pub gallery_urls: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub stock: Option<i32>,
    pub is_new: Option<bool>,
    pub is_best_seller: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl RawProductRow {
    /// Normalize this row into an engine-ready [`ProductRecord`].
    ///
    /// - NULL text columns become empty strings; slug, name and the
    ///   category labels are trimmed.
    /// - NULL gallery becomes an empty list.
    /// - Size labels are trimmed and blanks dropped; an empty result is
    ///   replaced by a single [`DEFAULT_SIZE_LABEL`].
    /// - Stock is clamped to non-negative and the out-of-stock flag is
    ///   derived from it.
    #[must_use]
    pub fn normalize(self) -> ProductRecord {
        let stock = self
            .stock
            .and_then(|s| u32::try_from(s).ok())
            .unwrap_or(0);

        let mut sizes: Vec<String> = self
            .sizes
            .unwrap_or_default()
            .iter()
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect();
        if sizes.is_empty() {
            sizes = vec![DEFAULT_SIZE_LABEL.to_owned()];
        }

        let image_url = self
            .image_url
            .map(|u| u.trim().to_owned())
            .filter(|u| !u.is_empty());

        ProductRecord {
            id: self.id,
            slug: self.slug.unwrap_or_default().trim().to_owned(),
            name: self.name.unwrap_or_default().trim().to_owned(),
            main_category: self.main_category.unwrap_or_default().trim().to_owned(),
            sub_category: self.sub_category.unwrap_or_default().trim().to_owned(),
            image_url,
            gallery_urls: self.gallery_urls.unwrap_or_default(),
            sizes,
            is_out_of_stock: stock == 0,
            stock,
            is_new: self.is_new.unwrap_or(false),
            is_best_seller: self.is_best_seller.unwrap_or(false),
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_row() -> RawProductRow {
        RawProductRow {
            id: Uuid::new_v4(),
            slug: None,
            name: None,
            main_category: None,
            sub_category: None,
            image_url: None,
            gallery_urls: None,
            sizes: None,
            stock: None,
            is_new: None,
            is_best_seller: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let record = empty_row().normalize();

        assert_eq!(record.slug, "");
        assert_eq!(record.name, "");
        assert_eq!(record.gallery_urls, Vec::<String>::new());
        assert_eq!(record.sizes, vec![DEFAULT_SIZE_LABEL.to_owned()]);
        assert_eq!(record.stock, 0);
        assert!(record.is_out_of_stock);
        assert!(!record.is_new);
        assert!(!record.is_best_seller);
    }

    #[test]
    fn text_columns_are_trimmed() {
        let row = RawProductRow {
            slug: Some(" robe-soir-rouge ".into()),
            name: Some("  Robe Soir - Rouge  ".into()),
            main_category: Some(" Femmes ".into()),
            sub_category: Some(" Robes ".into()),
            ..empty_row()
        };

        let record = row.normalize();
        assert_eq!(record.slug, "robe-soir-rouge");
        assert_eq!(record.name, "Robe Soir - Rouge");
        assert_eq!(record.main_category, "Femmes");
        assert_eq!(record.sub_category, "Robes");
    }

    #[test]
    fn sizes_are_trimmed_and_blanks_dropped() {
        let row = RawProductRow {
            sizes: Some(vec![" S ".into(), String::new(), "M".into(), "  ".into()]),
            ..empty_row()
        };

        assert_eq!(row.normalize().sizes, vec!["S".to_owned(), "M".to_owned()]);
    }

    #[test]
    fn all_blank_sizes_coerce_to_default_label() {
        let row = RawProductRow {
            sizes: Some(vec!["  ".into(), String::new()]),
            ..empty_row()
        };

        assert_eq!(row.normalize().sizes, vec![DEFAULT_SIZE_LABEL.to_owned()]);
    }

    #[test]
    fn out_of_stock_is_derived_from_stock_count() {
        let in_stock = RawProductRow {
            stock: Some(3),
            ..empty_row()
        };
        assert!(!in_stock.normalize().is_out_of_stock);

        let negative = RawProductRow {
            stock: Some(-4),
            ..empty_row()
        };
        let record = negative.normalize();
        assert_eq!(record.stock, 0);
        assert!(record.is_out_of_stock);
    }

    #[test]
    fn blank_image_url_becomes_none() {
        let row = RawProductRow {
            image_url: Some("  ".into()),
            ..empty_row()
        };

        assert_eq!(row.normalize().image_url, None);
    }
}
