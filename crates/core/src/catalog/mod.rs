//! Variant grouping engine.
//!
//! Pure, synchronous functions that turn a raw snapshot of
//! [`ProductRecord`]s into display-ready data: deduplication by slug,
//! base-name/color parsing, per-group merging into [`StorefrontEntry`]s,
//! and related-variant resolution for the detail page.
//!
//! Every function borrows its input and returns a new vector; nothing here
//! performs I/O or holds state, so concurrent callers operating on their
//! own snapshots need no coordination.

use std::collections::{HashMap, HashSet};

use crate::types::{GroupKey, ProductRecord, StorefrontEntry, VariantMeta};

/// Literal separator between a base name and its color suffix.
pub const VARIANT_SEPARATOR: &str = " - ";

/// Parse a display name into its base name and optional color.
///
/// The *last* separator occurrence wins: `"Midi Dress - Long - Black"`
/// yields base `"Midi Dress - Long"` and color `"Black"`. A name without
/// the separator, or one whose split leaves an empty base or color after
/// trimming, is treated as colorless.
#[must_use]
pub fn parse_variant(name: &str) -> VariantMeta {
    let colorless = || VariantMeta {
        base_name: name.trim().to_owned(),
        color: None,
    };

    if !name.contains(VARIANT_SEPARATOR) {
        return colorless();
    }

    let mut segments: Vec<&str> = name.split(VARIANT_SEPARATOR).map(str::trim).collect();
    if segments.len() < 2 {
        return colorless();
    }

    let Some(color) = segments.pop() else {
        return colorless();
    };
    let base_name = segments.join(VARIANT_SEPARATOR).trim().to_owned();

    if base_name.is_empty() || color.is_empty() {
        return colorless();
    }

    VariantMeta {
        base_name,
        color: Some(color.to_owned()),
    }
}

/// Collapse repeated records, keeping the first occurrence per slug.
///
/// Records with an empty slug fall back to their id as the dedup key.
/// Relative order of surviving records is preserved; the function is
/// idempotent.
#[must_use]
pub fn dedupe_products(records: &[ProductRecord]) -> Vec<ProductRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(dedupe_key(record)))
        .cloned()
        .collect()
}

fn dedupe_key(record: &ProductRecord) -> String {
    if record.slug.is_empty() {
        record.id.to_string()
    } else {
        record.slug.clone()
    }
}

/// Merge a snapshot into one [`StorefrontEntry`] per [`GroupKey`].
///
/// The input is deduplicated, stable-sorted by `created_at` descending
/// (so the most recent record of each group becomes its primary), then
/// partitioned by key in first-appearance order. Scalar fields come from
/// the primary; images, sizes, stock and flags merge across the group.
#[must_use]
pub fn group_for_storefront(records: &[ProductRecord]) -> Vec<StorefrontEntry> {
    let mut deduped = dedupe_products(records);
    // Stable sort: records sharing a timestamp keep their input order.
    deduped.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<ProductRecord>> = HashMap::new();
    for record in deduped {
        let key = GroupKey::for_record(&record);
        let members = groups.entry(key.clone()).or_default();
        if members.is_empty() {
            order.push(key);
        }
        members.push(record);
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .filter_map(merge_group)
        .collect()
}

fn merge_group(members: Vec<ProductRecord>) -> Option<StorefrontEntry> {
    let primary = members.first()?.clone();
    let base_name = parse_variant(&primary.name).base_name;

    // Image union: per member, primary image then gallery, first seen wins.
    let mut seen_images = HashSet::new();
    let mut images: Vec<String> = Vec::new();
    for member in &members {
        for url in member.image_url.iter().chain(member.gallery_urls.iter()) {
            let url = url.trim();
            if !url.is_empty() && seen_images.insert(url.to_owned()) {
                images.push(url.to_owned());
            }
        }
    }
    let mut images = images.into_iter();
    let image_url = images.next();
    let gallery_urls: Vec<String> = images.collect();

    // Size union: trimmed, blanks dropped, first seen wins.
    let mut seen_sizes = HashSet::new();
    let mut sizes: Vec<String> = Vec::new();
    for member in &members {
        for size in &member.sizes {
            let size = size.trim();
            if !size.is_empty() && seen_sizes.insert(size.to_owned()) {
                sizes.push(size.to_owned());
            }
        }
    }

    Some(StorefrontEntry {
        id: primary.id,
        slug: primary.slug,
        name: base_name,
        main_category: primary.main_category,
        sub_category: primary.sub_category,
        image_url,
        gallery_urls,
        sizes,
        is_out_of_stock: members.iter().all(|m| m.is_out_of_stock),
        stock: members
            .iter()
            .fold(0u32, |total, m| total.saturating_add(m.stock)),
        is_new: members.iter().any(|m| m.is_new),
        is_best_seller: members.iter().any(|m| m.is_best_seller),
        created_at: primary.created_at,
        variant_count: members.len(),
    })
}

/// All deduplicated records sharing the target's group, target included.
///
/// Sorted ascending by name (case-insensitive), so a detail page can offer
/// stable color-swatch navigation. Out-of-stock variants are not filtered.
#[must_use]
pub fn related_variants(
    records: &[ProductRecord],
    target: &ProductRecord,
) -> Vec<ProductRecord> {
    let key = GroupKey::for_record(target);
    let mut variants: Vec<ProductRecord> = dedupe_products(records)
        .into_iter()
        .filter(|record| GroupKey::for_record(record) == key)
        .collect();
    variants.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    variants
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).single().expect("valid date")
    }

    fn record(slug: &str, name: &str, created: u32) -> ProductRecord {
        ProductRecord {
            id: Uuid::new_v4(),
            slug: slug.to_owned(),
            name: name.to_owned(),
            main_category: "Femmes".to_owned(),
            sub_category: "Robes".to_owned(),
            image_url: None,
            gallery_urls: Vec::new(),
            sizes: Vec::new(),
            is_out_of_stock: false,
            stock: 1,
            is_new: false,
            is_best_seller: false,
            created_at: day(created),
        }
    }

    // ------------------------------------------------------------------
    // parse_variant
    // ------------------------------------------------------------------

    #[test]
    fn parse_round_trip() {
        let meta = parse_variant("Robe Soir - Rouge");
        assert_eq!(meta.base_name, "Robe Soir");
        assert_eq!(meta.color.as_deref(), Some("Rouge"));
    }

    #[test]
    fn parse_colorless_fallback() {
        let meta = parse_variant("Classic Dress");
        assert_eq!(meta.base_name, "Classic Dress");
        assert_eq!(meta.color, None);
    }

    #[test]
    fn parse_multi_separator_keeps_last_segment_as_color() {
        let meta = parse_variant("Midi Dress - Long - Black");
        assert_eq!(meta.base_name, "Midi Dress - Long");
        assert_eq!(meta.color.as_deref(), Some("Black"));
    }

    #[test]
    fn parse_trims_whitespace_around_segments() {
        let meta = parse_variant("  Robe Soir -   Rouge  ");
        assert_eq!(meta.base_name, "Robe Soir");
        assert_eq!(meta.color.as_deref(), Some("Rouge"));
    }

    #[test]
    fn parse_empty_color_falls_back_to_colorless() {
        let meta = parse_variant("Robe - ");
        assert_eq!(meta.base_name, "Robe -");
        assert_eq!(meta.color, None);
    }

    #[test]
    fn parse_empty_base_falls_back_to_colorless() {
        let meta = parse_variant(" - Rouge");
        assert_eq!(meta.base_name, "- Rouge");
        assert_eq!(meta.color, None);
    }

    #[test]
    fn parse_empty_name_is_colorless() {
        let meta = parse_variant("");
        assert_eq!(meta.base_name, "");
        assert_eq!(meta.color, None);
    }

    // ------------------------------------------------------------------
    // dedupe_products
    // ------------------------------------------------------------------

    #[test]
    fn dedupe_is_idempotent() {
        let records = vec![
            record("a", "A", 1),
            record("b", "B", 1),
            record("a", "A again", 2),
        ];
        let once = dedupe_products(&records);
        let twice = dedupe_products(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_and_order() {
        let records = vec![
            record("a", "First A", 1),
            record("b", "B", 1),
            record("a", "Second A", 2),
            record("c", "C", 1),
        ];
        let deduped = dedupe_products(&records);
        let names: Vec<&str> = deduped.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First A", "B", "C"]);
    }

    #[test]
    fn dedupe_falls_back_to_id_for_empty_slug() {
        let first = record("", "No Slug 1", 1);
        let second = record("", "No Slug 2", 1);
        let repeat = first.clone();

        let deduped = dedupe_products(&[first, second, repeat]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn dedupe_of_empty_input_is_empty() {
        assert!(dedupe_products(&[]).is_empty());
    }

    // ------------------------------------------------------------------
    // group_for_storefront
    // ------------------------------------------------------------------

    #[test]
    fn grouping_conserves_every_deduplicated_record() {
        let records = vec![
            record("robe-rouge", "Robe Soir - Rouge", 2),
            record("robe-bleu", "Robe Soir - Bleu", 1),
            record("robe-rouge", "Robe Soir - Rouge", 2), // duplicate fetch
            record("jupe", "Jupe Plissée", 3),
        ];
        let entries = group_for_storefront(&records);
        let merged: usize = entries.iter().map(|e| e.variant_count).sum();
        assert_eq!(merged, dedupe_products(&records).len());
    }

    #[test]
    fn groups_are_ordered_by_first_appearance_after_recency_sort() {
        let records = vec![
            record("jupe", "Jupe Plissée", 1),
            record("robe-rouge", "Robe Soir - Rouge", 3),
            record("robe-bleu", "Robe Soir - Bleu", 2),
        ];
        let entries = group_for_storefront(&records);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Robe Soir", "Jupe Plissée"]);
    }

    #[test]
    fn primary_is_the_most_recent_record() {
        let older = record("robe-bleu", "Robe Soir - Bleu", 1);
        let newer = record("robe-rouge", "Robe Soir - Rouge", 2);

        let entries = group_for_storefront(&[older, newer.clone()]);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, newer.id);
        assert_eq!(entry.slug, "robe-rouge");
        assert_eq!(entry.created_at, newer.created_at);
    }

    #[test]
    fn different_categories_never_merge() {
        let mut girls = record("robe-fille", "Robe Soir - Rouge", 1);
        girls.main_category = "Enfants".to_owned();
        let women = record("robe-femme", "Robe Soir - Bleu", 1);

        let entries = group_for_storefront(&[girls, women]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn group_key_matching_is_case_insensitive() {
        let mut upper = record("robe-a", "ROBE SOIR - Rouge", 2);
        upper.main_category = "FEMMES".to_owned();
        let lower = record("robe-b", "robe soir - Bleu", 1);

        let entries = group_for_storefront(&[upper, lower]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].variant_count, 2);
    }

    #[test]
    fn stock_is_summed_and_out_of_stock_requires_all_members() {
        let mut in_stock = record("a", "Robe - Rouge", 2);
        in_stock.stock = 3;
        let mut sold_out = record("b", "Robe - Bleu", 1);
        sold_out.stock = 0;
        sold_out.is_out_of_stock = true;

        let entries = group_for_storefront(&[in_stock.clone(), sold_out.clone()]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].stock, 3);
        assert!(!entries[0].is_out_of_stock);

        in_stock.stock = 0;
        in_stock.is_out_of_stock = true;
        let entries = group_for_storefront(&[in_stock, sold_out]);
        assert_eq!(entries[0].stock, 0);
        assert!(entries[0].is_out_of_stock);
    }

    #[test]
    fn stock_sum_saturates_at_u32_max() {
        let mut a = record("a", "Robe - Rouge", 2);
        a.stock = u32::MAX;
        let mut b = record("b", "Robe - Bleu", 1);
        b.stock = 7;

        let entries = group_for_storefront(&[a, b]);
        assert_eq!(entries[0].stock, u32::MAX);
    }

    #[test]
    fn merchandising_flags_are_any_member() {
        let mut new = record("a", "Robe - Rouge", 2);
        new.is_new = true;
        let mut best = record("b", "Robe - Bleu", 1);
        best.is_best_seller = true;

        let entries = group_for_storefront(&[new, best]);
        assert!(entries[0].is_new);
        assert!(entries[0].is_best_seller);
    }

    #[test]
    fn images_dedupe_preserving_first_seen_order() {
        let mut primary = record("a", "Robe - Rouge", 2);
        primary.image_url = Some("A".to_owned());
        primary.gallery_urls = vec!["B".to_owned(), "A".to_owned(), "C".to_owned()];

        let entries = group_for_storefront(&[primary]);
        assert_eq!(entries[0].image_url.as_deref(), Some("A"));
        assert_eq!(entries[0].gallery_urls, vec!["B".to_owned(), "C".to_owned()]);
    }

    #[test]
    fn images_merge_across_members_primary_first() {
        let mut newer = record("a", "Robe - Rouge", 2);
        newer.image_url = Some("red.jpg".to_owned());
        let mut older = record("b", "Robe - Bleu", 1);
        older.image_url = Some("blue.jpg".to_owned());
        older.gallery_urls = vec!["red.jpg".to_owned(), "detail.jpg".to_owned()];

        let entries = group_for_storefront(&[older, newer]);
        assert_eq!(entries[0].image_url.as_deref(), Some("red.jpg"));
        assert_eq!(
            entries[0].gallery_urls,
            vec!["blue.jpg".to_owned(), "detail.jpg".to_owned()]
        );
    }

    #[test]
    fn sizes_union_is_trimmed_and_deduplicated() {
        let mut a = record("a", "Robe - Rouge", 2);
        a.sizes = vec!["S".to_owned(), " M ".to_owned()];
        let mut b = record("b", "Robe - Bleu", 1);
        b.sizes = vec!["M".to_owned(), String::new(), "L".to_owned()];

        let entries = group_for_storefront(&[a, b]);
        assert_eq!(
            entries[0].sizes,
            vec!["S".to_owned(), "M".to_owned(), "L".to_owned()]
        );
    }

    #[test]
    fn grouping_empty_input_yields_no_entries() {
        assert!(group_for_storefront(&[]).is_empty());
    }

    // ------------------------------------------------------------------
    // related_variants
    // ------------------------------------------------------------------

    #[test]
    fn related_variants_sorted_by_name_including_target() {
        let rouge = record("robe-soir-rouge", "Robe Soir - Rouge", 2);
        let bleu = record("robe-soir-bleu", "Robe Soir - Bleu", 1);
        let other = record("jupe", "Jupe Plissée", 3);
        let records = vec![rouge.clone(), bleu, other];

        let variants = related_variants(&records, &rouge);
        let names: Vec<&str> = variants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Robe Soir - Bleu", "Robe Soir - Rouge"]);
    }

    #[test]
    fn related_variants_keep_out_of_stock_members() {
        let rouge = record("rouge", "Robe Soir - Rouge", 2);
        let mut bleu = record("bleu", "Robe Soir - Bleu", 1);
        bleu.stock = 0;
        bleu.is_out_of_stock = true;

        let variants = related_variants(&[rouge.clone(), bleu], &rouge);
        assert_eq!(variants.len(), 2);
    }

    // ------------------------------------------------------------------
    // End-to-end scenario from the acceptance checklist
    // ------------------------------------------------------------------

    #[test]
    fn robe_soir_scenario() {
        let mut rouge = record("robe-soir-rouge", "Robe Soir - Rouge", 2);
        rouge.stock = 2;
        let mut bleu = record("robe-soir-bleu", "Robe Soir - Bleu", 1);
        bleu.stock = 0;
        bleu.is_out_of_stock = true;
        let records = vec![rouge.clone(), bleu.clone()];

        let entries = group_for_storefront(&records);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "Robe Soir");
        assert_eq!(entry.stock, 2);
        assert!(!entry.is_out_of_stock);

        for target in [&rouge, &bleu] {
            let names: Vec<String> = related_variants(&records, target)
                .into_iter()
                .map(|r| r.name)
                .collect();
            assert_eq!(
                names,
                vec!["Robe Soir - Bleu".to_owned(), "Robe Soir - Rouge".to_owned()]
            );
        }
    }
}
