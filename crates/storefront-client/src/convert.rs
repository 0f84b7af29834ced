//! Coercion from [`RawProduct`] wire records to [`storefront_core::Product`].
//!
//! Every malformed field has a defined degraded value — missing or garbage
//! numerics become 0, unparseable timestamps become the Unix epoch, and
//! size tags are trimmed with empties dropped. No record-level failure
//! exists beyond "not a JSON object", which drops the entry entirely.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use storefront_core::Product;

use crate::raw::{CategoryField, NumberOrString, RawProduct, TagList};

/// Coerces one element of a product array into a canonical [`Product`].
///
/// Returns `None` for elements that are not JSON objects (nulls, scalars);
/// those are dropped by the payload normalizer rather than surfacing as
/// placeholder records.
#[must_use]
pub fn coerce_record(value: &Value) -> Option<Product> {
    if !value.is_object() {
        return None;
    }
    let raw: RawProduct = serde_json::from_value(value.clone()).ok()?;
    Some(coerce_raw(raw))
}

/// Coerces an already-deserialized [`RawProduct`] into a [`Product`].
#[must_use]
pub fn coerce_raw(raw: RawProduct) -> Product {
    let price = raw.price.as_ref().map_or(0.0, |p| p.as_f64()).max(0.0);
    let discount = raw.discount.as_ref().map(|d| d.as_f64().clamp(0.0, 100.0));
    let sales_count = raw
        .sales_count
        .as_ref()
        .map_or(0.0, |s| s.as_f64())
        .max(0.0) as u64;

    let category_labels = collect_category_labels(&raw);

    Product {
        id: raw
            .id
            .as_ref()
            .map(NumberOrString::to_display_string)
            .unwrap_or_default(),
        name: raw.name.unwrap_or_default(),
        price,
        discount,
        size_tags: split_size_tags(raw.size_tags),
        sales_count,
        created_at: parse_timestamp(raw.created_at.as_deref()),
        category_labels,
    }
}

/// Normalizes size tags from either wire form into a trimmed list.
///
/// The CSV form splits on commas; both forms drop empty entries.
fn split_size_tags(tags: Option<TagList>) -> Vec<String> {
    let raw_tags: Vec<String> = match tags {
        None | Some(TagList::Other(_)) => return Vec::new(),
        Some(TagList::Many(tags)) => tags,
        Some(TagList::Csv(csv)) => csv.split(',').map(str::to_owned).collect(),
    };
    raw_tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Gathers every category-identifying string present on the raw record.
///
/// Order is stable (bare label, nested slug, nested name, categorySlug,
/// categoryName) but carries no meaning — matching checks all labels.
fn collect_category_labels(raw: &RawProduct) -> Vec<String> {
    let mut labels = Vec::new();
    match &raw.category {
        Some(CategoryField::Label(label)) => labels.push(label.clone()),
        Some(CategoryField::Object(obj)) => {
            if let Some(slug) = &obj.slug {
                labels.push(slug.clone());
            }
            if let Some(name) = &obj.name {
                labels.push(name.clone());
            }
        }
        Some(CategoryField::Other(_)) | None => {}
    }
    if let Some(slug) = &raw.category_slug {
        labels.push(slug.clone());
    }
    if let Some(name) = &raw.category_name {
        labels.push(name.clone());
    }
    labels.retain(|l| !l.trim().is_empty());
    labels
}

/// Parses an ISO-8601 timestamp, falling back through progressively looser
/// forms before degrading to the Unix epoch.
fn parse_timestamp(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return DateTime::UNIX_EPOCH;
    };
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    // No offset, e.g. "2024-03-01T10:00:00".
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    // Date only, e.g. "2024-03-01".
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return naive.and_utc();
        }
    }
    DateTime::UNIX_EPOCH
}
