//! Lenient wire types for product records from the storefront REST API.
//!
//! ## Observed shapes from the live backend
//!
//! ### Numerics (`price`, `discount`, `salesCount`)
//! Arrive as a JSON number on most records but as a numeric **string** on
//! records touched by the admin console's import path (e.g. `"49.90"`).
//! Both forms are accepted; anything else coerces to 0 during conversion.
//!
//! ### `sizeTags`
//! Either a JSON array of strings (`["S", "M"]`) or a single comma-separated
//! string (`"S, M, L"`), depending on which admin form saved the product.
//! Both normalize to the same trimmed list.
//!
//! ### Category identifiers
//! The category a product belongs to arrives inconsistently: as a bare
//! `category` string (slug or display name), as `categorySlug` /
//! `categoryName` (camel or snake case), or as a nested `category` object
//! with `slug` and `name` fields. All spellings are collected; downstream
//! matching tolerates hyphen/space and case differences.
//!
//! ### `createdAt`
//! ISO-8601 with or without offset. Absent on legacy records; conversion
//! falls back to the Unix epoch.
//!
//! Every field is optional at the wire level. Records that are not JSON
//! objects at all (nulls, scalars) are dropped by the payload normalizer
//! before reaching these types.

use serde::Deserialize;

/// A product record exactly as the backend sends it, before coercion into
/// [`storefront_core::Product`].
#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    /// Backend identifier; numeric on some records, string on others.
    #[serde(default, alias = "_id")]
    pub id: Option<NumberOrString>,

    #[serde(default)]
    pub name: Option<String>,

    /// Current price. Number or numeric string; missing coerces to 0.
    #[serde(default)]
    pub price: Option<NumberOrString>,

    /// Percentage off `price` (0–100), informational.
    #[serde(default)]
    pub discount: Option<NumberOrString>,

    /// Array of strings or one comma-separated string.
    #[serde(default, alias = "sizeTags")]
    pub size_tags: Option<TagList>,

    /// Popularity signal; missing coerces to 0.
    #[serde(default, alias = "salesCount")]
    pub sales_count: Option<NumberOrString>,

    /// ISO-8601 timestamp; missing coerces to the Unix epoch.
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,

    /// Bare label (slug or display name) or a nested object.
    #[serde(default)]
    pub category: Option<CategoryField>,

    #[serde(default, alias = "categorySlug")]
    pub category_slug: Option<String>,

    #[serde(default, alias = "categoryName")]
    pub category_name: Option<String>,
}

/// A JSON value that is semantically a number but may arrive as a string.
///
/// The trailing `Other` variant absorbs any other JSON type so one bad
/// field never drops the whole record; it coerces to 0 downstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    String(String),
    Other(serde_json::Value),
}

impl NumberOrString {
    /// Coerces to `f64`. Unparseable strings and non-numeric JSON coerce to 0.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberOrString::Number(n) => *n,
            NumberOrString::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            NumberOrString::Other(_) => 0.0,
        }
    }

    /// Coerces to a display string (for identifiers).
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            // Integral floats print without the trailing ".0" so numeric IDs
            // round-trip as "42", not "42.0".
            NumberOrString::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            NumberOrString::Number(n) => format!("{n}"),
            NumberOrString::String(s) => s.clone(),
            NumberOrString::Other(_) => String::new(),
        }
    }
}

/// Size tags as an array of strings or a single comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    Many(Vec<String>),
    Csv(String),
    Other(serde_json::Value),
}

/// Category identifier as a bare label or a nested object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryField {
    Label(String),
    Object(CategoryObject),
    Other(serde_json::Value),
}

/// Nested category object, e.g. `{"slug": "mens-wear", "name": "Mens Wear"}`.
#[derive(Debug, Deserialize)]
pub struct CategoryObject {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_or_string_accepts_number() {
        let v: NumberOrString = serde_json::from_value(json!(12.5)).unwrap();
        assert!((v.as_f64() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn number_or_string_accepts_numeric_string() {
        let v: NumberOrString = serde_json::from_value(json!("49.90")).unwrap();
        assert!((v.as_f64() - 49.9).abs() < f64::EPSILON);
    }

    #[test]
    fn number_or_string_garbage_string_coerces_to_zero() {
        let v: NumberOrString = serde_json::from_value(json!("free!")).unwrap();
        assert!((v.as_f64() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn to_display_string_drops_trailing_point_zero() {
        let v: NumberOrString = serde_json::from_value(json!(42.0)).unwrap();
        assert_eq!(v.to_display_string(), "42");
    }

    #[test]
    fn raw_product_deserializes_camel_case_fields() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": 7,
            "name": "Oxford Shirt",
            "price": "59.00",
            "sizeTags": "S, M",
            "salesCount": 120,
            "createdAt": "2024-03-01T10:00:00Z",
            "categorySlug": "mens-wear"
        }))
        .unwrap();
        assert_eq!(raw.name.as_deref(), Some("Oxford Shirt"));
        assert_eq!(raw.category_slug.as_deref(), Some("mens-wear"));
        assert!(matches!(raw.size_tags, Some(TagList::Csv(_))));
    }

    #[test]
    fn raw_product_deserializes_nested_category_object() {
        let raw: RawProduct = serde_json::from_value(json!({
            "id": "p-1",
            "category": {"slug": "kids", "name": "Kids"}
        }))
        .unwrap();
        match raw.category {
            Some(CategoryField::Object(obj)) => {
                assert_eq!(obj.slug.as_deref(), Some("kids"));
                assert_eq!(obj.name.as_deref(), Some("Kids"));
            }
            other => panic!("expected nested category object, got: {other:?}"),
        }
    }

    #[test]
    fn raw_product_all_fields_optional() {
        let raw: RawProduct = serde_json::from_value(json!({})).unwrap();
        assert!(raw.id.is_none());
        assert!(raw.price.is_none());
        assert!(raw.size_tags.is_none());
    }
}
