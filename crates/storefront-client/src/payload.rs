//! Shape-sniffing normalizer for heterogeneous API payloads.
//!
//! The backend wraps product lists inconsistently across endpoints: some
//! return a bare JSON array, some `{"data": [...]}`, some
//! `{"products": [...]}`, and the category endpoint nests the list under
//! `{"category": {"products": [...]}}`. This module is the single place
//! that knows about those shapes; everything downstream receives one
//! canonical `Vec<Product>`.
//!
//! No input shape is an error. Anything unrecognized degrades to an empty
//! list ("no products"), never a failure.

use serde_json::Value;
use storefront_core::Product;

use crate::convert::coerce_record;

const EMPTY: &[Value] = &[];

/// Locates the product array inside an arbitrary JSON payload.
///
/// Recognized shapes, in order:
/// 1. the payload itself is an array;
/// 2. a top-level `data` array;
/// 3. a top-level `products` array;
/// 4. a nested `category.products` array.
///
/// Anything else yields the empty slice.
#[must_use]
pub fn product_array(payload: &Value) -> &[Value] {
    if let Some(items) = payload.as_array() {
        return items;
    }
    if let Some(items) = payload.get("data").and_then(Value::as_array) {
        return items;
    }
    if let Some(items) = payload.get("products").and_then(Value::as_array) {
        return items;
    }
    if let Some(items) = payload
        .get("category")
        .and_then(|c| c.get("products"))
        .and_then(Value::as_array)
    {
        return items;
    }
    EMPTY
}

/// Normalizes an arbitrary JSON payload into canonical product records.
///
/// Locates the product array via [`product_array`], then coerces each
/// element through the lenient wire type. Elements that are not JSON
/// objects (nulls, scalars) are dropped — the output never contains
/// placeholder entries.
#[must_use]
pub fn normalize_payload(payload: &Value) -> Vec<Product> {
    product_array(payload).iter().filter_map(coerce_record).collect()
}
