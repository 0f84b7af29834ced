//! The consolidated listing pipeline.
//!
//! One parameterized `Listing` replaces the per-page copies of the same
//! normalize/filter/sort logic. A listing owns the products fetched for the
//! active category plus all derived filter/sort state; swapping the category
//! resets that state and re-derives price bounds and size facets from the
//! new products.

use std::collections::HashSet;

use storefront_core::Product;

use crate::category::filter_by_category;
use crate::price::PriceWindow;
use crate::sizes::{filter_by_sizes, SizeFacets};
use crate::sort::{sorted, SortKey};

/// Filter/sort state and backing products for one listing page.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    route_token: String,
    products: Vec<Product>,
    window: Option<PriceWindow>,
    facets: SizeFacets,
    selected_sizes: HashSet<String>,
    sort: Option<SortKey>,
}

impl Listing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the products fetched for a category route.
    ///
    /// The incoming sequence is narrowed by the category membership guard
    /// (a no-op for an empty token), then price bounds and size facets are
    /// derived from the narrowed set. Filter and sort selections reset to
    /// their defaults — they are session-local UI state scoped to one
    /// category view.
    pub fn set_products(&mut self, route_token: impl Into<String>, products: Vec<Product>) {
        self.route_token = route_token.into();
        self.products = filter_by_category(&products, &self.route_token);
        self.window = Some(PriceWindow::from_products(&self.products));
        self.facets = SizeFacets::from_products(&self.products);
        self.selected_sizes.clear();
        self.sort = None;
    }

    /// Installs a fetch result, absorbing failure into the empty listing.
    ///
    /// A failed fetch is terminal for this render cycle; the listing shows
    /// the "no products" state rather than surfacing a blocking error.
    pub fn load<E: std::fmt::Display>(
        &mut self,
        route_token: impl Into<String>,
        result: Result<Vec<Product>, E>,
    ) {
        let products = match result {
            Ok(products) => products,
            Err(error) => {
                tracing::warn!(%error, "product fetch failed; showing empty listing");
                Vec::new()
            }
        };
        self.set_products(route_token, products);
    }

    /// The products backing this listing (post category guard, pre filters).
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn route_token(&self) -> &str {
        &self.route_token
    }

    /// The derived price window. `None` until products are installed.
    #[must_use]
    pub fn window(&self) -> Option<&PriceWindow> {
        self.window.as_ref()
    }

    #[must_use]
    pub fn facets(&self) -> &SizeFacets {
        &self.facets
    }

    pub fn set_price_min(&mut self, value: f64) {
        if let Some(window) = &mut self.window {
            window.set_min(value);
        }
    }

    pub fn set_price_max(&mut self, value: f64) {
        if let Some(window) = &mut self.window {
            window.set_max(value);
        }
    }

    /// Toggles one size tag in the selection.
    pub fn toggle_size(&mut self, tag: &str) {
        if !self.selected_sizes.remove(tag) {
            self.selected_sizes.insert(tag.to_owned());
        }
    }

    /// Replaces the size selection wholesale.
    pub fn set_sizes<I: IntoIterator<Item = String>>(&mut self, tags: I) {
        self.selected_sizes = tags.into_iter().collect();
    }

    pub fn set_sort(&mut self, key: Option<SortKey>) {
        self.sort = key;
    }

    /// Sets the sort from a frontend token; unrecognized tokens clear the
    /// sort (passthrough ordering).
    pub fn set_sort_token(&mut self, token: &str) {
        self.sort = SortKey::parse(token);
    }

    /// Runs the pipeline: price filter → size filter → sort.
    ///
    /// Pure with respect to the listing's own state — calling it repeatedly
    /// without intervening mutation yields the same sequence.
    #[must_use]
    pub fn apply(&self) -> Vec<Product> {
        let priced = match &self.window {
            Some(window) => window.apply(&self.products),
            None => self.products.clone(),
        };
        let sized = filter_by_sizes(&priced, &self.selected_sizes);
        match self.sort {
            Some(key) => sorted(&sized, key),
            None => sized,
        }
    }
}
