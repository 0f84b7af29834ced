//! Price-range filtering and the user-adjustable price window.

use storefront_core::Product;

/// Derives `(min, max)` price bounds across a product sequence.
///
/// Both bounds are `0.0` for an empty sequence.
#[must_use]
pub fn price_bounds(products: &[Product]) -> (f64, f64) {
    let mut prices = products.iter().map(|p| p.price);
    let Some(first) = prices.next() else {
        return (0.0, 0.0);
    };
    prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
}

/// Keeps only products whose price falls within `[min, max]`, inclusive of
/// both ends. The input is left unmodified.
#[must_use]
pub fn filter_by_price(products: &[Product], min: f64, max: f64) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.price >= min && p.price <= max)
        .cloned()
        .collect()
}

/// A user-adjustable price interval constrained to the bounds derived from
/// the current product sequence.
///
/// Invariants, preserved by every setter:
/// - `min() <= max()` at all times;
/// - both ends stay within `[floor(), ceil()]`.
///
/// Raising the lower end above the current upper end clamps it to the upper
/// end, and symmetrically for lowering the upper end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWindow {
    floor: f64,
    ceil: f64,
    min: f64,
    max: f64,
}

impl PriceWindow {
    /// Builds a fully-open window over the bounds of `products`.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let (floor, ceil) = price_bounds(products);
        Self {
            floor,
            ceil,
            min: floor,
            max: ceil,
        }
    }

    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    #[must_use]
    pub fn ceil(&self) -> f64 {
        self.ceil
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Adjusts the lower end, clamped into `[floor, max]`.
    pub fn set_min(&mut self, value: f64) {
        self.min = value.clamp(self.floor, self.max);
    }

    /// Adjusts the upper end, clamped into `[min, ceil]`.
    pub fn set_max(&mut self, value: f64) {
        self.max = value.clamp(self.min, self.ceil);
    }

    /// Returns `true` if `price` falls within the current `[min, max]`.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Applies the current window to a product sequence.
    #[must_use]
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        filter_by_price(products, self.min, self.max)
    }
}
