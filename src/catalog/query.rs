//! Read-only queries over a fetched product list.

use std::collections::BTreeSet;

use crate::app::{CatalogError, Result};
use crate::domain::Product;

/// Products whose title or summary contains `term`, ignoring case.
pub fn search(products: Vec<Product>, term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    products.into_iter().filter(|p| p.mentions(&needle)).collect()
}

/// Zero-based positional lookup. Negative indices are never found.
pub fn by_index(products: Vec<Product>, index: i64) -> Result<Product> {
    usize::try_from(index)
        .ok()
        .and_then(|i| products.into_iter().nth(i))
        .ok_or_else(|| CatalogError::NotFound(format!("product at index {}", index)))
}

/// Distinct category labels present, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category().label())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Products in the category called `name`, ignoring case.
pub fn by_category(products: Vec<Product>, name: &str) -> Result<Vec<Product>> {
    let wanted = name.to_lowercase();
    let matching: Vec<Product> = products
        .into_iter()
        .filter(|p| p.category().label().to_lowercase() == wanted)
        .collect();

    if matching.is_empty() {
        return Err(CatalogError::NotFound(format!("no products in category {}", name)));
    }

    Ok(matching)
}
