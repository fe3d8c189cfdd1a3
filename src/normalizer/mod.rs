pub mod raw;

use thiserror::Error;

use crate::domain::Product;
use raw::{parse_document, RawEntry};

pub const FEED_ROOT: &str = "feed";
pub const FEED_ENTRY: &str = "entry";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed feed markup: {0}")]
    Malformed(String),

    #[error("Expected <{expected}> root element, found <{found}>")]
    MissingRoot {
        expected: &'static str,
        found: String,
    },
}

/// Turns feed markup into classified products.
#[derive(Debug, Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Decode every `feed/entry` in `body`.
    ///
    /// A feed with no entries decodes to an empty list. A document whose
    /// root is not `feed` is rejected.
    pub fn normalize(&self, body: &str) -> Result<Vec<Product>, DecodeError> {
        let root = parse_document(body)?;

        if root.name != FEED_ROOT {
            return Err(DecodeError::MissingRoot {
                expected: FEED_ROOT,
                found: root.name,
            });
        }

        let entries = root
            .field(FEED_ENTRY)
            .map(|entries| entries.into_vec())
            .unwrap_or_default();

        let products: Vec<Product> = entries
            .into_iter()
            .map(RawEntry::from_element)
            .map(|entry| {
                Product::new(
                    entry.title.unwrap_or_default(),
                    entry.summary.unwrap_or_default(),
                    entry.link.map(|l| l.into_href()).unwrap_or_default(),
                )
            })
            .collect();

        tracing::debug!("Decoded {} entries", products.len());
        Ok(products)
    }
}
