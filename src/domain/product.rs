use serde::Serialize;

use crate::classifier::{classify, Category};

/// A catalog entry decoded from the feed.
///
/// The category is derived from the title when the product is built and
/// cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    title: String,
    summary: String,
    link: String,
    category: Category,
}

impl Product {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let category = classify(&title);
        Self {
            title,
            summary: summary.into(),
            link: link.into(),
            category,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    /// Case-insensitive substring match against title or summary.
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.summary.to_lowercase().contains(needle)
    }
}
