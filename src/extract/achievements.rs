// src/extract/achievements.rs

//! Achievement category listing extraction.

use scraper::Html;

use crate::error::Result;
use crate::extract::{attr_of, parse_selector, text_of};

/// Extract `(name, link)` pairs for the achievement categories, in page
/// order.
///
/// The first matched anchor is the "view all" control, not a category, and
/// is skipped. That rule matches this specific page layout; do not
/// generalize it.
pub fn category_names(doc: &Html) -> Result<Vec<(String, String)>> {
    let link_sel = parse_selector(".achievement__kind a")?;
    Ok(doc
        .select(&link_sel)
        .skip(1)
        .map(|anchor| (text_of(anchor), attr_of(anchor, "href")))
        .collect())
}

/// Extract subcategory names from a category page, in page order.
pub fn subcategory_names(doc: &Html) -> Result<Vec<String>> {
    let sel = parse_selector(".achievement__category")?;
    Ok(doc.select(&sel).map(text_of).collect())
}
