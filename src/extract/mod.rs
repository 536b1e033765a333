// src/extract/mod.rs

//! Pure HTML-to-model extraction.
//!
//! Each function maps a parsed document to a model without touching the
//! network. Missing optional nodes become empty strings, empty lists, or
//! `None`; extraction only fails on errors of its own machinery (selector
//! literals) or a document whose required structure is absent entirely.

mod achievements;
mod character;
mod search;

pub use achievements::{category_names, subcategory_names};
pub use character::character_detail;
pub use search::search_results;

use scraper::{ElementRef, Selector};

use crate::error::{AppError, Result};

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// First element matching `selector` within `scope`.
fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Concatenated, trimmed text content of an element.
fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute value, empty string when absent.
fn attr_of(element: ElementRef, name: &str) -> String {
    element.value().attr(name).unwrap_or("").to_string()
}

/// Split a world label like `"Gilgamesh [Aether]"` into server and data
/// center. Without the bracket the whole text is the server.
fn split_world(text: &str) -> (String, String) {
    match text.split_once(" [") {
        Some((server, dc)) => (
            server.trim().to_string(),
            dc.replace(']', "").trim().to_string(),
        ),
        None => (text.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_world_with_data_center() {
        assert_eq!(
            split_world("Gilgamesh [Aether]"),
            ("Gilgamesh".to_string(), "Aether".to_string())
        );
    }

    #[test]
    fn test_split_world_without_bracket() {
        assert_eq!(
            split_world("Gilgamesh"),
            ("Gilgamesh".to_string(), String::new())
        );
        assert_eq!(split_world(""), (String::new(), String::new()));
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }
}
