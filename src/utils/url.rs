// src/utils/url.rs

//! URL building and path manipulation for Lodestone pages.

use url::Url;

use crate::error::{AppError, Result};

/// Build the character search URL.
///
/// Query values are percent-encoded; `worldname` is always present, empty
/// when no server filter is given.
pub fn search_url(base_url: &str, name: &str, server: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?.join("/lodestone/character/")?;
    url.query_pairs_mut()
        .append_pair("q", name)
        .append_pair("worldname", server);
    Ok(url.to_string())
}

/// Build a character's profile page URL, `{base}/lodestone/character/{id}/`.
pub fn character_url(base_url: &str, id: &str) -> Result<String> {
    let mut url = Url::parse(base_url)?;
    url.path_segments_mut()
        .map_err(|_| AppError::invalid_input(format!("base URL cannot be a base: {base_url}")))?
        .pop_if_empty()
        .extend(["lodestone", "character", id])
        .push("");
    Ok(url.to_string())
}

/// Build a subcategory listing URL from a category link.
///
/// Only the last three path segments of the category link are retained and
/// appended to the character URL. This mirrors the page layout the rule was
/// written against; do not generalize it.
pub fn subcategory_url(character_url: &str, category_href: &str) -> Result<String> {
    let tail = last_path_segments(category_href, 3).ok_or_else(|| {
        AppError::malformed(format!("category link has no path: {category_href}"))
    })?;
    Ok(format!("{character_url}{tail}/"))
}

/// Last non-empty path segment of a URL or path, or empty string.
///
/// # Examples
/// ```
/// use lodestone_scraper::utils::url::last_segment;
///
/// assert_eq!(last_segment("/lodestone/character/12345678/"), "12345678");
/// assert_eq!(last_segment(""), "");
/// ```
pub fn last_segment(href: &str) -> String {
    path_of(href)
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .unwrap_or("")
        .to_string()
}

/// The last `n` non-empty path segments joined with `/`, or `None` when the
/// path has no segments at all. A shorter path is returned whole.
pub fn last_path_segments(href: &str, n: usize) -> Option<String> {
    let segments: Vec<&str> = path_of(href)
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return None;
    }
    let start = segments.len().saturating_sub(n);
    Some(segments[start..].join("/"))
}

/// Strip scheme and host from an absolute URL, leaving the path onwards.
fn path_of(href: &str) -> &str {
    match href.find("://") {
        Some(scheme_end) => {
            let after_scheme = &href[scheme_end + 3..];
            match after_scheme.find('/') {
                Some(slash) => &after_scheme[slash..],
                None => "",
            }
        }
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("https://na.finalfantasyxiv.com", "Y'shtola Rhul", "Gilgamesh")
            .unwrap();
        assert_eq!(
            url,
            "https://na.finalfantasyxiv.com/lodestone/character/?q=Y%27shtola+Rhul&worldname=Gilgamesh"
        );
    }

    #[test]
    fn test_search_url_keeps_empty_worldname() {
        let url = search_url("https://na.finalfantasyxiv.com", "Alphinaud", "").unwrap();
        assert!(url.ends_with("&worldname="));
    }

    #[test]
    fn test_character_url() {
        assert_eq!(
            character_url("https://eu.finalfantasyxiv.com", "12345678").unwrap(),
            "https://eu.finalfantasyxiv.com/lodestone/character/12345678/"
        );
    }

    #[test]
    fn test_subcategory_url_keeps_last_three_segments() {
        let url = subcategory_url(
            "https://na.finalfantasyxiv.com/lodestone/character/12345678/",
            "/lodestone/character/12345678/achievement/kind/2/",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://na.finalfantasyxiv.com/lodestone/character/12345678/achievement/kind/2/"
        );
    }

    #[test]
    fn test_subcategory_url_rejects_empty_href() {
        assert!(subcategory_url("https://example.com/c/1/", "/").is_err());
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/lodestone/character/87654321/"), "87654321");
        assert_eq!(last_segment("https://example.com/a/b"), "b");
        assert_eq!(last_segment("/a/b?page=2"), "b");
        assert_eq!(last_segment("/"), "");
    }

    #[test]
    fn test_last_path_segments_shorter_path() {
        assert_eq!(last_path_segments("/kind/2/", 3).unwrap(), "kind/2");
        assert_eq!(
            last_path_segments("https://example.com/a/b/c/d", 3).unwrap(),
            "b/c/d"
        );
        assert!(last_path_segments("", 3).is_none());
    }
}
