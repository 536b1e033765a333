// src/extract/search.rs

//! Search results page extraction.

use scraper::Html;

use crate::error::Result;
use crate::extract::{attr_of, first, parse_selector, split_world, text_of};
use crate::models::CharacterSummary;
use crate::utils::url::last_segment;

/// Extract one [`CharacterSummary`] per result entry, in page order.
///
/// The character ID is the last non-empty path segment of the entry link;
/// the profile URL is that link appended to `base_url`.
pub fn search_results(doc: &Html, base_url: &str) -> Result<Vec<CharacterSummary>> {
    let entry_sel = parse_selector(".entry__link")?;
    let name_sel = parse_selector(".entry__name")?;
    let world_sel = parse_selector(".entry__world")?;
    let face_sel = parse_selector(".entry__chara__face img")?;
    let lang_sel = parse_selector(".entry__chara__lang")?;

    let mut characters = Vec::new();
    for entry in doc.select(&entry_sel) {
        let href = attr_of(entry, "href");
        let world = first(entry, &world_sel).map(text_of).unwrap_or_default();
        let (server, data_center) = split_world(&world);

        characters.push(CharacterSummary {
            id: last_segment(&href),
            name: first(entry, &name_sel).map(text_of).unwrap_or_default(),
            server,
            data_center,
            lang: first(entry, &lang_sel).map(text_of).unwrap_or_default(),
            avatar_url: first(entry, &face_sel)
                .map(|img| attr_of(img, "src"))
                .unwrap_or_default(),
            profile_url: format!("{base_url}{href}"),
        });
    }
    Ok(characters)
}
