// src/extract/character.rs

//! Character profile page extraction.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::extract::{attr_of, first, parse_selector, split_world, text_of};
use crate::models::{CharacterDetail, FreeCompanyRef, JobLevel};
use crate::utils::url::last_segment;

/// Extract a [`CharacterDetail`] from a profile page.
///
/// `id` and `profile_url` are the request's, not scraped; `base_url`
/// resolves the free company link.
pub fn character_detail(
    doc: &Html,
    id: &str,
    profile_url: &str,
    base_url: &str,
) -> Result<CharacterDetail> {
    let name_sel = parse_selector(".frame__chara__name")?;
    let title_sel = parse_selector(".frame__chara__title")?;
    let world_sel = parse_selector(".frame__chara__world")?;
    let face_sel = parse_selector(".frame__chara__face img")?;
    let portrait_sel = parse_selector(".character__detail__image img")?;
    let job_sel = parse_selector(".character__level__list li")?;
    let job_img_sel = parse_selector("img")?;
    let fc_sel = parse_selector(".character__freecompany__name a")?;

    let root = doc.root_element();
    let world = first(root, &world_sel).map(text_of).unwrap_or_default();
    let (server, data_center) = split_world(&world);

    let jobs = root
        .select(&job_sel)
        .filter_map(|li| parse_job(li, &job_img_sel))
        .collect();

    let free_company = first(root, &fc_sel).map(|anchor| {
        let href = attr_of(anchor, "href");
        FreeCompanyRef {
            id: last_segment(&href),
            name: text_of(anchor),
            url: format!("{base_url}{href}"),
        }
    });

    Ok(CharacterDetail {
        id: id.to_string(),
        name: first(root, &name_sel).map(text_of).unwrap_or_default(),
        title: first(root, &title_sel).map(text_of).unwrap_or_default(),
        server,
        data_center,
        avatar_url: first(root, &face_sel)
            .map(|img| attr_of(img, "src"))
            .unwrap_or_default(),
        portrait_url: first(root, &portrait_sel)
            .map(|img| attr_of(img, "src"))
            .unwrap_or_default(),
        profile_url: profile_url.to_string(),
        free_company,
        jobs,
    })
}

/// Parse one entry of the level list.
///
/// An entry is kept only when both a name and raw level text are present;
/// a level that fails to parse is recorded as 0, not dropped.
fn parse_job(li: ElementRef, img_sel: &Selector) -> Option<JobLevel> {
    let img = first(li, img_sel)?;
    let name = clean_job_name(&attr_of(img, "data-tooltip"));
    let level_text = text_of(li);
    if name.is_empty() || level_text.is_empty() {
        return None;
    }

    Some(JobLevel {
        name,
        level: level_text.parse().unwrap_or(0),
        icon_url: attr_of(img, "src"),
    })
}

/// Truncate a tooltip like `"Paladin / Gladiator"` to the part before the
/// first `/`, `(` or `)`.
fn clean_job_name(raw: &str) -> String {
    static SPLIT: OnceLock<Regex> = OnceLock::new();
    let split = SPLIT.get_or_init(|| Regex::new(r"[/()]").expect("literal regex"));
    split.split(raw).next().unwrap_or("").trim().to_string()
}
