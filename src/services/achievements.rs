// src/services/achievements.rs

//! Achievement category tree fetching.
//!
//! One GET for the top-level category listing, then one GET per category
//! for its subcategories, issued concurrently. The protocol is
//! all-or-nothing: a single failed subcategory fetch fails the whole
//! request and cancels its in-flight siblings.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use scraper::Html;

use crate::error::Result;
use crate::extract;
use crate::models::AchievementTree;
use crate::utils::http::PageFetcher;
use crate::utils::url::subcategory_url;

/// Fetches a character's achievement category tree.
pub struct AchievementFetcher {
    fetcher: Arc<dyn PageFetcher>,
    max_concurrent: usize,
}

impl AchievementFetcher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, max_concurrent: usize) -> Self {
        Self {
            fetcher,
            max_concurrent,
        }
    }

    /// Fetch the full category tree for `character_url`
    /// (`{base}/lodestone/character/{id}/`).
    ///
    /// Subcategory fetches run `max_concurrent` at a time through an
    /// ordered buffer, so the merged tree keeps the top-level listing's
    /// category order no matter which fetch completes first. `try_collect`
    /// returns the first error and drops the stream, cancelling the
    /// remaining in-flight requests.
    pub async fn fetch(&self, character_url: &str) -> Result<AchievementTree> {
        let listing_url = format!("{character_url}achievement");
        let body = self.fetcher.fetch(&listing_url).await?;
        let categories = {
            let doc = Html::parse_document(&body);
            extract::category_names(&doc)?
        };
        log::debug!(
            "found {} achievement categories at {listing_url}",
            categories.len()
        );

        let concurrency = self.max_concurrent.max(1);
        let pairs: Vec<(String, Vec<String>)> = stream::iter(categories)
            .map(|(name, href)| self.fetch_subcategories(character_url, name, href))
            .buffered(concurrency)
            .try_collect()
            .await?;

        Ok(pairs.into_iter().collect())
    }

    /// Fetch one category page and extract its subcategory names.
    async fn fetch_subcategories(
        &self,
        character_url: &str,
        name: String,
        href: String,
    ) -> Result<(String, Vec<String>)> {
        let url = subcategory_url(character_url, &href)?;
        let body = self.fetcher.fetch(&url).await?;
        let doc = Html::parse_document(&body);
        let subcategories = extract::subcategory_names(&doc)?;
        Ok((name, subcategories))
    }
}
