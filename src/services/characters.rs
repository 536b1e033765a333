// src/services/characters.rs

//! Character service: validation, fetching, and extraction behind the
//! three public operations.

use std::sync::Arc;

use scraper::Html;

use crate::config::ScraperConfig;
use crate::error::{AppError, Result};
use crate::extract;
use crate::models::{AchievementTree, CharacterDetail, CharacterSummary};
use crate::services::{AchievementFetcher, DataCenterIndex};
use crate::utils::capitalize;
use crate::utils::http::{self, HttpFetcher, PageFetcher};
use crate::utils::url::{character_url, search_url};

/// Coordinates the data center index, HTTP fetching, and extraction.
///
/// Every operation takes the region base URL explicitly; the service holds
/// no per-request state.
pub struct CharacterService {
    fetcher: Arc<dyn PageFetcher>,
    index: Arc<DataCenterIndex>,
    max_concurrent: usize,
}

impl CharacterService {
    /// Service backed by a real HTTP client built from `config`.
    pub fn new(config: &ScraperConfig, index: Arc<DataCenterIndex>) -> Result<Self> {
        let client = http::create_client(config)?;
        Ok(Self::with_fetcher(
            Arc::new(HttpFetcher::new(client)),
            index,
            config.max_concurrent,
        ))
    }

    /// Service backed by an arbitrary page fetcher.
    pub fn with_fetcher(
        fetcher: Arc<dyn PageFetcher>,
        index: Arc<DataCenterIndex>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            fetcher,
            index,
            max_concurrent,
        }
    }

    /// Search characters by name, optionally filtered to one server.
    ///
    /// A non-empty `server` is capitalized to the table's canonical casing
    /// and validated against the index before any request goes out.
    /// Results keep the page's order; the envelope layer sorts.
    pub async fn search(
        &self,
        base_url: &str,
        name: &str,
        server: &str,
    ) -> Result<Vec<CharacterSummary>> {
        if name.is_empty() {
            return Err(AppError::invalid_input("character name is required"));
        }

        self.index.load().await?;
        let server = capitalize(server);
        if !server.is_empty() && !self.index.all_servers().contains(server.as_str()) {
            return Err(AppError::unknown_server(server));
        }

        let url = search_url(base_url, name, &server)?;
        let body = self.fetcher.fetch(&url).await?;
        let doc = Html::parse_document(&body);
        extract::search_results(&doc, base_url)
    }

    /// Fetch a character's profile page by ID.
    pub async fn detail(&self, base_url: &str, id: &str) -> Result<CharacterDetail> {
        let profile_url = character_url(base_url, id)?;
        let body = self.fetcher.fetch(&profile_url).await?;
        let doc = Html::parse_document(&body);
        extract::character_detail(&doc, id, &profile_url, base_url)
    }

    /// Fetch a character's achievement category tree by ID.
    pub async fn achievements(&self, base_url: &str, id: &str) -> Result<AchievementTree> {
        let url = character_url(base_url, id)?;
        AchievementFetcher::new(Arc::clone(&self.fetcher), self.max_concurrent)
            .fetch(&url)
            .await
    }
}
