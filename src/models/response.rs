// src/models/response.rs

//! Response envelopes for the caller-facing layer.

use serde::Serialize;

use crate::error::AppError;
use crate::models::{AchievementTree, CharacterDetail, CharacterSummary};

/// Envelope for search results.
///
/// The service returns characters in source page order; the envelope is
/// where they get sorted by name for display.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub number_of_characters: usize,
    pub characters: Vec<CharacterSummary>,
}

impl SearchResponse {
    pub fn new(mut characters: Vec<CharacterSummary>) -> Self {
        characters.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            success: true,
            number_of_characters: characters.len(),
            characters,
        }
    }
}

/// Envelope for a character's details.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub success: bool,
    pub character: CharacterDetail,
}

impl DetailResponse {
    pub fn new(character: CharacterDetail) -> Self {
        Self {
            success: true,
            character,
        }
    }
}

/// Envelope for a character's achievement index.
#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub success: bool,
    pub achievements: AchievementTree,
}

impl AchievementsResponse {
    pub fn new(achievements: AchievementTree) -> Self {
        Self {
            success: true,
            achievements,
        }
    }
}

/// Error envelope: `{success: false, message, error?}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,

    /// Underlying detail, only present for server-side failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn from_error(error: &AppError) -> Self {
        let message = match error {
            AppError::InvalidInput(_) | AppError::UnknownServer { .. } => error.to_string(),
            AppError::NotFound(_) => "This character does not exist".to_string(),
            AppError::Private(_) => "This character's achievements are private".to_string(),
            _ => "Error while scraping character data".to_string(),
        };
        let detail = match error {
            AppError::InvalidInput(_)
            | AppError::UnknownServer { .. }
            | AppError::NotFound(_)
            | AppError::Private(_) => None,
            other => Some(other.to_string()),
        };
        Self {
            success: false,
            message,
            error: detail,
        }
    }
}
