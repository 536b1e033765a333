// src/models/character.rs

//! Character data structures.

use serde::{Deserialize, Serialize};

/// One entry on the character search results page.
///
/// Fields absent from the page default to empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    /// Character ID, the last non-empty path segment of the profile URL
    pub id: String,

    /// Character name
    pub name: String,

    /// Server (world) name
    pub server: String,

    /// Data center the server belongs to
    pub data_center: String,

    /// Client language tag shown next to the entry
    pub lang: String,

    /// Avatar image URL
    pub avatar_url: String,

    /// Full URL of the character's profile page
    pub profile_url: String,
}

/// A character's profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetail {
    pub id: String,
    pub name: String,

    /// Chosen title, empty if none is displayed
    pub title: String,

    pub server: String,
    pub data_center: String,
    pub avatar_url: String,
    pub portrait_url: String,
    pub profile_url: String,

    /// Free company membership, `None` when the character belongs to none
    pub free_company: Option<FreeCompanyRef>,

    /// Jobs in page order
    pub jobs: Vec<JobLevel>,
}

/// Reference to a character's free company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FreeCompanyRef {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// A single job with its level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobLevel {
    pub name: String,

    /// Parsed level; 0 when the page shows a non-numeric placeholder
    pub level: u32,

    pub icon_url: String,
}
