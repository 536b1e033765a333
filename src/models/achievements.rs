// src/models/achievements.rs

//! Achievement category index.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One achievement category with its subcategory names, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCategory {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Two-level index of achievement groupings.
///
/// Serializes as a JSON object mapping category name to an object of
/// subcategory names (each holding an empty list, reserved for entries).
/// Plain maps would reorder keys, so the categories are kept as a vector
/// and serialized by hand to preserve source document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AchievementTree {
    categories: Vec<AchievementCategory>,
}

impl AchievementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category with its subcategories.
    pub fn push(&mut self, name: impl Into<String>, subcategories: Vec<String>) {
        self.categories.push(AchievementCategory {
            name: name.into(),
            subcategories,
        });
    }

    /// Categories in source document order.
    pub fn categories(&self) -> &[AchievementCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for AchievementTree {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let categories = iter
            .into_iter()
            .map(|(name, subcategories)| AchievementCategory {
                name,
                subcategories,
            })
            .collect();
        Self { categories }
    }
}

impl Serialize for AchievementTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &Subcategories(&category.subcategories))?;
        }
        map.end()
    }
}

/// Subcategory names rendered as `{name: []}` entries.
struct Subcategories<'a>(&'a [String]);

impl Serialize for Subcategories<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        const EMPTY: [&str; 0] = [];
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for name in self.0 {
            map.serialize_entry(name, &EMPTY)?;
        }
        map.end()
    }
}
