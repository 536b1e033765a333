// src/models/data_centers.rs

//! Region, data center, and server table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// The full region -> data center -> server table.
///
/// Backed by arrays rather than maps so every listing keeps the order of
/// the table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataCenterTable {
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// A geographic region grouping data centers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub name: String,

    #[serde(default)]
    pub data_centers: Vec<DataCenter>,
}

/// A named cluster of servers within a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataCenter {
    pub name: String,

    #[serde(default)]
    pub servers: Vec<String>,
}

impl DataCenterTable {
    /// Load and validate the table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "failed to read data center table {}: {e}",
                path.display()
            ))
        })?;
        let table: Self = toml::from_str(&content).map_err(|e| {
            AppError::config(format!(
                "failed to parse data center table {}: {e}",
                path.display()
            ))
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Check that server names are unique within each data center.
    pub fn validate(&self) -> Result<()> {
        for region in &self.regions {
            for dc in &region.data_centers {
                let mut seen = HashSet::new();
                for server in &dc.servers {
                    if !seen.insert(server.as_str()) {
                        return Err(AppError::config(format!(
                            "duplicate server '{server}' in data center '{}'",
                            dc.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn data_centers(&self) -> impl Iterator<Item = &DataCenter> {
        self.regions.iter().flat_map(|r| &r.data_centers)
    }

    /// Every known server name, across all regions.
    pub fn all_servers(&self) -> HashSet<&str> {
        self.data_centers()
            .flat_map(|dc| &dc.servers)
            .map(String::as_str)
            .collect()
    }

    /// Servers of a data center, in table order. Empty for unknown names.
    pub fn servers_of(&self, data_center: &str) -> Vec<&str> {
        self.data_centers()
            .find(|dc| dc.name == data_center)
            .map(|dc| dc.servers.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether a server belongs to the given data center.
    pub fn belongs_to(&self, server: &str, data_center: &str) -> bool {
        self.servers_of(data_center).contains(&server)
    }

    /// Names of all data centers, in table order.
    pub fn all_data_centers(&self) -> Vec<&str> {
        self.data_centers().map(|dc| dc.name.as_str()).collect()
    }

    /// Names of all regions, in table order.
    pub fn all_regions(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.name.as_str()).collect()
    }

    /// Data centers of a region, in table order. Empty for unknown names.
    pub fn data_centers_of(&self, region: &str) -> Vec<&str> {
        self.regions
            .iter()
            .find(|r| r.name == region)
            .map(|r| r.data_centers.iter().map(|dc| dc.name.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DataCenterTable {
        toml::from_str(
            r#"
            [[regions]]
            name = "Europe"

            [[regions.data_centers]]
            name = "Chaos"
            servers = ["Cerberus", "Omega", "Ragnarok"]

            [[regions.data_centers]]
            name = "Light"
            servers = ["Odin", "Shiva"]

            [[regions]]
            name = "Oceania"

            [[regions.data_centers]]
            name = "Materia"
            servers = ["Bismarck", "Ravana"]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_servers_spans_regions() {
        let table = sample_table();
        let servers = table.all_servers();
        assert!(servers.contains("Cerberus"));
        assert!(servers.contains("Bismarck"));
        assert_eq!(servers.len(), 7);
    }

    #[test]
    fn test_servers_of_preserves_order() {
        let table = sample_table();
        assert_eq!(table.servers_of("Chaos"), vec!["Cerberus", "Omega", "Ragnarok"]);
        assert!(table.servers_of("Aether").is_empty());
    }

    #[test]
    fn test_belongs_to() {
        let table = sample_table();
        assert!(table.belongs_to("Odin", "Light"));
        assert!(!table.belongs_to("Odin", "Chaos"));
        assert!(!table.belongs_to("Odin", "Nonexistent"));
    }

    #[test]
    fn test_region_listings() {
        let table = sample_table();
        assert_eq!(table.all_regions(), vec!["Europe", "Oceania"]);
        assert_eq!(table.all_data_centers(), vec!["Chaos", "Light", "Materia"]);
        assert_eq!(table.data_centers_of("Europe"), vec!["Chaos", "Light"]);
        assert!(table.data_centers_of("Atlantis").is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_server() {
        let table: DataCenterTable = toml::from_str(
            r#"
            [[regions]]
            name = "Europe"

            [[regions.data_centers]]
            name = "Chaos"
            servers = ["Cerberus", "Cerberus"]
            "#,
        )
        .unwrap();
        assert!(table.validate().is_err());
    }
}
