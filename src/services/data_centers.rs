// src/services/data_centers.rs

//! Process-wide data center index.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OnceCell;

use crate::error::Result;
use crate::models::DataCenterTable;

/// Lazily-loaded, read-only view of the region/data-center/server table.
///
/// Construct one per process and share it via `Arc`. The table file is read
/// at most once per successful load: concurrent first callers join the
/// in-flight load, later calls are no-ops. A failed load leaves the cell
/// empty so a later call may retry. Lookups before a successful load return
/// empty results.
pub struct DataCenterIndex {
    path: PathBuf,
    table: OnceCell<DataCenterTable>,
    reads: AtomicUsize,
}

impl DataCenterIndex {
    /// Index backed by a table file, loaded on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: OnceCell::new(),
            reads: AtomicUsize::new(0),
        }
    }

    /// Index over an already-loaded table. `load` becomes a no-op.
    pub fn from_table(table: DataCenterTable) -> Self {
        Self {
            path: PathBuf::new(),
            table: OnceCell::new_with(Some(table)),
            reads: AtomicUsize::new(0),
        }
    }

    /// Ensure the table is loaded.
    pub async fn load(&self) -> Result<()> {
        self.table
            .get_or_try_init(|| async {
                self.reads.fetch_add(1, Ordering::Relaxed);
                log::debug!("loading data center table from {}", self.path.display());
                DataCenterTable::load(&self.path)
            })
            .await?;
        Ok(())
    }

    fn table(&self) -> Option<&DataCenterTable> {
        self.table.get()
    }

    /// Every known server name.
    pub fn all_servers(&self) -> HashSet<&str> {
        self.table().map(DataCenterTable::all_servers).unwrap_or_default()
    }

    /// Servers of a data center, in table order.
    pub fn servers_of(&self, data_center: &str) -> Vec<&str> {
        self.table()
            .map(|t| t.servers_of(data_center))
            .unwrap_or_default()
    }

    /// Whether a server belongs to the given data center.
    pub fn belongs_to(&self, server: &str, data_center: &str) -> bool {
        self.table()
            .is_some_and(|t| t.belongs_to(server, data_center))
    }

    /// Names of all data centers, in table order.
    pub fn all_data_centers(&self) -> Vec<&str> {
        self.table()
            .map(DataCenterTable::all_data_centers)
            .unwrap_or_default()
    }

    /// Names of all regions, in table order.
    pub fn all_regions(&self) -> Vec<&str> {
        self.table()
            .map(DataCenterTable::all_regions)
            .unwrap_or_default()
    }

    /// Data centers of a region, in table order.
    pub fn data_centers_of(&self, region: &str) -> Vec<&str> {
        self.table()
            .map(|t| t.data_centers_of(region))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;

    const TABLE: &str = r#"
        [[regions]]
        name = "Europe"

        [[regions.data_centers]]
        name = "Chaos"
        servers = ["Cerberus", "Omega"]

        [[regions.data_centers]]
        name = "Light"
        servers = ["Odin", "Shiva"]
    "#;

    fn table_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_lookups_before_load_are_empty() {
        let index = DataCenterIndex::new("data/data_centers.toml");
        assert!(index.all_servers().is_empty());
        assert!(index.servers_of("Chaos").is_empty());
        assert!(index.all_regions().is_empty());
        assert!(!index.belongs_to("Odin", "Light"));
    }

    #[tokio::test]
    async fn test_load_reads_file_once() {
        let file = table_file();
        let index = DataCenterIndex::new(file.path());

        index.load().await.unwrap();
        index.load().await.unwrap();

        assert_eq!(index.reads.load(Ordering::Relaxed), 1);
        assert!(index.all_servers().contains("Odin"));
        assert_eq!(index.data_centers_of("Europe"), vec!["Chaos", "Light"]);
    }

    #[tokio::test]
    async fn test_concurrent_load_is_single_flight() {
        let file = table_file();
        let index = Arc::new(DataCenterIndex::new(file.path()));

        let tasks: Vec<_> = (0..10)
            .map(|_| {
                let index = Arc::clone(&index);
                tokio::spawn(async move { index.load().await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(index.reads.load(Ordering::Relaxed), 1);
        assert_eq!(index.all_servers().len(), 4);
    }

    #[tokio::test]
    async fn test_failed_load_can_retry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_centers.toml");
        let index = DataCenterIndex::new(&path);

        assert!(index.load().await.is_err());
        assert!(index.all_servers().is_empty());

        std::fs::write(&path, TABLE).unwrap();
        index.load().await.unwrap();
        assert_eq!(index.reads.load(Ordering::Relaxed), 2);
        assert!(index.belongs_to("Cerberus", "Chaos"));
    }

    #[tokio::test]
    async fn test_from_table_needs_no_file() {
        let table: DataCenterTable = toml::from_str(TABLE).unwrap();
        let index = DataCenterIndex::from_table(table);

        index.load().await.unwrap();
        assert_eq!(index.reads.load(Ordering::Relaxed), 0);
        assert!(index.belongs_to("Shiva", "Light"));
    }
}
