use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use super::loader::load_file;
use super::model::NominationTable;

/// Dataset read by the dashboard, relative to the working directory.
pub const DATA_PATH: &str = "oscars_data.csv";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file is missing or could not be parsed. Fatal for the session.
    #[error("data unavailable ({}): {reason}", .path.display())]
    DataUnavailable { path: PathBuf, reason: String },
}

// ---------------------------------------------------------------------------
// DataSource – owned, lazily loaded table handle
// ---------------------------------------------------------------------------

/// Owns the path and the cached table. The file is read on the first call to
/// [`DataSource::table`]; later calls hand out the same `Arc` until
/// [`DataSource::invalidate`] is called.
#[derive(Debug)]
pub struct DataSource {
    path: PathBuf,
    cached: Option<Arc<NominationTable>>,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new(DATA_PATH)
    }
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the loaded table, reading the file only if nothing is cached.
    pub fn table(&mut self) -> Result<Arc<NominationTable>, DataError> {
        if let Some(table) = &self.cached {
            return Ok(Arc::clone(table));
        }

        let table = load_file(&self.path).map_err(|e| {
            log::error!("Failed to load {}: {e:#}", self.path.display());
            DataError::DataUnavailable {
                path: self.path.clone(),
                reason: format!("{e:#}"),
            }
        })?;

        log::info!(
            "Loaded {} nominations from {} ({} categories, years {})",
            table.len(),
            self.path.display(),
            table.categories.len(),
            table.years
        );

        let table = Arc::new(table);
        self.cached = Some(Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached table so the next [`DataSource::table`] re-reads the file.
    pub fn invalidate(&mut self) {
        if self.cached.take().is_some() {
            log::debug!("Invalidated cached table for {}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "name,film,category,year_film,winner\nA,X,Best Actor,1990,0\n";

    #[test]
    fn table_is_cached_until_invalidated() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let mut source = DataSource::new(file.path());
        let first = source.table().unwrap();
        let second = source.table().unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        // Changes on disk are only picked up after invalidation.
        std::fs::write(
            file.path(),
            format!("{CSV}B,Y,Best Actor,1991,1\n"),
        )
        .unwrap();
        assert_eq!(source.table().unwrap().len(), 1);

        source.invalidate();
        let reloaded = source.table().unwrap();
        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oscars_data.csv");
        let mut source = DataSource::new(&path);

        match source.table() {
            Err(DataError::DataUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn default_points_at_fixed_path() {
        assert_eq!(DataSource::default().path(), Path::new(DATA_PATH));
    }
}
