use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::{catalog::CatalogEntry, sale::SaleRecord};

/// Failures reading an input document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: File '{}' not found.", .path.display())]
    NotFound { path: PathBuf },

    /// The file isn't valid JSON, or isn't a list of records.
    #[error("Error: File '{}' contains invalid JSON.", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error: File '{}' could not be read: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a price catalog from the JSON document at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be opened, or doesn't contain a
/// JSON list of catalog entries.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>, LoadError> {
    read_list(path.as_ref())
}

/// Reads sales records from the JSON document at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be opened, or doesn't contain a
/// JSON list of sales records.
pub fn read_sales(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, LoadError> {
    read_list(path.as_ref())
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let records: Vec<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                return LoadError::Io {
                    path: path.to_path_buf(),
                    source: source.into(),
                };
            }
            LoadError::InvalidJson {
                path: path.to_path_buf(),
                source,
            }
        })?;
    debug!(path = %path.display(), records = records.len(), "loaded document");
    Ok(records)
}
