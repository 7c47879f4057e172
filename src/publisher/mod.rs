//! One-shot schema publishing.
//!
//! Copies a schema description over the account service's deployed
//! `schema.graphql`. The write replaces the destination wholesale; the
//! running service only picks the new file up on its next start.

use std::{fs, io, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to read schema from {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to write schema to {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Copy the full contents of `source` over `dest`, byte for byte.
pub fn publish(source: &Path, dest: &Path) -> Result<(), PublishError> {
    let contents = fs::read(source).map_err(|source_error| PublishError::Read {
        path: source.display().to_string(),
        source: source_error,
    })?;

    fs::write(dest, &contents).map_err(|source_error| PublishError::Write {
        path: dest.display().to_string(),
        source: source_error,
    })?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        bytes = contents.len(),
        "GraphQL schema updated"
    );

    Ok(())
}
