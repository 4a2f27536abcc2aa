//! Menu options 7 (save) and 8 (load).

use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

use anyhow::Result;

use roster_core::{store, Registry, RegistryError};

use crate::prompt::Prompt;

/// Overwrite the data file.
///
/// Failures that [`RegistryError::is_recoverable`] rejects end the session.
pub fn save<R: BufRead, W: Write>(
    registry: &Registry,
    path: &Path,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    match store::save_at(path, registry) {
        Ok(()) => prompt.success(format!(
            "All student and course data saved to {}.",
            path.display()
        )),
        Err(err) if err.is_recoverable() => prompt.failure(format!("Data not saved: {err}")),
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("failed to save data to '{}'", path.display()))),
    }
}

/// Replace the in-memory registry with the data file's contents.
///
/// This is a full replacement, not a merge: records that exist only in
/// memory are gone after a successful load. A recoverable failure is
/// reported and the current registry is kept.
pub fn load<R: BufRead, W: Write>(
    registry: &mut Registry,
    path: &Path,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    match store::load_at(path) {
        Ok(loaded) => {
            *registry = loaded;
            prompt.success(format!(
                "Data loaded from {} ({} students, {} courses).",
                path.display(),
                registry.students().count(),
                registry.courses().count()
            ))
        }
        Err(err) if err.is_recoverable() => {
            tracing::warn!(error = %err, "load failed");
            if is_missing(&err) {
                prompt.failure("Data file not found. No data loaded.")
            } else {
                prompt.failure(format!("No data loaded: {err}"))
            }
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("failed to load data from '{}'", path.display()))),
    }
}

fn is_missing(err: &RegistryError) -> bool {
    matches!(err, RegistryError::IoUnavailable { source, .. } if source.kind() == ErrorKind::NotFound)
}
