//! Manifest file output.
//!
//! A previous manifest is removed before the new one is written, so no stale
//! line can survive a shrinking manifest. If writing fails after the removal
//! the manifest is left absent rather than half old, half new.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ops::flatten::FlattenedManifest;
use crate::util::fs::ensure_dir;

/// Replace the manifest at `path` with `manifest`.
pub fn write_manifest(manifest: &FlattenedManifest, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("failed to remove old manifest: {}", path.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("failed to create manifest: {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for coord in manifest.coordinates() {
        writeln!(out, "{}", coord)
            .with_context(|| format!("failed to write manifest: {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("failed to write manifest: {}", path.display()))?;

    tracing::debug!("wrote {} entries to {}", manifest.len(), path.display());
    Ok(())
}
