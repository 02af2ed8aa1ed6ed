//! File emitter - writes an artifact set through the filesystem port.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::ArtifactSet, error::SiteforgeResult};

/// Writes generated artifacts to disk, preserving artifact order.
///
/// Writes are not transactional: the first failure propagates and any files
/// already written stay in place.
pub struct FileEmitter;

impl FileEmitter {
    /// Write every artifact under `output_dir`, creating intermediate
    /// directories as needed. Returns the relative paths written, in
    /// artifact order.
    #[instrument(skip_all, fields(output_dir = %output_dir.display(), files = artifacts.len()))]
    pub fn write(
        artifacts: &ArtifactSet,
        output_dir: &Path,
        filesystem: &dyn Filesystem,
    ) -> SiteforgeResult<Vec<PathBuf>> {
        filesystem.create_dir_all(output_dir)?;

        let mut written = Vec::with_capacity(artifacts.len());
        for (relative, content) in artifacts.iter() {
            let target = output_dir.join(relative);
            if let Some(parent) = target.parent() {
                filesystem.create_dir_all(parent)?;
            }
            filesystem.write_file(&target, content)?;
            debug!(path = %target.display(), "Wrote artifact");
            written.push(relative.to_path_buf());
        }

        Ok(written)
    }
}
