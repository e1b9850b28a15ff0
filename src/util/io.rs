use std::{fs, path::Path};

use tracing::debug;

use crate::error::{Error, Res};

/// Write file at given filepath with content.
pub fn write_file<C>(filepath: &Path, content: C) -> Res<()>
where
    C: AsRef<[u8]>,
{
    debug!("Writing file: {}", filepath.display());
    fs::write(filepath, content).map_err(|e| {
        Error::Io(format!("failed to write file {}: {}", filepath.display(), e))
    })
}
