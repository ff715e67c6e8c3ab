//! Persisting values to destination files

use crate::reference::Reference;
use ssm_env_core::{Error, FileMode, ResolvedValues, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the resolved value of every reference with a destination to that
/// file, creating or truncating it, then apply its file mode.
///
/// Must run before [`substitute_destinations`](crate::substitute_destinations),
/// while `values` still holds the secret content rather than the path.
pub fn write_destinations(batch: &[Reference], values: &ResolvedValues) -> Result<()> {
    for reference in batch {
        let Some(destination) = reference.destination() else {
            continue;
        };
        let value = values.get(reference.variable()).ok_or_else(|| {
            Error::configuration(format!(
                "no resolved value for {} to write to {}",
                reference.variable(),
                destination.display()
            ))
        })?;

        write_destination(destination, value, reference.file_mode())?;
        tracing::debug!(
            variable = %reference.variable(),
            destination = %destination.display(),
            "Wrote destination file"
        );
    }
    Ok(())
}

fn write_destination(path: &Path, content: &str, mode: Option<FileMode>) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::file_system(path, "open", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::file_system(path, "write to", e))?;
    file.sync_all()
        .map_err(|e| Error::file_system(path, "close", e))?;
    drop(file);

    if let Some(mode) = mode.filter(|m| !m.is_unset()) {
        set_file_mode(path, mode)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_file_mode(path: &Path, mode: FileMode) -> Result<()> {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, Permissions::from_mode(mode.bits()))
        .map_err(|e| Error::file_system(path, "chmod", e))
}

#[cfg(not(unix))]
fn set_file_mode(path: &Path, mode: FileMode) -> Result<()> {
    tracing::warn!(
        destination = %path.display(),
        mode = %mode,
        "File modes are not supported on this platform, ignoring chmod"
    );
    Ok(())
}
