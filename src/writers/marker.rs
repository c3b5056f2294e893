use crate::error::{ReportError, Result};
use crate::utils::constants::{MARKER_CONTENTS, MARKER_FILE, MARKER_MISSING_MESSAGE};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

pub fn marker_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MARKER_FILE)
}

/// Write the success marker, creating the directory if needed.
pub fn write_marker(output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = marker_path(output_dir);
    let mut file = File::create(&path)?;
    file.write_all(MARKER_CONTENTS.as_bytes())?;
    file.sync_all()?;
    Ok(path)
}

/// Fail unless the success marker exists as a regular file.
pub fn check_marker(output_dir: &Path) -> Result<()> {
    let path = marker_path(output_dir);
    if path.is_file() {
        info!(marker = %path.display(), "output verified");
        Ok(())
    } else {
        error!(marker = %path.display(), "success marker missing");
        Err(ReportError::Postcondition(MARKER_MISSING_MESSAGE.to_string()))
    }
}

/// Write the marker, then assert it is there.
pub fn self_test(output_dir: &Path) -> Result<()> {
    write_marker(output_dir)?;
    check_marker(output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_self_test_creates_marker() -> Result<()> {
        let dir = TempDir::new()?;
        let output = dir.path().join("nested").join("results");

        self_test(&output)?;

        let contents = fs::read_to_string(marker_path(&output))?;
        assert_eq!(contents, MARKER_CONTENTS);
        Ok(())
    }

    #[test]
    fn test_deleted_marker_fails_check() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_marker(dir.path())?;
        fs::remove_file(path)?;

        let err = check_marker(dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "Training file is not generated");
        Ok(())
    }
}
