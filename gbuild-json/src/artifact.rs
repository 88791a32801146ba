// © 2025 <_@habnab.it>
//
// SPDX-License-Identifier: EUPL-1.2

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileAccessError {
    #[error("could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not remove {path:?}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a build artifact as text, then deletes it.
///
/// The file is closed before removal. If the read fails the file is left
/// alone.
pub fn consume(path: impl AsRef<Path>) -> Result<String, FileAccessError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| FileAccessError::Read {
        path: path.to_owned(),
        source,
    })?;
    fs::remove_file(path).map_err(|source| FileAccessError::Remove {
        path: path.to_owned(),
        source,
    })?;
    debug!("consumed {} bytes from {path:?}", contents.len());
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn reads_then_removes() -> Result<()> {
        let tmpdir = tempdir()?;
        let path = tmpdir.path().join("version.txt");
        fs::write(&path, "1.2.3\n")?;

        assert_eq!(consume(&path)?, "1.2.3\n");
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn missing_file() -> Result<()> {
        let tmpdir = tempdir()?;
        let path = tmpdir.path().join("absent");

        let err = consume(&path).unwrap_err();
        assert!(matches!(err, FileAccessError::Read { .. }));
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_kept() -> Result<()> {
        let tmpdir = tempdir()?;
        let path = tmpdir.path().join("binary");
        fs::write(&path, b"\xff\xfe")?;

        let err = consume(&path).unwrap_err();
        assert!(matches!(err, FileAccessError::Read { .. }));
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn directory_is_a_read_failure() -> Result<()> {
        let tmpdir = tempdir()?;
        let err = consume(tmpdir.path()).unwrap_err();
        assert!(matches!(err, FileAccessError::Read { .. }));
        assert!(tmpdir.path().exists());
        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unremovable_file() {
        // readable, but procfs refuses unlink even for root
        let err = consume("/proc/self/comm").unwrap_err();
        assert!(matches!(err, FileAccessError::Remove { .. }));
    }
}
