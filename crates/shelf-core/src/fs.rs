//! Filesystem utilities for whole-file replacement.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace `destination` with `data` in one step.
///
/// The bytes are written to a sibling temp file, synced, then renamed over the
/// destination so readers never observe a half-written document. Missing
/// parent directories are created.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt. The temp file is removed on failure.
pub fn replace_file(destination: &Path, data: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let temp_path = temp_sibling(&parent, destination)?;
    let written = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(data)?;
            file.sync_all()
        });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

fn temp_sibling(parent: &Path, destination: &Path) -> io::Result<PathBuf> {
    let filename = destination
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid data filename"))?;
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
        .as_nanos();

    // Built from the OsStr so non-UTF-8 names still work.
    let mut temp_name = OsString::from(".");
    temp_name.push(filename);
    temp_name.push(format!(".{}.tmp", nanos));
    Ok(parent.join(temp_name))
}

/// Rename, retrying after removing the destination on platforms where
/// `fs::rename` refuses to overwrite.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Replace failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_replace_creates_new_file() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("books.json");

        replace_file(&dest, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{}");
    }

    #[test]
    fn test_replace_overwrites_in_full() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("books.json");
        fs::write(&dest, "a much longer previous document").unwrap();

        replace_file(&dest, b"short").unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "short");
    }

    #[test]
    fn test_replace_creates_parent_dirs_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("nested").join("deeper").join("books.json");

        replace_file(&dest, b"[]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(dest.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        assert!(dest.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_replace_accepts_non_utf8_filename() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join(OsStr::from_bytes(b"books-\xff.json"));

        replace_file(&dest, b"{}").unwrap();
        replace_file(&dest, b"[]").unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"[]");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
