//! Overwriting moves into the site tree.
//!
//! The relocation step is deliberately dumb: take an artifact the converter
//! just produced and put it at its canonical destination, replacing whatever
//! was there before. Replacement is whole-artifact — an existing asset
//! bundle is removed before the new one lands, never merged — so a
//! destination only ever reflects one conversion run.
//!
//! Destination directories must already exist. The publisher does not own
//! the site layout and never creates it; a missing destination is an error
//! reported to the caller.
//!
//! Moves try `fs::rename` first and fall back to copy-then-remove when the
//! source and destination sit on different filesystems, which is the common
//! case here (conversion runs in a tempdir, often on tmpfs).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("destination directory does not exist: {0}")]
    MissingDestination(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of one relocation.
#[derive(Debug, Clone)]
pub struct Moved {
    /// Final destination path of the artifact.
    pub path: PathBuf,
    /// Whether a prior artifact of the same name was replaced.
    pub replaced: bool,
}

fn io_err(path: &Path, source: io::Error) -> RelocateError {
    RelocateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Move a file to `dest_dir/name`, replacing any existing file.
pub fn move_file(src: &Path, dest_dir: &Path, name: &str) -> Result<Moved, RelocateError> {
    if !dest_dir.is_dir() {
        return Err(RelocateError::MissingDestination(dest_dir.to_path_buf()));
    }
    let dest = dest_dir.join(name);
    let replaced = dest.exists();

    match fs::rename(src, &dest) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(src, &dest).map_err(|e| io_err(&dest, e))?;
            fs::remove_file(src).map_err(|e| io_err(src, e))?;
        }
        Err(e) => return Err(io_err(&dest, e)),
    }

    Ok(Moved {
        path: dest,
        replaced,
    })
}

/// Move a directory to `dest_dir/name`, replacing any existing directory.
///
/// An existing destination is removed entirely before the move: replace,
/// never merge. A re-published asset bundle must not accumulate files from
/// prior runs.
pub fn move_dir(src: &Path, dest_dir: &Path, name: &str) -> Result<Moved, RelocateError> {
    if !dest_dir.is_dir() {
        return Err(RelocateError::MissingDestination(dest_dir.to_path_buf()));
    }
    let dest = dest_dir.join(name);
    let replaced = dest.exists();
    if replaced {
        fs::remove_dir_all(&dest).map_err(|e| io_err(&dest, e))?;
    }

    match fs::rename(src, &dest) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_dir_recursive(src, &dest)?;
            fs::remove_dir_all(src).map_err(|e| io_err(src, e))?;
        }
        Err(e) => return Err(io_err(&dest, e)),
    }

    Ok(Moved {
        path: dest,
        replaced,
    })
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), RelocateError> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            RelocateError::Io {
                path,
                source: e.into(),
            }
        })?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| io_err(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| io_err(&target, e))?;
        }
    }
    Ok(())
}

/// Count regular files under a directory, recursively.
pub fn file_count(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
