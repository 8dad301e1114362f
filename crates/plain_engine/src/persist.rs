use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::{EngineEvent, EventSink, Stage};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("output path is a directory: {0}")]
    IsDirectory(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Atomically writes content to a path by writing a temp file beside it and renaming.
///
/// A symlinked target is written through to the file it points at, and an
/// existing file keeps its permissions. New files get mode 0644 on unix.
#[derive(Debug, Default, Clone, Copy)]
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(&self, target: &Path, content: &str) -> Result<PathBuf, PersistError> {
        let resolved = resolve_symlink(target);
        let target = resolved.as_path();
        if target.is_dir() {
            return Err(PersistError::IsDirectory(target.to_path_buf()));
        }
        let dir = parent_dir(target);
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let existing = fs::metadata(target).ok().map(|meta| meta.permissions());

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        match existing {
            Some(permissions) => tmp.as_file().set_permissions(permissions)?,
            None => set_readable(tmp.as_file())?,
        }
        tmp.as_file_mut().sync_all()?;

        // Windows refuses to rename over an existing file.
        if cfg!(windows) && target.exists() {
            fs::remove_file(target)?;
        }
        tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target.to_path_buf())
    }
}

/// Follows a symlink to its destination. A dangling link is replaced in place.
fn resolve_symlink(target: &Path) -> PathBuf {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(target).unwrap_or_else(|_| target.to_path_buf())
        }
        _ => target.to_path_buf(),
    }
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn set_readable(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(FILE_MODE))
}

#[cfg(not(unix))]
fn set_readable(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// Writes the assembled text to `path`, creating or replacing it.
pub fn write_text_file(
    path: &Path,
    text: &str,
    sink: &dyn EventSink,
) -> Result<PathBuf, PersistError> {
    sink.emit(EngineEvent::Progress {
        stage: Stage::Writing,
        bytes: Some(text.len() as u64),
        segments: None,
    });
    match AtomicFileWriter::new().write(path, text) {
        Ok(written) => {
            sink.emit(EngineEvent::progress(Stage::Done));
            Ok(written)
        }
        Err(err) => {
            sink.emit(EngineEvent::failed(
                Stage::Writing,
                format!("{}: {err}", path.display()),
            ));
            Err(err)
        }
    }
}
