use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Folder,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => write!(f, "files"),
            PathKind::Folder => write!(f, "folders"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Missing {kind}: {}", .paths.join(" "))]
    MissingPaths { kind: PathKind, paths: Vec<String> },
}

/// Fails listing every entry of `paths` that is not an existing regular file.
pub fn check_files<P: AsRef<Path>>(paths: &[P]) -> Result<(), CheckError> {
    check(paths, PathKind::File, Path::is_file)
}

/// Fails listing every entry of `paths` that is not an existing directory.
pub fn check_folders<P: AsRef<Path>>(paths: &[P]) -> Result<(), CheckError> {
    check(paths, PathKind::Folder, Path::is_dir)
}

fn check<P: AsRef<Path>>(
    paths: &[P],
    kind: PathKind,
    exists: fn(&Path) -> bool,
) -> Result<(), CheckError> {
    let missing: Vec<String> = paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| !exists(path))
        .map(|path| path.display().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckError::MissingPaths {
            kind,
            paths: missing,
        })
    }
}
