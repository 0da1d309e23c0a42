use crate::{entry::EntryKind, errors::CreationError};
use std::{
    fs::{self, OpenOptions},
    path::Path,
};

/// How an already existing file is treated when a file entry is created over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Truncate the existing file to zero bytes.
    #[default]
    Truncate,
    /// Fail with a [`CreationError`] instead of touching the existing file.
    Refuse,
}

/// Creates the directory at `path` together with any missing parents.
///
/// An already existing directory is not an error.
///
/// # Errors
///
/// Returns a [`CreationError`] if something other than a directory occupies `path`
/// or the directory cannot be created.
pub fn create_directory(path: &Path) -> Result<(), CreationError> {
    fs::create_dir_all(path)
        .map_err(|error| CreationError::new(EntryKind::Folder, path.into(), error))?;

    log::debug!("directory ready: {}", path.display());

    Ok(())
}

/// Opens `path` for writing and closes it again without writing anything,
/// leaving an empty file behind. The handle is dropped as soon as it is opened.
///
/// # Errors
///
/// Returns a [`CreationError`] if the file cannot be opened for writing, e.g. a directory
/// exists at `path`, permission is denied, or `policy` is [`OverwritePolicy::Refuse`]
/// and a file already exists.
pub fn write_empty_file(path: &Path, policy: OverwritePolicy) -> Result<(), CreationError> {
    let mut options = OpenOptions::new();
    options.write(true);

    match policy {
        OverwritePolicy::Truncate => options.create(true).truncate(true),
        OverwritePolicy::Refuse => options.create_new(true),
    };

    options
        .open(path)
        .map_err(|error| CreationError::new(EntryKind::File, path.into(), error))?;

    log::debug!("empty file written: {} ({:?})", path.display(), policy);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_directory_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("src");

        create_directory(&dir).unwrap();
        create_directory(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_create_directory_creates_parents() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("app").join("components");

        create_directory(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_create_directory_over_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src");
        fs::write(&path, "").unwrap();

        let err = create_directory(&path).unwrap_err();

        assert_eq!(err.kind, EntryKind::Folder);
        assert_eq!(err.path, path);
    }

    #[test]
    fn test_write_empty_file_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.tsx");
        fs::write(&path, "export default function Page() {}").unwrap();

        write_empty_file(&path, OverwritePolicy::Truncate).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_write_empty_file_refuse_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.tsx");
        fs::write(&path, "keep me").unwrap();

        let err = write_empty_file(&path, OverwritePolicy::Refuse).unwrap_err();

        assert_eq!(err.kind, EntryKind::File);
        assert_eq!(err.source.kind(), std::io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_write_empty_file_refuse_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Map.tsx");

        write_empty_file(&path, OverwritePolicy::Refuse).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_write_empty_file_over_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("layout.tsx");
        fs::create_dir(&path).unwrap();

        let err = write_empty_file(&path, OverwritePolicy::Truncate).unwrap_err();

        assert_eq!(err.kind, EntryKind::File);
        assert!(path.is_dir());
    }
}
