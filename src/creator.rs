use crate::{
    entry::{Entry, EntryKind},
    errors::CreationError,
    fs::{create_directory, write_empty_file, OverwritePolicy},
};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Creates entries one after another underneath `root`.
#[derive(Debug, Clone)]
pub struct Creator {
    root: PathBuf,
    policy: OverwritePolicy,
}
impl Creator {
    pub fn new<P: AsRef<Path>>(root: P, policy: OverwritePolicy) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            policy,
        }
    }

    /// Resolves the entry against `root` and creates it.
    ///
    /// # Errors
    ///
    /// Returns a [`CreationError`] if the file or folder cannot be created. An empty
    /// name names no path at all and fails as not found.
    pub fn create(&self, entry: &Entry) -> Result<(), CreationError> {
        let path = self.root.join(&entry.name);

        if entry.name.is_empty() {
            return Err(CreationError::new(
                entry.kind,
                path,
                io::Error::from(io::ErrorKind::NotFound),
            ));
        }

        log::debug!("creating {} at {}", entry.kind, path.display());

        match entry.kind {
            EntryKind::File => write_empty_file(&path, self.policy),
            EntryKind::Folder => create_directory(&path),
        }
    }

    /// Creates every entry in input order, calling `on_created` right after each one exists.
    ///
    /// The first failure stops the run. Entries created before it are left in place.
    pub fn create_all<F>(
        &self,
        entries: &[Entry],
        mut on_created: F,
    ) -> Result<(), CreationError>
    where
        F: FnMut(&Entry),
    {
        for entry in entries {
            self.create(entry)?;

            on_created(entry);
        }

        Ok(())
    }
}
