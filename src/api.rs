use crate::{creator::Creator, entry::Entry, errors::CreationError, fs::OverwritePolicy};
use std::path::PathBuf;

/// Items the structure creator makes when no names are given.
pub const STRUCTURE_ITEMS: [&str; 3] = ["layout.tsx", "page.tsx", "dashboard.tsx"];
/// Items the file creator makes when no names are given.
pub const FILE_ITEMS: [&str; 3] = ["Header.tsx", "RequestForm.tsx", "Map.tsx"];

/// Closing line of a successful structure run.
pub const STRUCTURE_SUMMARY: &str = "All files and folders created successfully!";
/// Closing line of a successful file run.
pub const FILES_SUMMARY: &str = "All files created successfully!";

#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Directory the names are resolved against.
    pub root: PathBuf,
    pub overwrite: OverwritePolicy,
}
impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            overwrite: OverwritePolicy::default(),
        }
    }
}

/// Classifies each name (a `.` makes it a file, otherwise a folder).
pub fn plan_structure<S: AsRef<str>>(names: &[S]) -> Vec<Entry> {
    names.iter().map(|name| Entry::classify(name.as_ref())).collect()
}

/// Treats every name as a file.
pub fn plan_files<S: AsRef<str>>(names: &[S]) -> Vec<Entry> {
    names.iter().map(|name| Entry::file(name.as_ref())).collect()
}

/// Creates a file for every name containing a `.` and a folder for every other name.
///
/// `on_created` is called after each entry exists, in input order.
///
/// # Errors
///
/// Returns a [`CreationError`] for the first entry that cannot be created. Later names
/// are not processed and earlier entries stay on disk.
pub fn create_structure<S, F>(
    names: &[S],
    options: &CreateOptions,
    on_created: F,
) -> Result<(), CreationError>
where
    S: AsRef<str>,
    F: FnMut(&Entry),
{
    let creator = Creator::new(&options.root, options.overwrite);

    creator.create_all(&plan_structure(names), on_created)
}

/// Creates an empty file for every name.
///
/// `on_created` is called after each file exists, in input order.
///
/// # Errors
///
/// Returns a [`CreationError`] for the first file that cannot be opened for writing.
pub fn create_files<S, F>(
    names: &[S],
    options: &CreateOptions,
    on_created: F,
) -> Result<(), CreationError>
where
    S: AsRef<str>,
    F: FnMut(&Entry),
{
    let creator = Creator::new(&options.root, options.overwrite);

    creator.create_all(&plan_files(names), on_created)
}
