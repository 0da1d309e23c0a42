use miette::Diagnostic;
use thiserror::Error;

use crate::entry::EntryKind;

/// The single failure class: a file could not be opened for writing or a
/// folder could not be created.
#[derive(Debug, Error, Diagnostic)]
#[error("unable to create {kind} at '{path}'")]
#[diagnostic(
    code(skel::creation),
    help("Check permissions and that nothing of the other kind already exists at this path.")
)]
pub struct CreationError {
    pub kind: EntryKind,
    pub path: std::path::PathBuf,
    #[source]
    pub source: std::io::Error,
}
impl CreationError {
    pub fn new(kind: EntryKind, path: std::path::PathBuf, error: std::io::Error) -> Self {
        Self {
            kind,
            path,
            source: error,
        }
    }
}
