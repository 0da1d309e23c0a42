use std::fmt;

/// What a name turns into on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}
impl EntryKind {
    fn as_str(&self) -> &str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}
impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single item of an item list, paired with the kind it will be created as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}
impl Entry {
    /// A name containing a `.` is a file, anything else is a folder.
    pub fn classify(name: &str) -> Self {
        let kind = if name.contains('.') {
            EntryKind::File
        } else {
            EntryKind::Folder
        };

        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
        }
    }

    /// The line printed once the entry exists, e.g. `Created file: page.tsx`.
    pub fn confirmation(&self) -> String {
        format!("Created {}: {}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dotted_name_is_file() {
        let entry = Entry::classify("layout.tsx");

        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.name, "layout.tsx");
    }

    #[test]
    fn test_classify_plain_name_is_folder() {
        assert_eq!(Entry::classify("src").kind, EntryKind::Folder);
    }

    #[test]
    fn test_classify_dot_anywhere_is_file() {
        assert_eq!(Entry::classify(".gitignore").kind, EntryKind::File);
        assert_eq!(Entry::classify("Makefile.").kind, EntryKind::File);
        assert_eq!(Entry::classify("v1.2/notes").kind, EntryKind::File);
    }

    #[test]
    fn test_file_ignores_dots() {
        assert_eq!(Entry::file("LICENSE").kind, EntryKind::File);
    }

    #[test]
    fn test_confirmation_lines() {
        assert_eq!(
            Entry::classify("page.tsx").confirmation(),
            "Created file: page.tsx"
        );
        assert_eq!(Entry::classify("src").confirmation(), "Created folder: src");
    }
}
