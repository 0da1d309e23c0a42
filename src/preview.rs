use crate::entry::{Entry, EntryKind};
use colored::Colorize;

/// Renders the entries a run would create, in input order, without touching the filesystem.
///
/// Folders are shown in blue and files in green.
pub fn render_preview(entries: &[Entry]) -> String {
    let mut out = format!("{}\n", "Planned entries:".bold().bright_blue());

    for entry in entries {
        let line = match entry.kind {
            EntryKind::Folder => format!("  {:<7} {}", entry.kind, entry.name.blue()),
            EntryKind::File => format!("  {:<7} {}", entry.kind, entry.name.green()),
        };

        out.push_str(&line);
        out.push('\n');
    }

    out
}
