//! Centralized destination naming for published artifacts.
//!
//! Every artifact the pipeline touches is named after the source document's
//! base name `B` (the filename with its notebook extension removed): the
//! converter renders `B.md` and, when the document embeds images, a sibling
//! `B_files/` directory. The published destinations reuse those names
//! unchanged, so re-publishing the same document always targets the same
//! two paths. This module is the single place the names are derived, so the
//! publish and check paths cannot drift apart.

use std::path::Path;

/// The source document extension the publisher accepts.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Base name `B` of a document: the filename with its extension removed once.
///
/// - `lecture-notes.ipynb` → `lecture-notes`
/// - `my.notes.ipynb` → `my.notes` (only the last extension is stripped)
pub fn document_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Whether a path carries the notebook extension (case-insensitive).
pub fn is_notebook(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(NOTEBOOK_EXTENSION))
        .unwrap_or(false)
}

/// Filename of the rendered post: `B.md`.
pub fn post_filename(stem: &str) -> String {
    format!("{stem}.md")
}

/// Directory name of the asset bundle: `B_files`.
///
/// This is the converter's own naming scheme for extracted images; the
/// publisher keeps it verbatim so image links inside the rendered markdown
/// stay valid after relocation.
pub fn asset_dirname(stem: &str) -> String {
    format!("{stem}_files")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_notebook_extension() {
        assert_eq!(
            document_stem(Path::new("lecture-notes.ipynb")),
            Some("lecture-notes")
        );
    }

    #[test]
    fn stem_strips_only_the_last_extension() {
        assert_eq!(document_stem(Path::new("my.notes.ipynb")), Some("my.notes"));
    }

    #[test]
    fn stem_of_nested_path_ignores_directories() {
        assert_eq!(
            document_stem(Path::new("drafts/2026/notes.ipynb")),
            Some("notes")
        );
    }

    #[test]
    fn stem_without_extension_is_the_whole_name() {
        assert_eq!(document_stem(Path::new("notes")), Some("notes"));
    }

    #[test]
    fn notebook_extension_matches() {
        assert!(is_notebook(Path::new("notes.ipynb")));
    }

    #[test]
    fn notebook_extension_is_case_insensitive() {
        assert!(is_notebook(Path::new("notes.IPYNB")));
    }

    #[test]
    fn markdown_is_not_a_notebook() {
        assert!(!is_notebook(Path::new("notes.md")));
    }

    #[test]
    fn extensionless_path_is_not_a_notebook() {
        assert!(!is_notebook(Path::new("notes")));
    }

    #[test]
    fn post_filename_appends_md() {
        assert_eq!(post_filename("lecture-notes"), "lecture-notes.md");
    }

    #[test]
    fn asset_dirname_appends_files_suffix() {
        assert_eq!(asset_dirname("lecture-notes"), "lecture-notes_files");
    }

    #[test]
    fn dotted_stem_keeps_inner_dots_in_derived_names() {
        assert_eq!(post_filename("my.notes"), "my.notes.md");
        assert_eq!(asset_dirname("my.notes"), "my.notes_files");
    }
}
