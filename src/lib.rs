//! # nbpress
//!
//! Publish Jupyter notebooks as static-site blog posts. One notebook in,
//! one post out: the notebook is rendered to markdown by an external
//! converter, then the rendered post and its extracted image assets are
//! relocated into the site's content tree under the document's base name.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! notes.ipynb  →  convert (tempdir)  →  posts/notes.md
//!                                    →  assets/notes_files/
//! ```
//!
//! There is deliberately no more machinery than that: no dependency graph,
//! no caching, no concurrency. Each invocation processes one document start
//! to finish and is idempotent at the filesystem level — re-publishing a
//! base name replaces the prior post and asset bundle at the same two
//! destination paths instead of accumulating duplicates.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`publish`] | The pipeline — validate source, convert, relocate post and assets, report |
//! | [`convert`] | The external converter seam: [`convert::Converter`] trait plus the `jupyter nbconvert` implementation |
//! | [`relocate`] | Overwriting file/directory moves into the site tree, with cross-filesystem fallback |
//! | [`naming`] | `B` → `B.md` / `B_files` destination naming, derived in one place |
//! | [`config`] | `nbpress.toml` loading, validation, and the stock config text |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## The Converter Is a Capability, Not a Library
//!
//! Rendering notebooks is an enormous problem this tool refuses to own.
//! [`convert::Converter`] has exactly one operation; the production
//! implementation shells out to `jupyter nbconvert --to markdown` and only
//! inspects whether the promised artifacts exist afterward. Anything that
//! satisfies the same contract (a different renderer, a wrapper script, the
//! test mock) drops in without touching the publisher.
//!
//! ## Conversion Runs in a Private Tempdir
//!
//! The converter writes into a fresh temp directory rather than the
//! invocation cwd. A failed conversion therefore leaves zero artifacts
//! anywhere, and a successful one hands the publisher files nothing else is
//! looking at before they are moved into place.
//!
//! ## Last Write Wins, Loudly Enough
//!
//! Publishing into an occupied destination replaces the prior post or
//! bundle wholesale — never a merge, never an error. That is what
//! re-publishing means. The success output carries a
//! `(replaced existing …)` notice per artifact so a base-name collision is
//! at least visible in the terminal.
//!
//! ## The Publisher Never Creates the Site Layout
//!
//! The posts and assets directories belong to the static site, not to this
//! tool. If a destination is missing the run fails with a relocation error
//! naming the artifact that could not land, instead of silently growing a
//! directory tree the site generator never asked for.

pub mod config;
pub mod convert;
pub mod naming;
pub mod output;
pub mod publish;
pub mod relocate;

#[cfg(test)]
pub(crate) mod test_helpers;
