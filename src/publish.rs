//! The publishing pipeline.
//!
//! One document per invocation, strictly linear: validate the source,
//! convert it in a private temp workdir, move the rendered post into the
//! posts directory, move the asset bundle (if any) into the assets
//! directory, report the outcome. No caching, no retries, no state between
//! runs.
//!
//! ## Failure points
//!
//! Each stage fails distinctly and nothing downstream runs:
//!
//! - source invalid → nothing is touched
//! - conversion fails → the temp workdir evaporates, destinations untouched
//! - post relocation fails → destinations untouched
//! - asset relocation fails → the post is already published; the error
//!   says so explicitly rather than masking the partial completion
//!
//! ## Overwrite policy
//!
//! Re-publishing a base name replaces the prior post and bundle wholesale
//! (last write wins). The [`PublishReport`] carries `replaced` flags so the
//! output layer can surface the replacement as a notice.

use crate::convert::{ConvertError, ConvertRequest, Converter};
use crate::naming;
use crate::output;
use crate::relocate::{self, Moved, RelocateError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("source notebook not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("not a notebook document (expected .ipynb): {0}")]
    NotANotebook(PathBuf),
    #[error("could not create conversion workdir: {0}")]
    Workdir(#[source] std::io::Error),
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConvertError),
    #[error("could not publish post: {0}")]
    PostRelocation(#[source] RelocateError),
    #[error("post published to {post}, but asset relocation failed: {source}")]
    AssetRelocation {
        post: PathBuf,
        #[source]
        source: RelocateError,
    },
}

/// Outcome of a successful publish run.
#[derive(Debug)]
pub struct PublishReport {
    /// The relocated post.
    pub post: Moved,
    /// The relocated asset bundle, if the document embedded images.
    pub assets: Option<Moved>,
    /// Title from the first `# heading` of the rendered markdown.
    pub title: Option<String>,
    /// Number of files in the relocated bundle.
    pub asset_count: usize,
}

/// Outcome of a `check` run: layout status, nothing moved.
#[derive(Debug)]
pub struct CheckReport {
    pub source: PathBuf,
    pub posts_dir: PathBuf,
    pub posts_dir_ok: bool,
    pub assets_dir: PathBuf,
    pub assets_dir_ok: bool,
    pub converter: String,
    pub converter_ok: bool,
}

impl CheckReport {
    pub fn all_ok(&self) -> bool {
        self.posts_dir_ok && self.assets_dir_ok && self.converter_ok
    }
}

/// Validate the source path and derive its base name.
fn resolve_source(source: &Path) -> Result<String, PublishError> {
    if !source.is_file() {
        return Err(PublishError::SourceNotFound(source.to_path_buf()));
    }
    if !naming::is_notebook(source) {
        return Err(PublishError::NotANotebook(source.to_path_buf()));
    }
    naming::document_stem(source)
        .map(str::to_string)
        .ok_or_else(|| PublishError::NotANotebook(source.to_path_buf()))
}

/// Publish one notebook: convert, then relocate the post and asset bundle.
///
/// Both destination directories must already exist. Re-running with the
/// same source replaces the prior artifacts at the same two paths.
pub fn publish(
    source: &Path,
    posts_dir: &Path,
    assets_dir: &Path,
    converter: &dyn Converter,
) -> Result<PublishReport, PublishError> {
    let stem = resolve_source(source)?;

    // Convert into a private workdir: a failed conversion leaves nothing
    // behind anywhere, and a successful one hands us artifacts nobody else
    // is looking at.
    let workdir = tempfile::tempdir().map_err(PublishError::Workdir)?;
    let conversion = converter.convert(&ConvertRequest {
        notebook: source,
        stem: &stem,
        workdir: workdir.path(),
    })?;

    // Title is cosmetic; an unreadable post body just means no title line.
    let title = fs::read_to_string(&conversion.post)
        .ok()
        .and_then(|md| output::first_heading(&md));

    let post = relocate::move_file(&conversion.post, posts_dir, &naming::post_filename(&stem))
        .map_err(PublishError::PostRelocation)?;

    let (assets, asset_count) = match conversion.assets {
        Some(bundle) => {
            let moved = relocate::move_dir(&bundle, assets_dir, &naming::asset_dirname(&stem))
                .map_err(|source| PublishError::AssetRelocation {
                    post: post.path.clone(),
                    source,
                })?;
            let count = relocate::file_count(&moved.path);
            (Some(moved), count)
        }
        None => (None, 0),
    };

    Ok(PublishReport {
        post,
        assets,
        title,
        asset_count,
    })
}

/// Validate the source and destination layout without converting or moving.
pub fn check(
    source: &Path,
    posts_dir: &Path,
    assets_dir: &Path,
    converter: &dyn Converter,
) -> Result<CheckReport, PublishError> {
    resolve_source(source)?;

    Ok(CheckReport {
        source: source.to_path_buf(),
        posts_dir: posts_dir.to_path_buf(),
        posts_dir_ok: posts_dir.is_dir(),
        assets_dir: assets_dir.to_path_buf(),
        assets_dir_ok: assets_dir.is_dir(),
        converter: converter.name(),
        converter_ok: converter.is_available(),
    })
}
