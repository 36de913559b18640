//! Shared test utilities for the nbpress test suite.
//!
//! [`SiteFixture`] builds the filesystem layout one publish run expects:
//! a temp root holding a source notebook and the two (initially empty)
//! destination directories. Tests get an isolated tree they can mutate
//! freely.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::convert::Converter;
use crate::publish::{self, PublishError, PublishReport};

pub struct SiteFixture {
    tmp: TempDir,
    /// Source notebook path (`<stem>.ipynb` in the fixture root).
    pub notebook: PathBuf,
    /// Posts destination directory, created empty.
    pub posts: PathBuf,
    /// Assets destination directory, created empty.
    pub assets: PathBuf,
}

impl SiteFixture {
    /// Build a fixture with a notebook named `<stem>.ipynb` and empty
    /// `posts/` and `assets/` destinations.
    pub fn new(stem: &str) -> Self {
        let tmp = TempDir::new().unwrap();
        let notebook = tmp.path().join(format!("{stem}.ipynb"));
        // the publisher only checks existence and extension, never content
        fs::write(&notebook, "{\"cells\": []}").unwrap();
        let posts = tmp.path().join("posts");
        let assets = tmp.path().join("assets");
        fs::create_dir(&posts).unwrap();
        fs::create_dir(&assets).unwrap();
        Self {
            tmp,
            notebook,
            posts,
            assets,
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    /// Drop another notebook into the fixture root and return its path.
    pub fn add_notebook(&self, stem: &str) -> PathBuf {
        let path = self.tmp.path().join(format!("{stem}.ipynb"));
        fs::write(&path, "{\"cells\": []}").unwrap();
        path
    }

    /// Publish the fixture's notebook into its destinations.
    pub fn publish(&self, converter: &dyn Converter) -> Result<PublishReport, PublishError> {
        publish::publish(&self.notebook, &self.posts, &self.assets, converter)
    }

    /// True when neither destination holds any entry.
    pub fn destinations_empty(&self) -> bool {
        fs::read_dir(&self.posts).unwrap().count() == 0
            && fs::read_dir(&self.assets).unwrap().count() == 0
    }
}
