//! The external conversion capability.
//!
//! The [`Converter`] trait defines the one operation the publisher needs:
//! render a notebook into markdown (plus an optional asset directory) in a
//! given working directory. The publisher depends only on this contract,
//! so alternative converters can be substituted without changing it.
//!
//! The production implementation is [`Nbconvert`], which shells out to
//! `jupyter nbconvert --to markdown`. The converter is treated as one
//! atomic external call: the publisher does not interpret its internals,
//! only whether the expected artifacts exist afterward.

use crate::config::ConverterConfig;
use crate::naming;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not launch converter '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("converter exited with status {code:?}")]
    Failed { code: Option<i32> },
    #[error("converter reported success but produced no markdown at {0}")]
    MissingOutput(PathBuf),
}

/// Artifacts a successful conversion produced in the workdir.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rendered `B.md`.
    pub post: PathBuf,
    /// The `B_files/` directory, present only if the document embedded images.
    pub assets: Option<PathBuf>,
}

/// One conversion request.
#[derive(Debug)]
pub struct ConvertRequest<'a> {
    /// Source notebook path.
    pub notebook: &'a Path,
    /// Base name `B`; output artifacts are `B.md` and `B_files/`.
    pub stem: &'a str,
    /// Directory the converter writes into.
    pub workdir: &'a Path,
}

/// Trait for notebook-to-markdown converters.
pub trait Converter {
    /// Render the notebook into the workdir and report what was produced.
    fn convert(&self, request: &ConvertRequest) -> Result<Conversion, ConvertError>;

    /// Whether the converter can run at all on this machine.
    fn is_available(&self) -> bool;

    /// Human-readable label for status output.
    fn name(&self) -> String;
}

/// Production converter: `<program> nbconvert --to markdown`.
pub struct Nbconvert {
    program: String,
    extra_args: Vec<String>,
}

impl Nbconvert {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            program: config.program.clone(),
            extra_args: config.extra_args.clone(),
        }
    }
}

impl Converter for Nbconvert {
    fn convert(&self, request: &ConvertRequest) -> Result<Conversion, ConvertError> {
        let status = Command::new(&self.program)
            .arg("nbconvert")
            .arg("--to")
            .arg("markdown")
            .arg("--output-dir")
            .arg(request.workdir)
            .arg(request.notebook)
            .args(&self.extra_args)
            .stdout(Stdio::null())
            .stderr(Stdio::inherit()) // nbconvert's own diagnostics reach the operator
            .status()
            .map_err(|source| ConvertError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ConvertError::Failed {
                code: status.code(),
            });
        }

        let post = request.workdir.join(naming::post_filename(request.stem));
        if !post.is_file() {
            return Err(ConvertError::MissingOutput(post));
        }
        let asset_dir = request.workdir.join(naming::asset_dirname(request.stem));
        let assets = asset_dir.is_dir().then_some(asset_dir);

        Ok(Conversion { post, assets })
    }

    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("nbconvert")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn name(&self) -> String {
        format!("{} nbconvert", self.program)
    }
}
