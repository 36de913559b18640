use clap::{Parser, Subcommand};
use nbpress::{config, convert, output, publish};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "nbpress")]
#[command(about = "Publish Jupyter notebooks as static-site blog posts")]
#[command(long_about = "\
Publish Jupyter notebooks as static-site blog posts

Each run converts one notebook to markdown (via jupyter nbconvert) and
relocates the results into the site's content tree, named after the
notebook's base name B:

  posts/B.md            # the rendered post
  assets/B_files/       # extracted images, if the notebook embeds any

Both destination directories must already exist — they belong to the
static site, not to this tool. Re-publishing the same base name replaces
the prior post and bundle (last write wins).

Configuration is read from ./nbpress.toml when present; --posts-dir and
--assets-dir override it. Run 'nbpress gen-config' for a documented
config file.

Exit codes: 0 success, 2 source invalid, 3 conversion failed,
4 relocation failed, 1 anything else.")]
#[command(version = version_string())]
struct Cli {
    /// Directory for published post files (overrides config)
    #[arg(long, global = true)]
    posts_dir: Option<PathBuf>,

    /// Directory for published asset bundles (overrides config)
    #[arg(long, global = true)]
    assets_dir: Option<PathBuf>,

    /// Config file path (default: ./nbpress.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a notebook and relocate the post and asset bundle
    Publish {
        /// Source notebook (.ipynb)
        notebook: PathBuf,
    },
    /// Validate the source and destination layout without publishing
    Check {
        /// Source notebook (.ipynb)
        notebook: PathBuf,
    },
    /// Print a stock nbpress.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::from(1);
        }
    };
    let posts_dir = cli
        .posts_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.posts_dir));
    let assets_dir = cli
        .assets_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.assets_dir));
    let converter = convert::Nbconvert::new(&config.converter);

    match cli.command {
        Command::Publish { notebook } => {
            match publish::publish(&notebook, &posts_dir, &assets_dir, &converter) {
                Ok(report) => {
                    output::print_publish_report(&report);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::from(failure_code(&err))
                }
            }
        }
        Command::Check { notebook } => {
            match publish::check(&notebook, &posts_dir, &assets_dir, &converter) {
                Ok(report) => {
                    output::print_check_report(&report);
                    if report.all_ok() {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(1)
                    }
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::from(failure_code(&err))
                }
            }
        }
        Command::GenConfig => unreachable!("handled before config load"),
    }
}

fn load_config(cli: &Cli) -> Result<config::PublishConfig, config::ConfigError> {
    match &cli.config {
        Some(path) => config::load(path),
        None => config::load_from_dir(Path::new(".")),
    }
}

/// Exit code per failure stage: 2 source, 3 conversion, 4 relocation.
fn failure_code(err: &publish::PublishError) -> u8 {
    use publish::PublishError::*;
    match err {
        SourceNotFound(_) | NotANotebook(_) => 2,
        Workdir(_) | Conversion(_) => 3,
        PostRelocation(_) | AssetRelocation { .. } => 4,
    }
}
