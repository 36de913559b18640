//! CLI output formatting.
//!
//! Every report has a `format_*` function returning `Vec<String>`
//! (pure, no I/O, unit-testable) and a thin `print_*` wrapper that writes to
//! stdout. The display is information-first: the post's title leads, with
//! filesystem destinations as indented context lines.
//!
//! ```text
//! Published Lecture Notes
//!     Post: posts/lecture-notes.md
//!     Assets: assets/lecture-notes_files (2 files)
//! ```
//!
//! Replacements are surfaced as a parenthetical notice on the artifact line
//! rather than hidden (the reference behavior) or promoted to a warning —
//! re-publication is this tool's normal mode of operation.

use crate::publish::{CheckReport, PublishReport};

/// Title of a rendered post: the first `# heading` line, if any.
pub fn first_heading(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line[2..].trim().to_string())
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{n} files")
    }
}

/// Format the success acknowledgment for a publish run.
pub fn format_publish_report(report: &PublishReport) -> Vec<String> {
    let mut lines = Vec::new();

    let fallback = report
        .post
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = report.title.as_deref().unwrap_or(&fallback);
    lines.push(format!("Published {title}"));

    let mut post_line = format!("    Post: {}", report.post.path.display());
    if report.post.replaced {
        post_line.push_str(" (replaced existing post)");
    }
    lines.push(post_line);

    match &report.assets {
        Some(moved) => {
            let mut asset_line = format!(
                "    Assets: {} ({})",
                moved.path.display(),
                count_label(report.asset_count)
            );
            if moved.replaced {
                asset_line.push_str(" (replaced existing bundle)");
            }
            lines.push(asset_line);
        }
        None => lines.push("    Assets: none".to_string()),
    }

    lines
}

/// Format the layout status lines for a check run.
pub fn format_check_report(report: &CheckReport) -> Vec<String> {
    let status = |ok: bool| if ok { "ok" } else { "missing" };
    vec![
        format!("Checking {}", report.source.display()),
        "    Source: ok".to_string(),
        format!(
            "    Posts directory: {} ({})",
            report.posts_dir.display(),
            status(report.posts_dir_ok)
        ),
        format!(
            "    Assets directory: {} ({})",
            report.assets_dir.display(),
            status(report.assets_dir_ok)
        ),
        format!(
            "    Converter: {} ({})",
            report.converter,
            if report.converter_ok {
                "available"
            } else {
                "not available"
            }
        ),
    ]
}

pub fn print_publish_report(report: &PublishReport) {
    for line in format_publish_report(report) {
        println!("{line}");
    }
}

pub fn print_check_report(report: &CheckReport) {
    for line in format_check_report(report) {
        println!("{line}");
    }
}
