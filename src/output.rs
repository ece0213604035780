//! CLI output formatting for build and check reports.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every project is its semantic identity — positional index, display
//! name, and visibility flags — with filesystem paths shown as secondary
//! context via indented `Source:` lines. This makes the output readable as a
//! portfolio inventory while still letting users trace entries back to
//! specific directories.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Projects
//! 001 Alpha One → alpha-one.html
//!     Source: project_descriptions/alpha/
//!     Preview: images/alpha-one.png
//! 002 Beta (private)
//!     Source: project_descriptions/beta/
//!
//! Pages
//!     index.html (1 featured)
//!     portfolio.html (1 public)
//!     about.html (no canonical project)
//!
//! Built 1 project pages, 3 listing pages
//! ```
//!
//! ## Check
//!
//! ```text
//! Projects
//! 001 Alpha One (featured)
//!     Source: project_descriptions/alpha/
//!     Preview: image-400x200px.png
//! 002 Beta (private)
//!     Source: project_descriptions/beta/
//!
//! 2 projects: 1 public, 1 featured, canonical: none
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. The build
//! report is derived entirely from the loaded portfolio; the check report
//! additionally peeks at each project directory for a source preview image,
//! since check runs before anything is staged.

use crate::load::{PREVIEW_IMAGE_FNAME, Portfolio, Project};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Visibility markers appended to a project's header line.
///
/// ```text
/// ""                      // public, nothing special
/// " (featured)"           // public and featured
/// " (private)"            // not public
/// " (private, canonical)" // not public, flagged is_jicbioimage
/// ```
fn flag_markers(project: &Project) -> String {
    let mut flags = Vec::new();
    if !project.info.public {
        flags.push("private");
    } else if project.info.featured {
        flags.push("featured");
    }
    if project.info.is_jicbioimage {
        flags.push("canonical");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!(" ({})", flags.join(", "))
    }
}

/// Project header: positional index + name + markers, plus the page URL for
/// projects that get one.
fn project_header(index: usize, project: &Project) -> String {
    let markers = flag_markers(project);
    if project.info.public {
        format!(
            "{} {}{} \u{2192} {}",
            format_index(index),
            project.info.name,
            markers,
            project.url
        )
    } else {
        format!("{} {}{}", format_index(index), project.info.name, markers)
    }
}

// ============================================================================
// Build report
// ============================================================================

/// Format the build report: every project with its source directory and
/// staged preview, then the listing pages with their entry counts.
pub fn format_build_output(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (i, project) in portfolio.projects.iter().enumerate() {
        lines.push(project_header(i + 1, project));
        lines.push(format!("    Source: {}/", project.directory.display()));
        if let Some(ref fpath) = project.image_fpath {
            lines.push(format!("    Preview: {}", fpath));
        }
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    lines.push(format!(
        "    index.html ({} featured)",
        portfolio.featured().len()
    ));
    lines.push(format!(
        "    portfolio.html ({} public)",
        portfolio.public().len()
    ));
    match portfolio.canonical() {
        Some(project) => lines.push(format!("    about.html ({})", project.info.name)),
        None => lines.push("    about.html (no canonical project)".to_string()),
    }

    lines.push(String::new());
    lines.push(format!(
        "Built {} project pages, 3 listing pages",
        portfolio.public().len()
    ));

    lines
}

/// Print the build report to stdout.
pub fn print_build_output(portfolio: &Portfolio) {
    for line in format_build_output(portfolio) {
        println!("{}", line);
    }
}

// ============================================================================
// Check report
// ============================================================================

/// Format the check report: every project with its flags, source directory,
/// and whether a preview image is present, then a one-line summary.
pub fn format_check_output(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (i, project) in portfolio.projects.iter().enumerate() {
        lines.push(format!(
            "{} {}{}",
            format_index(i + 1),
            project.info.name,
            flag_markers(project)
        ));
        lines.push(format!("    Source: {}/", project.directory.display()));
        if project.directory.join(PREVIEW_IMAGE_FNAME).is_file() {
            lines.push(format!("    Preview: {}", PREVIEW_IMAGE_FNAME));
        }
    }

    let canonical = portfolio
        .canonical()
        .map(|p| p.info.name.as_str())
        .unwrap_or("none");
    lines.push(String::new());
    lines.push(format!(
        "{} projects: {} public, {} featured, canonical: {}",
        portfolio.projects.len(),
        portfolio.public().len(),
        portfolio.featured().len(),
        canonical
    ));

    lines
}

/// Print the check report to stdout.
pub fn print_check_output(portfolio: &Portfolio) {
    for line in format_check_output(portfolio) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
