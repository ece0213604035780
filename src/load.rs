//! Project discovery and metadata loading.
//!
//! Stage 2 of the folio-gen build pipeline. Scans the projects root to
//! discover project directories, parses their metadata records, and stages
//! preview images into the output, producing a [`Portfolio`] that the render
//! stage consumes.
//!
//! ## Directory Structure
//!
//! Every immediate subdirectory of the projects root is one project:
//!
//! ```text
//! project_descriptions/            # Projects root
//! ├── alpha/
//! │   ├── project.yml              # Metadata record (required)
//! │   └── image-400x200px.png      # Preview image (optional)
//! ├── beta/
//! │   └── project.yml
//! └── notes.txt                    # Plain files are ignored
//! ```
//!
//! ## Metadata Record
//!
//! ```yaml
//! name: Alpha One          # Required display name
//! public: true             # Listed and rendered (default: false)
//! featured: true           # Shown on the index page (default: false)
//! is_jicbioimage: false    # Marks the canonical project (default: false)
//! synopsis: Any other keys are kept verbatim for templates
//! ```
//!
//! The project's slug is derived from `name` (see [`crate::slug`]), and its
//! page URL is `<slug>.html`. Projects are ordered by slug so listings and
//! reports are stable regardless of filesystem enumeration order.
//!
//! ## Preview Staging
//!
//! A project directory may carry an `image-400x200px.png` preview. Staging
//! copies it to `<output>/images/<slug>.png` and records the site-relative
//! path on the project; projects without a preview keep `image_fpath = None`
//! so templates can fall back.
//!
//! ## Validation
//!
//! The loader enforces these rules:
//! - Every project directory must hold a readable, well-formed `project.yml`
//!   with a `name`
//! - Every name must normalize to a non-empty slug
//! - No two projects may share a slug
//! - At most one project may be flagged `is_jicbioimage`

use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Projects directory not found: {0}")]
    MissingProjectsRoot(PathBuf),
    #[error("Cannot read metadata file {0}: {1}")]
    MetadataRead(PathBuf, std::io::Error),
    #[error("Malformed metadata in {0}: {1}")]
    MetadataParse(PathBuf, serde_yaml::Error),
    #[error("Project name {0:?} in {1} has no slug content")]
    EmptySlug(String, PathBuf),
    #[error("Duplicate slug {0:?} for {1} and {2}")]
    DuplicateSlug(String, PathBuf, PathBuf),
    #[error("Multiple projects are flagged is_jicbioimage: {0} and {1}")]
    MultipleCanonical(PathBuf, PathBuf),
}

/// Metadata file looked up in every project directory.
pub const PROJECT_INFO_FNAME: &str = "project.yml";
/// Optional preview image looked up next to the metadata file.
pub const PREVIEW_IMAGE_FNAME: &str = "image-400x200px.png";
/// Subdirectory of the output root that staged previews land in.
pub const IMAGES_DIR: &str = "images";

/// Parsed `project.yml` record.
///
/// The three visibility flags default to `false` when absent. Every key
/// beyond the recognized ones is preserved in `extra` and reaches templates
/// unchanged, so records can carry free-form fields (synopsis, links, ...)
/// without code changes here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Display name; also the source of the slug.
    pub name: String,
    /// Whether the project is listed and gets its own page.
    #[serde(default)]
    pub public: bool,
    /// Whether the project appears on the index page.
    #[serde(default)]
    pub featured: bool,
    /// Marks the canonical project featured on the about page.
    #[serde(default)]
    pub is_jicbioimage: bool,
    /// All unrecognized keys, verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// One portfolio entry: a project directory plus everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Source directory, with any trailing separator stripped.
    pub directory: PathBuf,
    /// Parsed metadata record.
    pub info: ProjectInfo,
    /// URL-safe token derived from the name.
    pub slug: String,
    /// Site-relative page URL, `<slug>.html`.
    pub url: String,
    /// Site-relative path of the staged preview (`images/<slug>.png`), or
    /// `None` when the project has no preview or staging has not run.
    pub image_fpath: Option<String>,
}

/// All loaded projects, ordered by slug.
#[derive(Debug, Serialize)]
pub struct Portfolio {
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Projects marked `public: true`, in slug order.
    pub fn public(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.info.public).collect()
    }

    /// Public projects additionally marked `featured: true`, in slug order.
    pub fn featured(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.info.public && p.info.featured)
            .collect()
    }

    /// The project flagged `is_jicbioimage: true`, if any.
    ///
    /// Loading guarantees at most one. The flag is independent of `public`:
    /// a private project can still be the canonical one.
    pub fn canonical(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.info.is_jicbioimage)
    }
}

/// Scan the projects root and stage preview images into the output.
///
/// Equivalent to [`scan_projects`] followed by [`stage_previews`]; this is
/// what a full build runs.
pub fn load_projects(projects_root: &Path, output_root: &Path) -> Result<Portfolio, LoadError> {
    let mut portfolio = scan_projects(projects_root)?;
    stage_previews(&mut portfolio, output_root)?;
    Ok(portfolio)
}

/// Discover, parse, and validate all projects without touching the output.
///
/// Every immediate subdirectory of `projects_root` is loaded; plain files
/// and hidden directories are ignored. The returned portfolio is sorted by
/// slug, with duplicate slugs and duplicate canonical flags rejected.
pub fn scan_projects(projects_root: &Path) -> Result<Portfolio, LoadError> {
    if !projects_root.is_dir() {
        return Err(LoadError::MissingProjectsRoot(projects_root.to_path_buf()));
    }

    let mut project_dirs: Vec<PathBuf> = fs::read_dir(projects_root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_dir()
                && p.file_name()
                    .map(|n| !n.to_string_lossy().starts_with('.'))
                    .unwrap_or(false)
        })
        .collect();
    project_dirs.sort();

    let mut projects = Vec::new();
    for dir in &project_dirs {
        projects.push(load_project(dir)?);
    }
    projects.sort_by(|a, b| a.slug.cmp(&b.slug));

    validate_slugs(&projects)?;
    validate_canonical(&projects)?;

    Ok(Portfolio { projects })
}

/// Copy each project's preview image to `<output>/images/<slug>.png`.
///
/// Projects without a preview file are left with `image_fpath = None`.
/// Private projects are staged too — visibility only gates page rendering.
pub fn stage_previews(portfolio: &mut Portfolio, output_root: &Path) -> Result<(), LoadError> {
    let images_dir = output_root.join(IMAGES_DIR);
    fs::create_dir_all(&images_dir)?;

    for project in &mut portfolio.projects {
        let source = project.directory.join(PREVIEW_IMAGE_FNAME);
        if !source.is_file() {
            continue;
        }
        fs::copy(&source, images_dir.join(format!("{}.png", project.slug)))?;
        project.image_fpath = Some(format!("{IMAGES_DIR}/{}.png", project.slug));
    }
    Ok(())
}

/// Load a single project directory into a [`Project`] record.
fn load_project(directory: &Path) -> Result<Project, LoadError> {
    // Strip trailing separators so the directory compares and displays cleanly.
    let directory: PathBuf = directory.components().collect();

    let info_path = directory.join(PROJECT_INFO_FNAME);
    let content = fs::read_to_string(&info_path)
        .map_err(|e| LoadError::MetadataRead(info_path.clone(), e))?;
    let info: ProjectInfo =
        serde_yaml::from_str(&content).map_err(|e| LoadError::MetadataParse(info_path, e))?;

    let slug = slugify(&info.name);
    if slug.is_empty() {
        return Err(LoadError::EmptySlug(info.name, directory));
    }
    let url = format!("{slug}.html");

    Ok(Project {
        directory,
        info,
        slug,
        url,
        image_fpath: None,
    })
}

/// Reject slug collisions. Projects must already be sorted by slug, so any
/// collision sits in an adjacent pair.
fn validate_slugs(projects: &[Project]) -> Result<(), LoadError> {
    for pair in projects.windows(2) {
        if pair[0].slug == pair[1].slug {
            return Err(LoadError::DuplicateSlug(
                pair[0].slug.clone(),
                pair[0].directory.clone(),
                pair[1].directory.clone(),
            ));
        }
    }
    Ok(())
}

/// Reject portfolios with more than one `is_jicbioimage` project.
fn validate_canonical(projects: &[Project]) -> Result<(), LoadError> {
    let mut canonical = projects.iter().filter(|p| p.info.is_jicbioimage);
    if let (Some(first), Some(second)) = (canonical.next(), canonical.next()) {
        return Err(LoadError::MultipleCanonical(
            first.directory.clone(),
            second.directory.clone(),
        ));
    }
    Ok(())
}
