//! HTML page rendering.
//!
//! Stage 3 of the folio-gen build pipeline. Loads every `*.html` file under
//! the templates root into a Tera environment and renders the site: one page
//! per public project plus the three listing pages.
//!
//! ## Pages
//!
//! | Template         | Output           | Context                           |
//! |------------------|------------------|-----------------------------------|
//! | `project.html`   | `<slug>.html`    | `project`: one public project     |
//! | `index.html`     | `index.html`     | `projects`: featured projects     |
//! | `portfolio.html` | `portfolio.html` | `projects`: all public projects   |
//! | `about.html`     | `about.html`     | `projects`: canonical project, if |
//! |                  |                  | any (zero or one entries)         |
//!
//! Listing templates always receive a `projects` array, so they can render an
//! empty state instead of failing when nothing matches. Private projects
//! never reach any context. Values render verbatim — metadata and templates
//! come from the same author, so nothing is HTML-escaped and staged paths
//! like `images/<slug>.png` survive untouched.
//!
//! Because the whole templates root is loaded, templates can `{% include %}`
//! or `{% extends %}` shared `.html` partials freely. The `css/` and
//! `images/` support directories are copied by [`crate::assets`], not
//! rendered.

use crate::load::{Portfolio, Project};
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Templates directory not found: {0}")]
    MissingTemplatesDir(PathBuf),
}

/// Per-project page template, rendered once per public project.
pub const PROJECT_TEMPLATE: &str = "project.html";
/// Landing page template, fed the featured projects.
pub const INDEX_TEMPLATE: &str = "index.html";
/// Full listing template, fed all public projects.
pub const PORTFOLIO_TEMPLATE: &str = "portfolio.html";
/// About page template, fed the canonical project when one exists.
pub const ABOUT_TEMPLATE: &str = "about.html";

/// Render all pages for a loaded portfolio into the output root.
pub fn render_site(
    portfolio: &Portfolio,
    templates_root: &Path,
    output_root: &Path,
) -> Result<(), RenderError> {
    let tera = load_templates(templates_root)?;
    fs::create_dir_all(output_root)?;

    for project in portfolio.public() {
        let mut context = Context::new();
        context.insert("project", project);
        let html = tera.render(PROJECT_TEMPLATE, &context)?;
        fs::write(output_root.join(&project.url), html)?;
    }

    render_listing(&tera, INDEX_TEMPLATE, &portfolio.featured(), output_root)?;
    render_listing(&tera, PORTFOLIO_TEMPLATE, &portfolio.public(), output_root)?;

    let canonical: Vec<&Project> = portfolio.canonical().into_iter().collect();
    render_listing(&tera, ABOUT_TEMPLATE, &canonical, output_root)?;

    Ok(())
}

/// Load every `*.html` under the templates root into a Tera environment.
///
/// Template names are relative to the root, so `templates/project.html`
/// is addressed as `project.html`. A syntax error in any template fails
/// loading; a missing templates root is reported as its own error rather
/// than an empty environment.
pub fn load_templates(templates_root: &Path) -> Result<Tera, RenderError> {
    if !templates_root.is_dir() {
        return Err(RenderError::MissingTemplatesDir(
            templates_root.to_path_buf(),
        ));
    }
    let glob = format!("{}/**/*.html", templates_root.display());
    let mut tera = Tera::new(&glob)?;
    // The site author owns both the templates and the metadata, and Tera's
    // HTML escaping would mangle slash-bearing values like image paths.
    tera.autoescape_on(vec![]);
    Ok(tera)
}

/// Render one listing template with a `projects` array and write it out
/// under the same name as the template.
fn render_listing(
    tera: &Tera,
    template: &str,
    projects: &[&Project],
    output_root: &Path,
) -> Result<(), RenderError> {
    let mut context = Context::new();
    context.insert("projects", projects);
    let html = tera.render(template, &context)?;
    fs::write(output_root.join(template), html)?;
    Ok(())
}
