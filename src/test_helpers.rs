//! Shared test utilities for the folio-gen test suite.
//!
//! Provides a site fixture scaffold plus lookup helpers for loaded
//! portfolios, so pipeline tests don't repeat setup boilerplate.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_site();
//! site.add_project("alpha", "name: Alpha One\npublic: true\n");
//! site.add_preview("alpha", b"png bytes");
//!
//! let portfolio = crate::site::build(&site.config()).unwrap();
//! let alpha = find_project(&portfolio, "alpha-one");
//! assert_eq!(alpha.url, "alpha-one.html");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::BuildConfig;
use crate::load::{PREVIEW_IMAGE_FNAME, PROJECT_INFO_FNAME, Portfolio, Project};

// =========================================================================
// Fixture setup
// =========================================================================

/// A complete site source tree in a temp directory: an empty projects root
/// plus a templates root holding the four stock page templates and both
/// support directories. Dropped with the fixture.
pub struct SiteFixture {
    pub dir: TempDir,
}

/// Scaffold a fresh site source tree.
pub fn setup_site() -> SiteFixture {
    let fixture = SiteFixture {
        dir: TempDir::new().unwrap(),
    };
    fs::create_dir_all(fixture.projects_root()).unwrap();
    write_stock_templates(&fixture.templates_root());
    fixture
}

impl SiteFixture {
    pub fn projects_root(&self) -> PathBuf {
        self.dir.path().join("project_descriptions")
    }

    pub fn templates_root(&self) -> PathBuf {
        self.dir.path().join("templates")
    }

    pub fn output_root(&self) -> PathBuf {
        self.dir.path().join("build")
    }

    /// Build config pointing at this fixture's three roots.
    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            projects_root: self.projects_root(),
            templates_root: self.templates_root(),
            output_root: self.output_root(),
        }
    }

    /// Add a project directory holding the given metadata record.
    pub fn add_project(&self, dir_name: &str, yaml: &str) -> PathBuf {
        let dir = self.projects_root().join(dir_name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PROJECT_INFO_FNAME), yaml).unwrap();
        dir
    }

    /// Drop a preview image into an existing project directory.
    pub fn add_preview(&self, dir_name: &str, bytes: &[u8]) {
        fs::write(
            self.projects_root().join(dir_name).join(PREVIEW_IMAGE_FNAME),
            bytes,
        )
        .unwrap();
    }
}

/// Write the four stock page templates plus `css/` and `images/` support
/// directories under `templates_root`.
pub fn write_stock_templates(templates_root: &Path) {
    fs::create_dir_all(templates_root).unwrap();
    fs::write(
        templates_root.join("project.html"),
        "<!doctype html>\n\
         <title>{{ project.info.name }}</title>\n\
         <h1>{{ project.info.name }}</h1>\n\
         {% if project.image_fpath %}\
         <img src=\"{{ project.image_fpath }}\" alt=\"{{ project.info.name }}\">\
         {% endif %}\n",
    )
    .unwrap();
    fs::write(
        templates_root.join("index.html"),
        "<!doctype html>\n\
         <title>Featured</title>\n\
         <ul>\n\
         {% for project in projects %}\
         <li><a href=\"{{ project.url }}\">{{ project.info.name }}</a></li>\n\
         {% endfor %}\
         </ul>\n",
    )
    .unwrap();
    fs::write(
        templates_root.join("portfolio.html"),
        "<!doctype html>\n\
         <title>All projects</title>\n\
         {% for project in projects %}\
         <h2><a href=\"{{ project.url }}\">{{ project.info.name }}</a></h2>\n\
         {% endfor %}",
    )
    .unwrap();
    fs::write(
        templates_root.join("about.html"),
        "<!doctype html>\n\
         <title>About</title>\n\
         {% if projects %}\
         {% for project in projects %}<p>About {{ project.info.name }}</p>{% endfor %}\
         {% else %}\
         <p>Nothing here yet.</p>\
         {% endif %}\n",
    )
    .unwrap();

    fs::create_dir_all(templates_root.join("css")).unwrap();
    fs::write(templates_root.join("css/site.css"), "body { margin: 0 }").unwrap();
    fs::create_dir_all(templates_root.join("images")).unwrap();
    fs::write(templates_root.join("images/logo.png"), b"logo bytes").unwrap();
}

// =========================================================================
// Portfolio lookups — panics with a clear message on miss
// =========================================================================

/// Find a project by slug. Panics if not found.
pub fn find_project<'a>(portfolio: &'a Portfolio, slug: &str) -> &'a Project {
    portfolio
        .projects
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs = project_slugs(portfolio);
            panic!("project '{slug}' not found. Available: {slugs:?}")
        })
}

/// All project slugs in portfolio order.
pub fn project_slugs(portfolio: &Portfolio) -> Vec<&str> {
    portfolio.projects.iter().map(|p| p.slug.as_str()).collect()
}
