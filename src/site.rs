//! Build orchestration.
//!
//! Composes the three pipeline stages behind the two top-level operations:
//! a full [`build`] and a read-only [`check`].
//!
//! Stage order matters. Assets are staged first so the output root exists
//! before previews are copied into `images/`, loading runs second so every
//! validation failure aborts before any page is written, and rendering runs
//! last against a fully staged, validated portfolio.

use crate::assets::{self, AssetError};
use crate::config::BuildConfig;
use crate::load::{self, LoadError, Portfolio};
use crate::render::{self, RenderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Asset error: {0}")]
    Assets(#[from] AssetError),
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Run a full site build: stage assets, load projects, render pages.
///
/// Returns the loaded portfolio so callers can report what was built.
pub fn build(config: &BuildConfig) -> Result<Portfolio, BuildError> {
    assets::stage_assets(&config.templates_root, &config.output_root)?;
    let portfolio = load::load_projects(&config.projects_root, &config.output_root)?;
    render::render_site(&portfolio, &config.templates_root, &config.output_root)?;
    Ok(portfolio)
}

/// Validate project metadata without writing anything.
///
/// Runs the same discovery, parsing, and validation as a build, but never
/// touches the templates or output roots.
pub fn check(config: &BuildConfig) -> Result<Portfolio, BuildError> {
    Ok(load::scan_projects(&config.projects_root)?)
}
