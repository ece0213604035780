//! Build configuration module.
//!
//! Handles loading and validating `folio.toml` files. Configuration is a
//! single flat layer: stock defaults are overridden by an optional
//! `folio.toml` in the invocation directory, and CLI path flags override both.
//!
//! ## Config File Location
//!
//! Place `folio.toml` next to the directories it points at:
//!
//! ```text
//! portfolio/
//! ├── folio.toml               # Optional (overrides stock defaults)
//! ├── project_descriptions/    # One subdirectory per project
//! ├── templates/               # Page templates + css/ + images/
//! └── build/                   # Generated output (created on demand)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! projects_root = "project_descriptions"  # One subdirectory per project
//! templates_root = "templates"            # Tera templates and support assets
//! output_root = "build"                   # Where the generated site lands
//! ```
//!
//! Config files are sparse — override just the paths you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Name of the optional config file looked up in the invocation directory.
pub const CONFIG_FNAME: &str = "folio.toml";

/// Build configuration loaded from `folio.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory containing one subdirectory per project.
    pub projects_root: PathBuf,
    /// Directory containing page templates and the css/ and images/ assets.
    pub templates_root: PathBuf,
    /// Directory the generated site is written into.
    pub output_root: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            projects_root: PathBuf::from("project_descriptions"),
            templates_root: PathBuf::from("templates"),
            output_root: PathBuf::from("build"),
        }
    }
}

impl BuildConfig {
    /// Validate config values.
    ///
    /// Paths must be non-empty, and the output root must not alias either
    /// source root: the build starts by writing into `output_root`, so
    /// pointing it at the inputs would clobber them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("projects_root", &self.projects_root),
            ("templates_root", &self.templates_root),
            ("output_root", &self.output_root),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        let normalize = |p: &Path| p.components().collect::<PathBuf>();
        let output = normalize(&self.output_root);
        if output == normalize(&self.projects_root) {
            return Err(ConfigError::Validation(
                "output_root must differ from projects_root".into(),
            ));
        }
        if output == normalize(&self.templates_root) {
            return Err(ConfigError::Validation(
                "output_root must differ from templates_root".into(),
            ));
        }
        Ok(())
    }

    /// Apply CLI path overrides on top of this config.
    ///
    /// `None` leaves the corresponding field untouched, so flags compose with
    /// `folio.toml` values the same way `folio.toml` composes with defaults.
    pub fn with_overrides(
        mut self,
        projects: Option<PathBuf>,
        templates: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = projects {
            self.projects_root = path;
        }
        if let Some(path) = templates {
            self.templates_root = path;
        }
        if let Some(path) = output {
            self.output_root = path;
        }
        self
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load a `folio.toml` from a directory without validating it.
///
/// Returns `Ok(None)` if no `folio.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML or unknown keys.
pub fn load_raw_config(dir: &Path) -> Result<Option<BuildConfig>, ConfigError> {
    let config_path = dir.join(CONFIG_FNAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let config: BuildConfig = toml::from_str(&content)?;
    Ok(Some(config))
}

/// Resolve the effective config for an invocation directory.
///
/// Layers, lowest to highest precedence: stock defaults, `folio.toml` in
/// `dir`, then the CLI path overrides. The merged result is validated.
pub fn resolve_config(
    dir: &Path,
    projects: Option<PathBuf>,
    templates: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<BuildConfig, ConfigError> {
    let config = load_raw_config(dir)?
        .unwrap_or_default()
        .with_overrides(projects, templates, output);
    config.validate()?;
    Ok(config)
}

/// Load config from `folio.toml` in the given directory.
///
/// Missing files fall back to stock defaults. The result is validated.
pub fn load_config(dir: &Path) -> Result<BuildConfig, ConfigError> {
    resolve_config(dir, None, None, None)
}

/// Returns a fully-commented stock `folio.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# folio-gen Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Paths are resolved relative to the directory folio-gen is run from.
# The same three paths can also be set per-invocation with --projects,
# --templates and --output, which take precedence over this file.
#
# Unknown keys will cause an error.

# Directory containing one subdirectory per project. Each subdirectory
# holds a project.yml metadata record and an optional preview image.
projects_root = "project_descriptions"

# Directory containing the page templates (project.html, index.html,
# portfolio.html, about.html) plus the css/ and images/ support
# directories copied verbatim into the output.
templates_root = "templates"

# Directory the generated site is written into. Created if absent.
# Must not point at either of the two roots above.
output_root = "build"
"#
}
