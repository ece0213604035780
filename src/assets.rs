//! Support asset staging.
//!
//! Stage 1 of the folio-gen build pipeline. Copies the support directories
//! (`css/`, `images/`) from the templates root into the output root,
//! creating the output root on demand. Copies are verbatim and recursive;
//! files already present in the output are overwritten, anything else
//! already there is left alone.
//!
//! Both support directories must exist under the templates root — a missing
//! one aborts the build rather than producing a site with dead asset links.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Support directory not found: {0}")]
    MissingSupportDir(PathBuf),
}

/// Directories copied verbatim from the templates root into the output.
pub const SUPPORT_DIRS: &[&str] = &["css", "images"];

/// Copy every support directory into the output root.
pub fn stage_assets(templates_root: &Path, output_root: &Path) -> Result<(), AssetError> {
    fs::create_dir_all(output_root)?;
    for dirname in SUPPORT_DIRS {
        let source = templates_root.join(dirname);
        if !source.is_dir() {
            return Err(AssetError::MissingSupportDir(source));
        }
        copy_tree(&source, &output_root.join(dirname))?;
    }
    Ok(())
}

/// Recursively copy `source` into `dest`, preserving the tree shape.
fn copy_tree(source: &Path, dest: &Path) -> Result<(), AssetError> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let target = dest.join(entry.path().strip_prefix(source).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
