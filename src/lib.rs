//! # folio-gen
//!
//! A minimal static site generator for project portfolios. Your filesystem
//! is the data source: each subdirectory of the projects root is one
//! portfolio entry, described by a `project.yml` metadata record and an
//! optional preview image.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! A build runs three stages in a fixed order:
//!
//! ```text
//! 1. Stage     templates/{css,images}  →  build/           (support assets)
//! 2. Load      project_descriptions/  →  Portfolio        (records + previews)
//! 3. Render    Portfolio + templates  →  build/*.html     (final pages)
//! ```
//!
//! The ordering is deliberate:
//!
//! - **Assets first**: staging creates the output root and its `images/`
//!   landing area, so preview copies during loading never race directory
//!   creation.
//! - **Load before render**: every metadata failure (malformed YAML, slug
//!   collision, duplicate canonical flag) aborts the build before a single
//!   page is written, so a broken source tree never produces a half-updated
//!   site.
//! - **Render last**: templates see only fully validated, slug-sorted
//!   projects.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`assets`] | Stage 1 — copies the `css/` and `images/` support directories into the output |
//! | [`load`] | Stage 2 — discovers projects, parses metadata, derives slugs, stages previews |
//! | [`render`] | Stage 3 — renders project pages and the three listings through Tera |
//! | [`site`] | Pipeline orchestration: the `build` and `check` operations |
//! | [`config`] | `folio.toml` loading, CLI override layering, validation |
//! | [`slug`] | Display-name → URL-token normalization used for all derived filenames |
//! | [`output`] | CLI output formatting — inventory-style build and check reports |
//!
//! # Design Decisions
//!
//! ## File-Based Tera Templates
//!
//! Pages are rendered with [Tera](https://keats.github.io/tera/) templates
//! loaded from a plain directory, rather than compile-time HTML macros. The
//! people editing page layout here are not the people editing this crate:
//! templates are site content, live next to the CSS they style, and change
//! without recompiling. The whole templates root is loaded, so shared
//! partials work with `{% include %}`.
//!
//! ## Slug-Derived Identity
//!
//! A project's output filename, URL, and staged preview name all derive from
//! one normalization of its display name ([`slug::slugify`]). The slug is
//! computed once at load time and carried on the record, so every artifact
//! agrees by construction and renames are a metadata edit, not a refactor.
//! Collisions are an error rather than a silent overwrite.
//!
//! ## Fail-Fast Validation
//!
//! Any invalid metadata record aborts the whole build. A portfolio is small
//! (tens of entries, not thousands) and is published as a unit — skipping a
//! broken entry would silently publish an incomplete site. The `check`
//! command runs the same validation without writing anything.
//!
//! ## Visibility Is Data
//!
//! Private projects are loaded, validated, and preview-staged like any other
//! entry; `public: false` only removes them from rendered pages. This keeps
//! a draft entry one flag-flip away from published, with no special casing
//! anywhere past the render stage.

pub mod assets;
pub mod config;
pub mod load;
pub mod output;
pub mod render;
pub mod site;
pub mod slug;

#[cfg(test)]
pub(crate) mod test_helpers;
