//! # aegis-export
//!
//! Static HTML export for the Aegis Applied Computing landing page.
//!
//! - [`config`] - optional `aegis.toml`
//! - [`check`] - structural checks over rendered HTML
//! - [`error`] - error types
//!
//! ```rust,no_run
//! use aegis_export::{config::AegisConfig, export_page};
//!
//! let config = AegisConfig::load(std::path::Path::new("."));
//! let report = export_page(&config.page_meta(), &config.export.output)?;
//! println!("{} ({} bytes)", report.path.display(), report.bytes);
//! # Ok::<(), aegis_export::error::ExportError>(())
//! ```

pub mod check;
pub mod config;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use aegis_site::{PageMeta, render_page};

use check::check_page;
use error::{ExportError, Result};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render the page and verify it, without touching the filesystem.
pub fn render_checked(meta: &PageMeta) -> Result<String> {
    let html = render_page(meta);
    let problems = check_page(&html);
    if !problems.is_empty() {
        for problem in &problems {
            tracing::warn!("{}", problem);
        }
        return Err(ExportError::BrokenPage { problems });
    }
    Ok(html)
}

/// Render, verify and write the page to `out`, creating parent directories.
pub fn export_page(meta: &PageMeta, out: &Path) -> Result<ExportReport> {
    let html = render_checked(meta)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }
    fs::write(out, &html).map_err(|e| ExportError::io(out, e))?;

    tracing::info!(path = %out.display(), bytes = html.len(), "wrote static page");
    Ok(ExportReport {
        path: out.to_path_buf(),
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn render_checked_accepts_default_page() {
        let html = render_checked(&PageMeta::default()).expect("clean page");
        assert!(html.contains(r#"data-section="footer""#));
    }

    #[test]
    fn exports_into_nested_directory() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist").join("site").join("index.html");

        let report = export_page(&PageMeta::default(), &out).expect("export");

        let written = fs::read_to_string(&out).expect("read export");
        assert_eq!(report.path, out);
        assert_eq!(report.bytes, written.len());
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn reports_unwritable_target() {
        let temp = TempDir::new().expect("temp dir");
        // a directory where the file should go
        let out = temp.path().join("index.html");
        fs::create_dir(&out).expect("create dir");

        let err = export_page(&PageMeta::default(), &out).expect_err("must fail");
        assert!(matches!(err, ExportError::Io { ref path, .. } if path == &out));
    }
}
