//! OCR tier: rasterize pages with pdftoppm, then run tesseract per page.
//!
//! Page images live in their own scratch directory and are removed when it
//! drops, independent of the request's upload directory.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// True when `name` can be spawned from PATH. The exit status is
/// irrelevant — only existence matters for the capability probe.
pub fn binary_available(name: &str) -> bool {
    Command::new(name).arg("--version").output().is_ok()
}

/// Rasterizes `path` at 300 dpi and OCRs each page image, concatenating
/// per-page text followed by a newline. Page order follows pdftoppm's
/// zero-padded numbering, so a lexicographic sort is positional.
pub fn ocr_pdf(path: &Path) -> Result<String> {
    let scratch = tempfile::tempdir().context("failed to create OCR scratch dir")?;
    let prefix = scratch.path().join("page");

    let run = Command::new("pdftoppm")
        .args(["-r", "300", "-png"])
        .arg(path)
        .arg(&prefix)
        .output()
        .context("failed to spawn pdftoppm")?;
    if !run.status.success() {
        bail!(
            "pdftoppm exited with {}: {}",
            run.status,
            String::from_utf8_lossy(&run.stderr).trim()
        );
    }

    let mut pages: Vec<_> = std::fs::read_dir(scratch.path())
        .context("failed to list rasterized pages")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
        .collect();
    pages.sort();

    let mut text = String::new();
    for page in &pages {
        let run = Command::new("tesseract")
            .arg(page)
            .arg("stdout")
            .output()
            .context("failed to spawn tesseract")?;
        if !run.status.success() {
            debug!(
                "tesseract failed on {}: {}",
                page.display(),
                String::from_utf8_lossy(&run.stderr).trim()
            );
            continue;
        }
        let page_text = String::from_utf8_lossy(&run.stdout);
        if !page_text.trim().is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_available_false_for_nonsense_name() {
        assert!(!binary_available("definitely-not-a-real-binary-name-xyz"));
    }

    #[test]
    fn test_ocr_on_missing_file_errors() {
        // Fails at spawn when pdftoppm is absent, or at exit status when it
        // is present but the input does not exist. Never succeeds.
        assert!(ocr_pdf(Path::new("/definitely/not/here.pdf")).is_err());
    }
}
