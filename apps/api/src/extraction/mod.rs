//! Tiered résumé text extraction.
//!
//! Real-world résumé PDFs mix vector text, oddly-kerned layout text, and
//! pure scans. Each tier targets one failure mode and runs only when every
//! prior tier produced no non-whitespace text: text layer first, then a
//! layout-preserving re-extraction, then OCR. Tiers 2 and 3 shell out to
//! poppler/tesseract and are gated on startup capability probes.

pub mod ocr;

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

pub struct TextExtractor {
    layout_pass_available: bool,
    ocr_available: bool,
}

impl TextExtractor {
    /// Probes PATH for the external tools backing tiers 2 and 3 and records
    /// the results as immutable capability flags.
    pub fn probe() -> Self {
        let layout_pass_available = ocr::binary_available("pdftotext");
        let ocr_available =
            ocr::binary_available("pdftoppm") && ocr::binary_available("tesseract");
        info!(
            layout_pass = layout_pass_available,
            ocr = ocr_available,
            "Extraction capabilities probed"
        );
        Self::with_capabilities(layout_pass_available, ocr_available)
    }

    /// Constructor with explicit capability flags. `probe()` is the
    /// production path; this one pins behavior where determinism matters.
    pub fn with_capabilities(layout_pass_available: bool, ocr_available: bool) -> Self {
        Self {
            layout_pass_available,
            ocr_available,
        }
    }

    /// Best-effort extraction. Never fails the caller: per-tier errors are
    /// logged and the next tier runs. The result may be empty.
    pub fn extract(&self, path: &Path) -> String {
        let mut text = match text_layer_pass(path) {
            Ok(t) => t,
            Err(e) => {
                warn!("Text-layer extraction failed for {}: {e}", path.display());
                String::new()
            }
        };

        if text.trim().is_empty() && self.layout_pass_available {
            debug!("Text layer empty, trying layout-preserving pass");
            match layout_pass(path) {
                Ok(t) => text = t,
                Err(e) => {
                    warn!(
                        "Layout-preserving extraction failed for {}: {e}",
                        path.display()
                    );
                }
            }
        }

        if text.trim().is_empty() {
            if self.ocr_available {
                debug!("Text tiers empty, trying OCR");
                match ocr::ocr_pdf(path) {
                    Ok(t) => text = t,
                    Err(e) => warn!("OCR failed for {}: {e}", path.display()),
                }
            } else {
                debug!("Text tiers empty and OCR capability unavailable, skipping");
            }
        }

        text.trim().to_string()
    }
}

/// Tier 1: per-page text layer via pdf-extract, concatenating each
/// non-empty page followed by a newline.
fn text_layer_pass(path: &Path) -> Result<String, pdf_extract::OutputError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;
    let mut text = String::new();
    for page in pages {
        if !page.trim().is_empty() {
            text.push_str(&page);
            text.push('\n');
        }
    }
    Ok(text)
}

/// Tier 2: layout-preserving re-extraction via poppler's pdftotext.
fn layout_pass(path: &Path) -> anyhow::Result<String> {
    let run = std::process::Command::new("pdftotext")
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .context("failed to spawn pdftotext")?;
    if !run.status.success() {
        anyhow::bail!(
            "pdftotext exited with {}: {}",
            run.status,
            String::from_utf8_lossy(&run.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&run.stdout).into_owned())
}
