//! Export Adapter: turns the rendered preview into a downloadable PDF.
//!
//! Layout and rasterization belong to an external renderer behind the
//! [`PdfRenderer`] trait. This module only owns the contract around it:
//! a fixed A4 page, one export in flight at a time, a timeout, and the
//! download filename.

pub mod command;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::preview::RenderedSurface;

pub use command::CommandRenderer;

pub(crate) const FALLBACK_FILE_STEM: &str = "resume";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no rendered preview is available to export")]
    NoSurface,

    #[error("PDF renderer failed: {0}")]
    Renderer(String),

    #[error("PDF renderer timed out after {0:?}")]
    Timeout(Duration),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Physical page the PDF is laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub name: &'static str,
    pub width_mm: f32,
    pub height_mm: f32,
}

pub const A4: PageFormat = PageFormat {
    name: "A4",
    width_mm: 210.0,
    height_mm: 297.0,
};

/// An external HTML → PDF capability.
///
/// Carried by the [`Exporter`] as `Arc<dyn PdfRenderer>`.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str, page: PageFormat) -> Result<Vec<u8>, ExportError>;
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub filename: String,
    pub bytes: Bytes,
}

pub struct Exporter {
    renderer: Arc<dyn PdfRenderer>,
    timeout: Duration,
    in_flight: Mutex<()>,
}

impl Exporter {
    pub fn new(renderer: Arc<dyn PdfRenderer>, timeout: Duration) -> Self {
        Self {
            renderer,
            timeout,
            in_flight: Mutex::new(()),
        }
    }

    /// Renders `surface` to an A4 PDF. Requests queue behind any export that
    /// is already running.
    pub async fn export(&self, surface: Option<RenderedSurface>) -> Result<ExportedPdf, ExportError> {
        let surface = surface.ok_or(ExportError::NoSurface)?;
        let _guard = self.in_flight.lock().await;

        let filename = pdf_filename(&surface.full_name);
        info!(
            "Exporting {filename} via {} ({})",
            self.renderer.name(),
            A4.name
        );

        let rendered = tokio::time::timeout(self.timeout, self.renderer.render(&surface.html, A4)).await;
        let bytes = match rendered {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                warn!("PDF export of {filename} failed: {e}");
                return Err(e);
            }
            Err(_) => {
                warn!("PDF export of {filename} timed out");
                return Err(ExportError::Timeout(self.timeout));
            }
        };

        if !bytes.starts_with(b"%PDF") {
            return Err(ExportError::Renderer(
                "renderer output is not a PDF document".to_string(),
            ));
        }

        info!("Exported {filename} ({} bytes)", bytes.len());
        Ok(ExportedPdf {
            filename,
            bytes: Bytes::from(bytes),
        })
    }
}

/// Download name derived from the person's full name.
///
/// Letters and digits in any script are kept, as are `-` and `_`. Runs of
/// anything else collapse into a single `_`. Falls back to `resume.pdf`.
pub fn pdf_filename(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut pending_sep = false;
    for c in full_name.trim().chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            if pending_sep && !stem.is_empty() {
                stem.push('_');
            }
            pending_sep = false;
            stem.push(c);
        } else {
            pending_sep = true;
        }
    }
    if stem.is_empty() {
        stem.push_str(FALLBACK_FILE_STEM);
    }
    format!("{stem}.pdf")
}
