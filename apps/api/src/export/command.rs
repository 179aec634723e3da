use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::export::{ExportError, PageFormat, PdfRenderer};

/// Prints HTML to PDF with a headless Chromium-compatible browser.
///
/// The page is written into a fresh temporary directory, printed with
/// `--print-to-pdf`, and the directory is removed afterwards. Paper size
/// comes from the `@page` rule of the rendered preview.
pub struct CommandRenderer {
    bin: PathBuf,
    no_sandbox: bool,
}

impl CommandRenderer {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            no_sandbox: false,
        }
    }

    /// Chromium refuses to start as root with its sandbox on, which is the
    /// usual situation inside containers. Off by default.
    pub fn no_sandbox(mut self, enabled: bool) -> Self {
        self.no_sandbox = enabled;
        self
    }

    fn args(&self, page: PageFormat, input: &str, output: &str) -> Vec<String> {
        let mut args = vec!["--headless".to_string(), "--disable-gpu".to_string()];
        if self.no_sandbox {
            args.push("--no-sandbox".to_string());
        }
        args.extend([
            "--no-pdf-header-footer".to_string(),
            format!("--window-size={},{}", mm_to_px(page.width_mm), mm_to_px(page.height_mm)),
            format!("--print-to-pdf={output}"),
            format!("file://{input}"),
        ]);
        args
    }
}

/// CSS pixels at 96 dpi.
fn mm_to_px(mm: f32) -> u32 {
    (mm / 25.4 * 96.0).round() as u32
}

#[async_trait]
impl PdfRenderer for CommandRenderer {
    async fn render(&self, html: &str, page: PageFormat) -> Result<Vec<u8>, ExportError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("resume.html");
        let output = workdir.path().join("resume.pdf");
        tokio::fs::write(&input, html).await?;

        let args = self.args(
            page,
            &input.to_string_lossy(),
            &output.to_string_lossy(),
        );
        debug!("Running {} {:?}", self.bin.display(), args);

        let result = Command::new(&self.bin)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ExportError::Renderer(format!("could not start {}: {e}", self.bin.display()))
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ExportError::Renderer(format!(
                "{} exited with {}: {}",
                self.bin.display(),
                result.status,
                stderr.trim()
            )));
        }

        match tokio::fs::read(&output).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ExportError::Renderer(
                "renderer finished without writing a PDF".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "headless-browser"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::A4;

    #[test]
    fn test_a4_window_size() {
        assert_eq!(mm_to_px(A4.width_mm), 794);
        assert_eq!(mm_to_px(A4.height_mm), 1123);
    }

    #[test]
    fn test_args_point_at_files() {
        let renderer = CommandRenderer::new("chromium");
        let args = renderer.args(A4, "/tmp/x/resume.html", "/tmp/x/resume.pdf");
        assert!(args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--print-to-pdf=/tmp/x/resume.pdf".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("file:///tmp/x/resume.html"));
        assert!(!args.contains(&"--no-sandbox".to_string()));
    }

    #[test]
    fn test_sandbox_opt_out() {
        let renderer = CommandRenderer::new("chromium").no_sandbox(true);
        let args = renderer.args(A4, "/tmp/x/resume.html", "/tmp/x/resume.pdf");
        assert!(args.contains(&"--no-sandbox".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("file:///tmp/x/resume.html"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_renderer_error() {
        let renderer = CommandRenderer::new("/nonexistent/definitely-not-a-browser");
        let result = renderer.render("<html></html>", A4).await;
        assert!(matches!(result, Err(ExportError::Renderer(_))));
    }
}
