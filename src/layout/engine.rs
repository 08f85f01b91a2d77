//! Subprocess-backed Graphviz layout engine

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use super::error::LayoutError;
use super::options::{LayoutImage, LayoutOpts};

/// Output format requested from the engine
pub const OUTPUT_FORMAT: &str = "svg";

/// Default layout engine binary
pub const DEFAULT_ENGINE: &str = "dot";

/// Handle to a resolved Graphviz engine.
///
/// Construction resolves the engine binary once; [`layout`](Self::layout)
/// calls after that are independent of each other and may run concurrently.
/// Callers hold the handle for the process lifetime instead of relying on a
/// module-level singleton.
#[derive(Debug, Clone)]
pub struct GraphvizEngine {
    program: PathBuf,
    engine: String,
}

impl GraphvizEngine {
    /// Resolve the default `dot` engine. Must complete before any layout call.
    pub async fn load() -> Result<Self, LayoutError> {
        Self::load_with_engine(DEFAULT_ENGINE).await
    }

    /// Resolve a named engine binary on PATH
    pub async fn load_with_engine(engine: &str) -> Result<Self, LayoutError> {
        let engine = engine.to_string();
        let program = which::which(&engine).map_err(|source| LayoutError::EngineNotFound {
            engine: engine.clone(),
            source,
        })?;
        Ok(Self { program, engine })
    }

    /// Name of the resolved engine
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Lay out DOT source as SVG text.
    ///
    /// The source is streamed to the engine verbatim; no syntax validation
    /// happens locally. Malformed DOT surfaces as [`LayoutError::Render`]
    /// carrying the engine's stderr, unchanged.
    pub async fn layout(&self, dot_src: &str, opts: &LayoutOpts) -> Result<String, LayoutError> {
        // Temp dir must outlive the child process.
        let image_dir = if opts.images.is_empty() {
            None
        } else {
            let dir = tempfile::tempdir()?;
            materialize_images(dir.path(), &opts.images)?;
            Some(dir)
        };

        let mut command = Command::new(&self.program);
        command
            .arg(format!("-T{}", OUTPUT_FORMAT))
            .arg(format!("-K{}", self.engine))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &image_dir {
            command.arg(format!("-Gimagepath={}", dir.path().display()));
        }

        let mut child = command.spawn().map_err(|source| LayoutError::Spawn {
            engine: self.engine.clone(),
            source,
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(dot_src.as_bytes()).await?;
        }

        let mut svg = String::with_capacity(dot_src.len());
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_string(&mut svg).await?;
        }

        let mut stderr_text = String::new();
        if let Some(mut stderr) = child.stderr.take() {
            stderr.read_to_string(&mut stderr_text).await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(LayoutError::Render {
                engine: self.engine.clone(),
                status,
                stderr: stderr_text,
            });
        }

        Ok(svg)
    }
}

/// Write dimension stubs for registered images under the image search path.
///
/// The engine only needs the dimensions to size nodes and sniffs file
/// content, so an SVG stub serves for any extension.
fn materialize_images(dir: &Path, images: &[LayoutImage]) -> Result<(), LayoutError> {
    for image in images {
        let rel = Path::new(&image.path);
        if rel.is_absolute() || image.path.contains("..") || image.path.contains(':') {
            return Err(LayoutError::InvalidImage {
                path: image.path.clone(),
                reason: "not a relative file path".to_string(),
            });
        }
        let target = dir.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(
            &target,
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"></svg>"#,
                image.width, image.height
            ),
        )?;
    }
    Ok(())
}
