mod dot;
mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use log::info;

use crate::error::RenderError;
use crate::graph::DiGraph;
use crate::params::RenderParameters;

pub use self::dot::{render_dot, DotRenderer};
pub use self::svg::{render_svg, SvgRenderer};

/// Draws a graph somewhere: a file, a window.
pub trait Renderer {
    /// # Errors
    /// Fails with [`RenderError`] when the parameters are unusable or the
    /// output cannot be produced.
    fn draw(&mut self, graph: &DiGraph, params: &RenderParameters)
        -> Result<RenderOutcome, RenderError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Saved(PathBuf),
    Displayed,
}

/// File format used when saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Dot,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Dot => "dot",
        }
    }
}

/// `generated_graph_<YYYYmmdd_HHMMSS>.<extension>` in local time.
pub fn default_export_filename(extension: &str) -> String {
    let now = chrono::Local::now();
    format!(
        "generated_graph_{}.{extension}",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Where a file renderer writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    /// A timestamped file name inside this directory.
    Directory(PathBuf),
    /// Exactly this path.
    File(PathBuf),
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self::Directory(PathBuf::from("."))
    }
}

impl ExportTarget {
    pub fn resolve(&self, extension: &str) -> PathBuf {
        match self {
            Self::Directory(dir) => dir.join(default_export_filename(extension)),
            Self::File(path) => path.clone(),
        }
    }
}

/// `#rrggbb`, alpha dropped.
fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), RenderError> {
    let wrap = |source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, content).map_err(wrap)?;
    info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
