use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, RenderError};
use crate::layouts::LayoutKind;
use crate::settings::SettingsStyle;

pub const MIN_RECORDS: usize = 2;
pub const MAX_RECORDS: usize = 200;

pub const DEFAULT_FIG_SIZE: f32 = 10.0;

/// Figure units are inches at 100 dpi.
pub const PIXELS_PER_FIG_UNIT: f32 = 100.0;

/// Shape of the graph to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Number of nodes, within `MIN_RECORDS..=MAX_RECORDS`.
    pub num_records: usize,
    /// Fraction of nodes that receive more than one outgoing edge.
    pub multi_connection_ratio: f64,
    /// Lower bound on the out-degree of a multi-connection node.
    pub min_connections: usize,
    /// Upper bound on the out-degree of a multi-connection node.
    pub max_connections: usize,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            num_records: 100,
            multi_connection_ratio: 0.8,
            min_connections: 2,
            max_connections: 3,
        }
    }
}

impl GenerationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_records(mut self, num_records: usize) -> Self {
        self.num_records = num_records;
        self
    }

    pub fn with_multi_connection_ratio(mut self, ratio: f64) -> Self {
        self.multi_connection_ratio = ratio;
        self
    }

    pub fn with_connections(mut self, min: usize, max: usize) -> Self {
        self.min_connections = min;
        self.max_connections = max;
        self
    }

    /// `floor(num_records * multi_connection_ratio)`, capped at `num_records`.
    pub fn multi_connection_count(&self) -> usize {
        let count = (self.num_records as f64 * self.multi_connection_ratio).floor();
        if count <= 0.0 {
            return 0;
        }
        (count as usize).min(self.num_records)
    }

    /// Checks the ranges that do not depend on each other's values.
    ///
    /// # Errors
    /// Returns [`GenerateError::ParameterRange`] naming the first parameter
    /// found outside its range.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !(MIN_RECORDS..=MAX_RECORDS).contains(&self.num_records) {
            return Err(GenerateError::range(
                "num_records",
                format!(
                    "must be between {MIN_RECORDS} and {MAX_RECORDS} (got {})",
                    self.num_records
                ),
            ));
        }
        let ratio = self.multi_connection_ratio;
        if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
            return Err(GenerateError::range(
                "multi_connection_ratio",
                format!("must be between 0.0 and 1.0 (got {ratio})"),
            ));
        }
        if self.min_connections < 1 {
            return Err(GenerateError::range(
                "min_connections",
                format!("must be at least 1 (got {})", self.min_connections),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(GenerateError::range(
                "max_connections",
                format!(
                    "must not be below min_connections ({} < {})",
                    self.max_connections, self.min_connections
                ),
            ));
        }
        Ok(())
    }
}

/// Everything a [`crate::Renderer`] needs besides the graph itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Width of node borders and edges, in pixels.
    pub edge_thickness: f32,
    /// Side of the square figure, in figure units.
    pub fig_size: f32,
    pub save_to_file: bool,
    pub layout: LayoutKind,
    /// Seeds node placement and edge colors.
    pub seed: u64,
    pub style: SettingsStyle,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            edge_thickness: 1.5,
            fig_size: DEFAULT_FIG_SIZE,
            save_to_file: false,
            layout: LayoutKind::default(),
            seed: 0,
            style: SettingsStyle::default(),
        }
    }
}

impl RenderParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_thickness(mut self, edge_thickness: f32) -> Self {
        self.edge_thickness = edge_thickness;
        self
    }

    pub fn with_fig_size(mut self, fig_size: f32) -> Self {
        self.fig_size = fig_size;
        self
    }

    pub fn with_save_to_file(mut self, save_to_file: bool) -> Self {
        self.save_to_file = save_to_file;
        self
    }

    pub fn with_layout(mut self, layout: LayoutKind) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_style(mut self, style: SettingsStyle) -> Self {
        self.style = style;
        self
    }

    /// Side of the figure in pixels.
    pub fn figure_pixels(&self) -> f32 {
        self.fig_size * PIXELS_PER_FIG_UNIT
    }

    /// # Errors
    /// Returns [`RenderError::InvalidParameter`] for non-positive or
    /// non-finite sizes and for an unusable style.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.edge_thickness.is_finite() || self.edge_thickness <= 0.0 {
            return Err(RenderError::invalid(
                "edge_thickness",
                format!("must be greater than 0 (got {})", self.edge_thickness),
            ));
        }
        if !self.fig_size.is_finite() || self.fig_size <= 0.0 {
            return Err(RenderError::invalid(
                "fig_size",
                format!("must be greater than 0 (got {})", self.fig_size),
            ));
        }
        self.style.validate()
    }
}
