//! Degree-constrained random directed graphs.
//!
//! [`generate`] builds a [`DiGraph`] from [`GenerationParameters`] and an
//! explicitly passed random source. Drawing is kept behind the [`Renderer`]
//! trait so the generator never depends on a plotting backend; the crate ships
//! [`SvgRenderer`] and [`DotRenderer`] for file export, both fed by the same
//! laid-out [`Scene`].

mod caption;
mod error;
mod generator;
mod graph;
mod layouts;
mod params;
mod render;
mod scene;
mod settings;

pub use self::caption::{connections_text, wrap_text};
pub use self::error::{GenerateError, RenderError};
pub use self::generator::generate;
pub use self::graph::{DiGraph, Edge, LayoutGraph, NodeId};
pub use self::layouts::{
    fit_to_canvas, Circular, ForceDirected, ForceDirectedState, Layout, LayoutKind, Line,
    SMALL_GRAPH_THRESHOLD,
};
pub use self::params::{
    GenerationParameters, RenderParameters, DEFAULT_FIG_SIZE, MAX_RECORDS, MIN_RECORDS,
    PIXELS_PER_FIG_UNIT,
};
pub use self::render::{
    default_export_filename, render_dot, render_svg, DotRenderer, ExportTarget, OutputFormat,
    RenderOutcome, Renderer, SvgRenderer,
};
pub use self::scene::{Scene, SceneEdge, SceneNode};
pub use self::settings::{parse_color, SettingsStyle, CSS_PALETTE};
