use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graphgen::{
    connections_text, generate, DotRenderer, ExportTarget, GenerationParameters, LayoutKind,
    OutputFormat, RenderOutcome, RenderParameters, Renderer, SettingsStyle, SvgRenderer,
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config;
use crate::window::WindowRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Svg,
    Dot,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Dot => OutputFormat::Dot,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Spring,
    Circular,
}

impl From<LayoutArg> for LayoutKind {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Spring => LayoutKind::Spring,
            LayoutArg::Circular => LayoutKind::Circular,
        }
    }
}

/// Generate and display a random graph with customizable parameters.
#[derive(Debug, Clone, Parser)]
#[command(name = "graphgen", version)]
pub struct Cli {
    /// Number of nodes in the graph (minimum: 2, maximum: 200)
    #[arg(long = "num_records", default_value_t = 100)]
    pub num_records: usize,

    /// Ratio of nodes with multiple connections
    #[arg(long = "multi_connection_ratio", default_value_t = 0.8)]
    pub multi_connection_ratio: f64,

    /// Minimum number of connections per multi-connection node
    #[arg(long = "min_connections", default_value_t = 2)]
    pub min_connections: usize,

    /// Maximum number of connections per multi-connection node
    #[arg(long = "max_connections", default_value_t = 3)]
    pub max_connections: usize,

    /// Thickness of node borders and edges
    #[arg(long = "edge_thickness", default_value_t = 1.5)]
    pub edge_thickness: f32,

    /// Size of the figure for the graph
    #[arg(long = "fig_size", default_value_t = 10.0)]
    pub fig_size: f32,

    /// Save the graph as an image instead of displaying it
    #[arg(long = "save_to_file")]
    pub save_to_file: bool,

    /// Seed for generation, layout and colors; random when omitted
    #[arg(long, env = "GRAPHGEN_SEED")]
    pub seed: Option<u64>,

    /// File format used with --save_to_file
    #[arg(long, value_enum, env = "GRAPHGEN_FORMAT", default_value = "svg")]
    pub format: FormatArg,

    /// Directory saved files are written to
    #[arg(long = "output_dir", env = "GRAPHGEN_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Exact output path, overriding --output_dir and the timestamped name
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Node placement strategy
    #[arg(long, value_enum, default_value = "spring")]
    pub layout: LayoutArg,

    /// JSON file overriding the drawing style
    #[arg(long, env = "GRAPHGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also print the connection listing to stdout
    #[arg(long = "print_connections")]
    pub print_connections: bool,
}

impl Cli {
    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters::new()
            .with_num_records(self.num_records)
            .with_multi_connection_ratio(self.multi_connection_ratio)
            .with_connections(self.min_connections, self.max_connections)
    }

    pub fn render_parameters(&self, style: SettingsStyle, seed: u64) -> RenderParameters {
        RenderParameters::new()
            .with_edge_thickness(self.edge_thickness)
            .with_fig_size(self.fig_size)
            .with_save_to_file(self.save_to_file)
            .with_layout(self.layout.into())
            .with_seed(seed)
            .with_style(style)
    }

    pub fn export_target(&self) -> ExportTarget {
        match &self.output {
            Some(path) => ExportTarget::File(path.clone()),
            None => ExportTarget::Directory(self.output_dir.clone()),
        }
    }

    fn renderer(&self, params: &RenderParameters) -> Box<dyn Renderer> {
        if !params.save_to_file {
            return Box::new(WindowRenderer::new());
        }
        match OutputFormat::from(self.format) {
            OutputFormat::Svg => Box::new(SvgRenderer::new(self.export_target())),
            OutputFormat::Dot => Box::new(DotRenderer::new(self.export_target())),
        }
    }
}

/// Generates the graph and hands it to the selected renderer.
///
/// # Errors
/// Propagates parameter, config and rendering failures with context.
pub fn run(cli: &Cli) -> Result<()> {
    let style = match &cli.config {
        Some(path) => config::load_style(path)?,
        None => SettingsStyle::default(),
    };

    let seed = cli.seed.unwrap_or_else(|| {
        let seed = rand::rng().random();
        info!("using random seed {seed}");
        seed
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let params = cli.generation_parameters();
    debug!("generation parameters: {params:?}");
    let graph = generate(&params, &mut rng).context("invalid generation parameters")?;
    info!(
        "generated {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if cli.print_connections {
        println!("{}", connections_text(&graph));
    }

    let render_params = cli.render_parameters(style, seed);
    let outcome = cli
        .renderer(&render_params)
        .draw(&graph, &render_params)
        .context("failed to render graph")?;
    if let RenderOutcome::Saved(path) = outcome {
        println!("Graph saved to '{}'", path.display());
    }
    Ok(())
}
