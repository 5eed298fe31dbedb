use std::fmt::Write as _;

use crate::error::RenderError;
use crate::graph::DiGraph;
use crate::params::RenderParameters;
use crate::scene::Scene;

use super::{hex, write_output, ExportTarget, OutputFormat, RenderOutcome, Renderer};

/// Points per pixel; Graphviz positions are in points at 72 dpi.
const POINTS_PER_PIXEL: f32 = 0.72;

/// Writes a Graphviz document carrying the scene's positions and colors, so
/// `neato -n` reproduces the drawing.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    target: ExportTarget,
}

impl DotRenderer {
    pub fn new(target: ExportTarget) -> Self {
        Self { target }
    }
}

impl Renderer for DotRenderer {
    fn draw(
        &mut self,
        graph: &DiGraph,
        params: &RenderParameters,
    ) -> Result<RenderOutcome, RenderError> {
        let scene = Scene::build(graph, params)?;
        let path = self.target.resolve(OutputFormat::Dot.extension());
        write_output(&path, &render_dot(&scene))?;
        Ok(RenderOutcome::Saved(path))
    }
}

pub fn render_dot(scene: &Scene) -> String {
    let mut out = String::from("digraph graphgen {\n");
    let _ = writeln!(out, "  label=\"{}\";", escape_dot_label(&scene.title));
    let _ = writeln!(out, "  labelloc=t;");
    let _ = writeln!(
        out,
        "  node [shape=circle, style=filled, fillcolor=\"{}\", color=\"{}\", penwidth={}, fontname=\"Helvetica-Bold\"];",
        hex(scene.node_fill),
        hex(scene.node_stroke.color),
        scene.node_stroke.width
    );
    let _ = writeln!(out, "  edge [penwidth={}];", scene.edge_width);

    // flip y: Graphviz puts the origin at the bottom left
    let height = scene.size.y;
    for node in &scene.nodes {
        let _ = writeln!(
            out,
            "  \"{}\" [label=\"{}\", pos=\"{:.1},{:.1}!\"];",
            node.id,
            escape_dot_label(&node.label),
            node.center.x * POINTS_PER_PIXEL,
            (height - node.center.y) * POINTS_PER_PIXEL
        );
    }
    for edge in &scene.edges {
        let _ = writeln!(
            out,
            "  \"{}\" -> \"{}\" [color=\"{}\"];",
            edge.source,
            edge.target,
            hex(edge.color)
        );
    }
    out.push_str("}\n");
    out
}

fn escape_dot_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_dot_label(r#"say "hi" \o/"#), r#"say \"hi\" \\o/"#);
    }
}
