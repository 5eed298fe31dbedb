use std::fmt::Write as _;

use crate::error::RenderError;
use crate::graph::DiGraph;
use crate::params::RenderParameters;
use crate::scene::Scene;

use super::{hex, write_output, ExportTarget, OutputFormat, RenderOutcome, Renderer};

/// Writes the scene as a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    target: ExportTarget,
}

impl SvgRenderer {
    pub fn new(target: ExportTarget) -> Self {
        Self { target }
    }
}

impl Renderer for SvgRenderer {
    fn draw(
        &mut self,
        graph: &DiGraph,
        params: &RenderParameters,
    ) -> Result<RenderOutcome, RenderError> {
        let scene = Scene::build(graph, params)?;
        let path = self.target.resolve(OutputFormat::Svg.extension());
        write_output(&path, &render_svg(&scene))?;
        Ok(RenderOutcome::Saved(path))
    }
}

pub fn render_svg(scene: &Scene) -> String {
    let (w, h) = (scene.size.x, scene.size.y);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        hex(scene.background)
    );
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle">{}</text>"#,
        w / 2.0,
        scene.graph_rect.min.y / 2.0 + scene.title_size / 2.0,
        scene.title_size,
        escape(&scene.title)
    );

    out.push_str("  <g id=\"edges\">\n");
    for edge in &scene.edges {
        let color = hex(edge.color);
        let _ = writeln!(
            out,
            r#"    <g class="edge" data-source="{}" data-target="{}"><line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="{}"/><polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{color}"/></g>"#,
            edge.source,
            edge.target,
            edge.start.x,
            edge.start.y,
            edge.end.x,
            edge.end.y,
            scene.edge_width,
            edge.tip[0].x,
            edge.tip[0].y,
            edge.tip[1].x,
            edge.tip[1].y,
            edge.tip[2].x,
            edge.tip[2].y,
        );
    }
    out.push_str("  </g>\n");

    out.push_str("  <g id=\"nodes\">\n");
    for node in &scene.nodes {
        let _ = writeln!(
            out,
            r#"    <g class="node" data-id="{}"><circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/><text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="{}" font-weight="bold" text-anchor="middle" dominant-baseline="central">{}</text></g>"#,
            node.id,
            node.center.x,
            node.center.y,
            scene.node_radius,
            hex(scene.node_fill),
            hex(scene.node_stroke.color),
            scene.node_stroke.width,
            node.center.x,
            node.center.y,
            scene.label_size,
            escape(&node.label)
        );
    }
    out.push_str("  </g>\n");

    let line_height = scene.caption_line_height();
    let _ = writeln!(
        out,
        r#"  <g id="caption" font-family="monospace" font-size="{}">"#,
        scene.caption_size
    );
    for (i, line) in scene.caption.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"    <text x="{}" y="{:.2}">{}</text>"#,
            scene.caption_rect.min.x,
            scene.caption_rect.min.y + line_height * (i as f32 + 1.0),
            escape(line)
        );
    }
    out.push_str("  </g>\n");
    out.push_str("</svg>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape(r#"a -> "b" & <c>"#), "a -&gt; &quot;b&quot; &amp; &lt;c&gt;");
    }
}
