use std::borrow::Cow;
use std::fmt::Write as _;

use textwrap::{Options, WordSeparator, WrapAlgorithm};

use crate::graph::DiGraph;

/// Adjacency listing shown under the drawing, `• node -> [targets]` per node.
pub fn connections_text(graph: &DiGraph) -> String {
    let mut out = String::new();
    for (node, targets) in graph.connections() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "• {node} -> {targets:?}");
    }
    out
}

/// Greedy word wrap: all whitespace, line breaks included, separates words,
/// and words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if joined.is_empty() {
        return Vec::new();
    }
    let options = Options::new(width.max(1))
        .word_separator(WordSeparator::AsciiSpace)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(&joined, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}
