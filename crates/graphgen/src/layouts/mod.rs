mod circular;
mod force_directed;
mod layout;
mod line;

pub use self::circular::Circular;
pub use self::force_directed::{ForceDirected, ForceDirectedState};
pub use self::layout::{fit_to_canvas, Layout, LayoutKind, SMALL_GRAPH_THRESHOLD};
pub use self::line::Line;
