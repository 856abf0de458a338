//! Graphviz DOT export.

pub mod attr;
pub mod renderer;

pub use self::renderer::{DefaultStyle, DotStyle, export, export_with, to_dot_string};
