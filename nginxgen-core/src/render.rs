//! Text assembly rules shared by every block kind.
//!
//! Rendering flattens the block tree into nginx-style text: four
//! spaces per nesting level, sibling groups separated by exactly one
//! blank line, empty blocks collapsed to `name {}`.

use crate::block::Block;

/// One indentation level.
pub const INDENT_UNIT: &str = "    ";

/// Indentation prefix for the given nesting depth.
pub fn pad(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// Join rendered groups with one blank line between any two non-empty
/// groups. Empty groups contribute nothing.
pub fn join_groups<I>(groups: I) -> String
where
    I: IntoIterator<Item = String>,
{
    groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Wrap a rendered body in `header { ... }` delimiters at the given
/// depth. An empty body renders the minimal `header {}` form with no
/// interior newline.
pub fn wrap(header: &str, body: &str, depth: usize) -> String {
    let pad = pad(depth);
    if body.is_empty() {
        format!("{pad}{header} {{}}")
    } else {
        format!("{pad}{header} {{\n{body}\n{pad}}}")
    }
}

/// Render an ordered child collection, members separated by one blank
/// line, each at the given depth.
pub fn render_children<B: Block>(children: &[B], depth: usize) -> String {
    children
        .iter()
        .map(|child| child.render(depth))
        .collect::<Vec<_>>()
        .join("\n\n")
}
