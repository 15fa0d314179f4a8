//! Directive storage
//!
//! Every block owns an ordered, append-only list of directive lines.

use crate::render::pad;

/// Ordered, append-only store of directive lines.
///
/// Lines are persisted with exactly one trailing `;`: appending a line
/// that already carries the separator does not duplicate it, appending
/// one without it adds it. Content is never validated; whatever is
/// pushed ends up in the rendered output verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveStore {
    lines: Vec<String>,
}

impl DirectiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one directive, normalizing the statement separator.
    pub fn push(&mut self, directive: impl Into<String>) {
        let mut line = directive.into();
        line.truncate(line.trim_end().len());
        while line.ends_with(';') {
            line.pop();
        }
        line.push(';');
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Stored lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Render every line at the given depth, one per row, without a
    /// trailing newline. An empty store renders an empty string.
    pub fn render(&self, depth: usize) -> String {
        let pad = pad(depth);
        self.lines
            .iter()
            .map(|line| format!("{pad}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_adds_separator() {
        let mut store = DirectiveStore::new();
        store.push("user nginx");
        assert_eq!(store.iter().collect::<Vec<_>>(), vec!["user nginx;"]);
    }

    #[test]
    fn test_push_does_not_duplicate_separator() {
        let mut store = DirectiveStore::new();
        store.push("user nginx;");
        store.push("worker_processes auto;;");
        let lines: Vec<_> = store.iter().collect();
        assert_eq!(lines, vec!["user nginx;", "worker_processes auto;"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = DirectiveStore::new();
        store.push("b 2");
        store.push("a 1");
        let lines: Vec<_> = store.iter().collect();
        assert_eq!(lines, vec!["b 2;", "a 1;"]);
    }

    #[test]
    fn test_render_indents_each_line() {
        let mut store = DirectiveStore::new();
        store.push("listen 80");
        store.push("root /srv");
        assert_eq!(store.render(2), "        listen 80;\n        root /srv;");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(DirectiveStore::new().render(1), "");
    }
}
