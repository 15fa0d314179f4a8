//! `map <source> <output> { ... }` section.

use crate::block::Block;
use crate::directive::DirectiveStore;
use crate::render::wrap;

/// Key-mapping section.
///
/// Source and output variables are fixed at construction and embedded
/// in the opening delimiter verbatim. Pairs render one per line in
/// insertion order as `key value;`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapBlock {
    source: String,
    output: String,
    directives: DirectiveStore,
}

impl MapBlock {
    pub fn new(source: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            directives: DirectiveStore::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Add one `key value;` pair.
    pub fn entry(&mut self, key: &str, value: &str) -> &mut Self {
        self.append(format!("{key} {value}"))
    }

    /// Fallback value for source values with no matching key.
    pub fn default_value(&mut self, value: &str) -> &mut Self {
        self.entry("default", value)
    }

    /// Match source values as hostnames (leading/trailing wildcards).
    pub fn hostnames(&mut self) -> &mut Self {
        self.append("hostnames")
    }
}

impl Block for MapBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let header = format!("map {} {}", self.source, self.output);
        wrap(&header, &self.directives.render(depth + 1), depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_render_in_insertion_order() {
        let mut map = MapBlock::new("$http_upgrade", "$connection_upgrade");
        map.default_value("upgrade").entry("''", "close");
        assert_eq!(
            map.render(1),
            "    map $http_upgrade $connection_upgrade {\n        default upgrade;\n        '' close;\n    }"
        );
    }

    #[test]
    fn test_empty_map_renders_minimal_form() {
        let map = MapBlock::new("$host", "$backend");
        assert_eq!(map.render(0), "map $host $backend {}");
    }
}
