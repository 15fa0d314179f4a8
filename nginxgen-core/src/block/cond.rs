//! `if (<condition>) { ... }` section.

use crate::block::Block;
use crate::directive::DirectiveStore;
use crate::render::wrap;

/// Conditional section.
///
/// The condition is fixed at construction and embedded in the opening
/// delimiter verbatim; no escaping or validation is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct IfBlock {
    condition: String,
    directives: DirectiveStore,
}

impl IfBlock {
    pub fn new(condition: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            directives: DirectiveStore::new(),
        }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn return_status(&mut self, code: u16) -> &mut Self {
        self.append(format!("return {code}"))
    }

    pub fn return_with(&mut self, code: u16, value: &str) -> &mut Self {
        self.append(format!("return {code} {value}"))
    }

    pub fn rewrite(&mut self, pattern: &str, replacement: &str) -> &mut Self {
        self.append(format!("rewrite {pattern} {replacement}"))
    }
}

impl Block for IfBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let header = format!("if ({})", self.condition);
        wrap(&header, &self.directives.render(depth + 1), depth)
    }
}
