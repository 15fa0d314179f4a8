//! `events { ... }` section.

use crate::block::Block;
use crate::directive::DirectiveStore;
use crate::options::on_off;
use crate::render::wrap;

/// Connection-processing section of the top-level document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsBlock {
    directives: DirectiveStore,
}

impl EventsBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn worker_connections(&mut self, connections: u32) -> &mut Self {
        self.append(format!("worker_connections {connections}"))
    }

    /// Connection processing method, e.g. `epoll` or `kqueue`.
    pub fn use_method(&mut self, method: &str) -> &mut Self {
        self.append(format!("use {method}"))
    }

    pub fn multi_accept(&mut self, enabled: bool) -> &mut Self {
        self.append(format!("multi_accept {}", on_off(enabled)))
    }

    pub fn accept_mutex(&mut self, enabled: bool) -> &mut Self {
        self.append(format!("accept_mutex {}", on_off(enabled)))
    }
}

impl Block for EventsBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        wrap("events", &self.directives.render(depth + 1), depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_events_renders_minimal_form() {
        assert_eq!(EventsBlock::new().render(0), "events {}");
    }

    #[test]
    fn test_events_body_is_indented() {
        let mut events = EventsBlock::new();
        events.worker_connections(1024).multi_accept(true);
        assert_eq!(
            events.render(0),
            "events {\n    worker_connections 1024;\n    multi_accept on;\n}"
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut events = EventsBlock::new();
        events.use_method("epoll");
        assert_eq!(events.render(1), events.render(1));
    }
}
