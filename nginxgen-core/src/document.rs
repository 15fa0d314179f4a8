//! Document roots
//!
//! The tops of the ownership tree; the unit on which `render()` is
//! invoked to produce the final configuration text.

use crate::block::{Block, EventsBlock, HttpBlock, ServerBlock};
use crate::directive::DirectiveStore;
use crate::render::{join_groups, render_children};

/// A renderable document root.
///
/// `render` is a pure function of the tree state and terminates the
/// output with exactly one trailing newline.
pub trait Document {
    fn render(&self) -> String;
}

/// Full top-level document: global directives plus at most one
/// `events` and one `http` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    directives: DirectiveStore,
    events: Option<EventsBlock>,
    http: Option<HttpBlock>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one global directive.
    pub fn append(&mut self, directive: impl Into<String>) -> &mut Self {
        self.directives.push(directive);
        self
    }

    pub fn user(&mut self, name: &str) -> &mut Self {
        self.append(format!("user {name}"))
    }

    /// Worker count, e.g. `"4"` or `"auto"`.
    pub fn worker_processes(&mut self, value: &str) -> &mut Self {
        self.append(format!("worker_processes {value}"))
    }

    pub fn pid(&mut self, path: &str) -> &mut Self {
        self.append(format!("pid {path}"))
    }

    pub fn error_log(&mut self, target: &str) -> &mut Self {
        self.append(format!("error_log {target}"))
    }

    pub fn include(&mut self, path: &str) -> &mut Self {
        self.append(format!("include {path}"))
    }

    pub fn load_module(&mut self, path: &str) -> &mut Self {
        self.append(format!("load_module {path}"))
    }

    /// The singleton `events` section, created on first access.
    pub fn events(&mut self) -> &mut EventsBlock {
        self.events.get_or_insert_with(EventsBlock::new)
    }

    /// The singleton `http` section, created on first access.
    pub fn http(&mut self) -> &mut HttpBlock {
        self.http.get_or_insert_with(HttpBlock::new)
    }

    pub fn directives(&self) -> &DirectiveStore {
        &self.directives
    }
}

impl Document for Config {
    fn render(&self) -> String {
        let text = join_groups([
            self.directives.render(0),
            self.events.as_ref().map(|e| e.render(0)).unwrap_or_default(),
            self.http.as_ref().map(|h| h.render(0)).unwrap_or_default(),
        ]);
        tracing::debug!(bytes = text.len(), "rendered configuration document");
        format!("{text}\n")
    }
}

/// Lighter-weight root: global include directives plus a flat ordered
/// list of virtual-server sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServersConfig {
    directives: DirectiveStore,
    servers: Vec<ServerBlock>,
}

impl ServersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one global directive.
    pub fn append(&mut self, directive: impl Into<String>) -> &mut Self {
        self.directives.push(directive);
        self
    }

    pub fn include(&mut self, path: &str) -> &mut Self {
        self.append(format!("include {path}"))
    }

    /// Add a virtual-server section and return it for population.
    pub fn add_server(&mut self) -> &mut ServerBlock {
        self.servers.push(ServerBlock::new());
        let last = self.servers.len() - 1;
        &mut self.servers[last]
    }

    pub fn servers(&self) -> &[ServerBlock] {
        &self.servers
    }
}

impl Document for ServersConfig {
    fn render(&self) -> String {
        let text = join_groups([
            self.directives.render(0),
            render_children(&self.servers, 0),
        ]);
        tracing::debug!(
            servers = self.servers.len(),
            "rendered server-only document"
        );
        format!("{text}\n")
    }
}
