//! `upstream <name> { ... }` pool section.

use crate::block::Block;
use crate::directive::DirectiveStore;
use crate::options::UpstreamServerOptions;
use crate::render::wrap;

/// Server-pool section.
///
/// Pool members and balancing settings are all plain directives; each
/// helper below assembles exactly one directive string and appends it.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamBlock {
    name: String,
    directives: DirectiveStore,
}

impl UpstreamBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: DirectiveStore::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a pool member. Present modifiers render in a fixed tail
    /// order: weight, max_fails, fail_timeout, backup, down.
    pub fn server(&mut self, address: &str, options: &UpstreamServerOptions) -> &mut Self {
        let mut line = format!("server {address}");
        if let Some(v) = options.weight {
            line.push_str(&format!(" weight={v}"));
        }
        if let Some(v) = options.max_fails {
            line.push_str(&format!(" max_fails={v}"));
        }
        if let Some(v) = &options.fail_timeout {
            line.push_str(&format!(" fail_timeout={v}"));
        }
        if options.backup {
            line.push_str(" backup");
        }
        if options.down {
            line.push_str(" down");
        }
        self.append(line)
    }

    pub fn least_conn(&mut self) -> &mut Self {
        self.append("least_conn")
    }

    pub fn ip_hash(&mut self) -> &mut Self {
        self.append("ip_hash")
    }

    pub fn hash(&mut self, key: &str, consistent: bool) -> &mut Self {
        if consistent {
            self.append(format!("hash {key} consistent"))
        } else {
            self.append(format!("hash {key}"))
        }
    }

    pub fn random(&mut self, two: bool) -> &mut Self {
        if two {
            self.append("random two")
        } else {
            self.append("random")
        }
    }

    /// Idle keepalive connections to retain per worker.
    pub fn keepalive(&mut self, connections: u32) -> &mut Self {
        self.append(format!("keepalive {connections}"))
    }
}

impl Block for UpstreamBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let header = format!("upstream {}", self.name);
        wrap(&header, &self.directives.render(depth + 1), depth)
    }
}
