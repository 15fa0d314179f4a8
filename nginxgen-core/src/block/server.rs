//! `server { ... }` virtual-server section.

use crate::block::{Block, LocationBlock, LocationMatch};
use crate::directive::DirectiveStore;
use crate::render::{join_groups, render_children, wrap};

/// Virtual-server section: free-form directives plus an ordered list
/// of location sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerBlock {
    directives: DirectiveStore,
    locations: Vec<LocationBlock>,
}

impl ServerBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix-match location and return it for population. The
    /// new location is owned by this server for its lifetime.
    pub fn add_location(&mut self, path: impl Into<String>) -> &mut LocationBlock {
        self.add_location_matched(path, LocationMatch::Prefix)
    }

    /// Add an exact-match (`=`) location.
    pub fn add_exact_location(&mut self, path: impl Into<String>) -> &mut LocationBlock {
        self.add_location_matched(path, LocationMatch::Exact)
    }

    pub fn add_location_matched(
        &mut self,
        path: impl Into<String>,
        matcher: LocationMatch,
    ) -> &mut LocationBlock {
        self.locations.push(LocationBlock::new(path, matcher));
        let last = self.locations.len() - 1;
        &mut self.locations[last]
    }

    pub fn locations(&self) -> &[LocationBlock] {
        &self.locations
    }

    pub fn listen(&mut self, port: u16) -> &mut Self {
        self.append(format!("listen {port}"))
    }

    /// Raw listen address, e.g. `"443 ssl"` or `"[::]:80"`.
    pub fn listen_addr(&mut self, address: &str) -> &mut Self {
        self.append(format!("listen {address}"))
    }

    pub fn server_name(&mut self, names: &[&str]) -> &mut Self {
        self.append(format!("server_name {}", names.join(" ")))
    }

    pub fn root(&mut self, path: &str) -> &mut Self {
        self.append(format!("root {path}"))
    }

    pub fn index(&mut self, files: &[&str]) -> &mut Self {
        self.append(format!("index {}", files.join(" ")))
    }

    pub fn access_log(&mut self, target: &str) -> &mut Self {
        self.append(format!("access_log {target}"))
    }

    pub fn error_log(&mut self, target: &str) -> &mut Self {
        self.append(format!("error_log {target}"))
    }

    pub fn error_page(&mut self, codes: &[u16], target: &str) -> &mut Self {
        let codes = codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.append(format!("error_page {codes} {target}"))
    }

    pub fn return_status(&mut self, code: u16) -> &mut Self {
        self.append(format!("return {code}"))
    }

    pub fn return_with(&mut self, code: u16, value: &str) -> &mut Self {
        self.append(format!("return {code} {value}"))
    }

    pub fn ssl_certificate(&mut self, path: &str) -> &mut Self {
        self.append(format!("ssl_certificate {path}"))
    }

    pub fn ssl_certificate_key(&mut self, path: &str) -> &mut Self {
        self.append(format!("ssl_certificate_key {path}"))
    }

    pub fn ssl_protocols(&mut self, protocols: &[&str]) -> &mut Self {
        self.append(format!("ssl_protocols {}", protocols.join(" ")))
    }

    pub fn ssl_ciphers(&mut self, ciphers: &str) -> &mut Self {
        self.append(format!("ssl_ciphers {ciphers}"))
    }
}

impl Block for ServerBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let body = join_groups([
            self.directives.render(depth + 1),
            render_children(&self.locations, depth + 1),
        ]);
        wrap("server", &body, depth)
    }
}
