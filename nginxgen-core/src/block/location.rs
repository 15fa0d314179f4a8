//! `location [=] <path> { ... }` section.

use serde::{Deserialize, Serialize};

use crate::block::{Block, IfBlock};
use crate::directive::DirectiveStore;
use crate::options::CorsOptions;
use crate::render::{join_groups, render_children, wrap};

/// Match modifier of a location section.
///
/// Only the opening delimiter changes with the modifier; the render
/// algorithm is the same for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMatch {
    /// Longest-prefix match; no modifier in the delimiter.
    #[default]
    Prefix,
    /// Exact match; `=` modifier.
    Exact,
}

/// Location section: a match path fixed at construction, free-form
/// directives, and ordered conditional child sections.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBlock {
    path: String,
    matcher: LocationMatch,
    directives: DirectiveStore,
    ifs: Vec<IfBlock>,
}

impl LocationBlock {
    pub fn new(path: impl Into<String>, matcher: LocationMatch) -> Self {
        Self {
            path: path.into(),
            matcher,
            directives: DirectiveStore::new(),
            ifs: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn matcher(&self) -> LocationMatch {
        self.matcher
    }

    /// Add a conditional child section and return it for population.
    pub fn add_if(&mut self, condition: impl Into<String>) -> &mut IfBlock {
        self.ifs.push(IfBlock::new(condition));
        let last = self.ifs.len() - 1;
        &mut self.ifs[last]
    }

    pub fn ifs(&self) -> &[IfBlock] {
        &self.ifs
    }

    pub fn root(&mut self, path: &str) -> &mut Self {
        self.append(format!("root {path}"))
    }

    pub fn alias(&mut self, path: &str) -> &mut Self {
        self.append(format!("alias {path}"))
    }

    pub fn index(&mut self, files: &[&str]) -> &mut Self {
        self.append(format!("index {}", files.join(" ")))
    }

    pub fn try_files(&mut self, targets: &[&str]) -> &mut Self {
        self.append(format!("try_files {}", targets.join(" ")))
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

    pub fn allow(&mut self, source: &str) -> &mut Self {
        self.append(format!("allow {source}"))
    }

    pub fn deny(&mut self, source: &str) -> &mut Self {
        self.append(format!("deny {source}"))
    }

    pub fn add_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.append(format!("add_header {name} \"{value}\""))
    }

    pub fn expires(&mut self, value: &str) -> &mut Self {
        self.append(format!("expires {value}"))
    }

    pub fn proxy_pass(&mut self, target: &str) -> &mut Self {
        self.append(format!("proxy_pass {target}"))
    }

    pub fn proxy_set_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.append(format!("proxy_set_header {name} {value}"))
    }

    pub fn proxy_http_version(&mut self, version: &str) -> &mut Self {
        self.append(format!("proxy_http_version {version}"))
    }

    pub fn proxy_connect_timeout(&mut self, value: &str) -> &mut Self {
        self.append(format!("proxy_connect_timeout {value}"))
    }

    pub fn proxy_send_timeout(&mut self, value: &str) -> &mut Self {
        self.append(format!("proxy_send_timeout {value}"))
    }

    pub fn proxy_read_timeout(&mut self, value: &str) -> &mut Self {
        self.append(format!("proxy_read_timeout {value}"))
    }

    pub fn proxy_redirect(&mut self, from: &str, to: &str) -> &mut Self {
        self.append(format!("proxy_redirect {from} {to}"))
    }

    /// WebSocket upgrade preset: HTTP/1.1 plus the Upgrade/Connection
    /// header pair.
    pub fn websocket(&mut self) -> &mut Self {
        self.proxy_http_version("1.1")
            .proxy_set_header("Upgrade", "$http_upgrade")
            .proxy_set_header("Connection", "\"upgrade\"")
    }

    pub fn fastcgi_pass(&mut self, target: &str) -> &mut Self {
        self.append(format!("fastcgi_pass {target}"))
    }

    pub fn fastcgi_param(&mut self, name: &str, value: &str) -> &mut Self {
        self.append(format!("fastcgi_param {name} {value}"))
    }

    /// Emit the fixed CORS header sequence for `options`.
    pub fn cors(&mut self, options: &CorsOptions) -> &mut Self {
        for directive in options.directives() {
            self.append(directive);
        }
        self
    }

    fn header(&self) -> String {
        match self.matcher {
            LocationMatch::Prefix => format!("location {}", self.path),
            LocationMatch::Exact => format!("location = {}", self.path),
        }
    }
}

impl Block for LocationBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let body = join_groups([
            self.directives.render(depth + 1),
            render_children(&self.ifs, depth + 1),
        ]);
        wrap(&self.header(), &body, depth)
    }
}
