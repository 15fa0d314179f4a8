//! `http { ... }` section.

use crate::block::{Block, MapBlock, ServerBlock, UpstreamBlock};
use crate::directive::DirectiveStore;
use crate::options::HttpOptions;
use crate::render::{join_groups, render_children, wrap};

/// HTTP section: a typed option set, free-form directives, and three
/// ordered child collections.
///
/// Render order is fixed: typed options (schema order), directives
/// (insertion order), then upstreams, maps, and servers, each
/// collection in insertion order, all groups blank-line separated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpBlock {
    options: HttpOptions,
    directives: DirectiveStore,
    upstreams: Vec<UpstreamBlock>,
    maps: Vec<MapBlock>,
    servers: Vec<ServerBlock>,
}

impl HttpBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }

    /// Overwrite only the option slots present in `options`.
    pub fn merge_options(&mut self, options: &HttpOptions) -> &mut Self {
        self.options.merge(options);
        self
    }

    pub fn include(&mut self, path: &str) -> &mut Self {
        self.append(format!("include {path}"))
    }

    pub fn log_format(&mut self, name: &str, format: &str) -> &mut Self {
        self.append(format!("log_format {name} {format}"))
    }

    /// Add a server pool and return it for population.
    pub fn add_upstream(&mut self, name: impl Into<String>) -> &mut UpstreamBlock {
        self.upstreams.push(UpstreamBlock::new(name));
        let last = self.upstreams.len() - 1;
        &mut self.upstreams[last]
    }

    /// Add a key-mapping section and return it for population.
    pub fn add_map(
        &mut self,
        source: impl Into<String>,
        output: impl Into<String>,
    ) -> &mut MapBlock {
        self.maps.push(MapBlock::new(source, output));
        let last = self.maps.len() - 1;
        &mut self.maps[last]
    }

    /// Add a virtual-server section and return it for population.
    pub fn add_server(&mut self) -> &mut ServerBlock {
        self.servers.push(ServerBlock::new());
        let last = self.servers.len() - 1;
        &mut self.servers[last]
    }

    pub fn upstreams(&self) -> &[UpstreamBlock] {
        &self.upstreams
    }

    pub fn maps(&self) -> &[MapBlock] {
        &self.maps
    }

    pub fn servers(&self) -> &[ServerBlock] {
        &self.servers
    }
}

impl Block for HttpBlock {
    fn directives(&self) -> &DirectiveStore {
        &self.directives
    }

    fn directives_mut(&mut self) -> &mut DirectiveStore {
        &mut self.directives
    }

    fn render(&self, depth: usize) -> String {
        let body = join_groups([
            self.options.render(depth + 1),
            self.directives.render(depth + 1),
            render_children(&self.upstreams, depth + 1),
            render_children(&self.maps, depth + 1),
            render_children(&self.servers, depth + 1),
        ]);
        wrap("http", &body, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UpstreamServerOptions;

    #[test]
    fn test_empty_http_renders_minimal_form() {
        assert_eq!(HttpBlock::new().render(0), "http {}");
    }

    #[test]
    fn test_typed_options_render_before_directives() {
        let mut http = HttpBlock::new();
        http.include("/etc/nginx/mime.types");
        http.merge_options(&HttpOptions {
            sendfile: Some(true),
            ..Default::default()
        });
        assert_eq!(
            http.render(0),
            "http {\n    sendfile on;\n\n    include /etc/nginx/mime.types;\n}"
        );
    }

    #[test]
    fn test_child_collections_render_upstreams_maps_servers() {
        let mut http = HttpBlock::new();
        http.add_server().listen(80);
        http.add_map("$host", "$pool").default_value("backend");
        http.add_upstream("backend")
            .server("127.0.0.1:8080", &UpstreamServerOptions::default());

        let text = http.render(0);
        let upstream_at = text.find("upstream backend").unwrap();
        let map_at = text.find("map $host $pool").unwrap();
        let server_at = text.find("server {").unwrap();
        assert!(upstream_at < map_at && map_at < server_at);
    }

    #[test]
    fn test_sibling_servers_separated_by_blank_line() {
        let mut http = HttpBlock::new();
        http.add_server().listen(80);
        http.add_server().listen(81);
        assert_eq!(
            http.render(0),
            "http {\n    server {\n        listen 80;\n    }\n\n    server {\n        listen 81;\n    }\n}"
        );
    }

    #[test]
    fn test_merge_order_does_not_change_output() {
        let mut a = HttpBlock::new();
        a.merge_options(&HttpOptions {
            server_tokens: Some(false),
            ..Default::default()
        });
        a.merge_options(&HttpOptions {
            sendfile: Some(true),
            ..Default::default()
        });

        let mut b = HttpBlock::new();
        b.merge_options(&HttpOptions {
            sendfile: Some(true),
            ..Default::default()
        });
        b.merge_options(&HttpOptions {
            server_tokens: Some(false),
            ..Default::default()
        });

        assert_eq!(a.render(0), b.render(0));
    }
}
