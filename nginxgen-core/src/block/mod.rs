//! Block kinds and the shared block contract.

mod cond;
mod events;
mod http;
mod location;
mod map;
mod server;
mod upstream;

pub use cond::IfBlock;
pub use events::EventsBlock;
pub use http::HttpBlock;
pub use location::{LocationBlock, LocationMatch};
pub use map::MapBlock;
pub use server::ServerBlock;
pub use upstream::UpstreamBlock;

use crate::directive::DirectiveStore;
use crate::options::{CacheOptions, CommonOptions, CompressionOptions, on_off};

/// Shared contract for every node in the configuration tree.
///
/// A block owns an ordered directive store and renders itself at a
/// nesting depth. `render` never mutates the tree: calling it twice on
/// an unmutated block returns byte-identical text.
pub trait Block {
    fn directives(&self) -> &DirectiveStore;

    fn directives_mut(&mut self) -> &mut DirectiveStore;

    /// Render this block at the given nesting depth (four spaces per
    /// level), without a trailing newline.
    fn render(&self, depth: usize) -> String;

    /// Append one free-form directive. Insertion order is preserved in
    /// the rendered output; content is passed through verbatim apart
    /// from separator normalization.
    fn append(&mut self, directive: impl Into<String>) -> &mut Self
    where
        Self: Sized,
    {
        self.directives_mut().push(directive);
        self
    }

    /// Translate a partial [`CommonOptions`] record into directives.
    ///
    /// Slots are checked in a fixed schema order, so the emitted
    /// sequence depends only on which slots are present, never on how
    /// the record was assembled.
    fn merge_common(&mut self, options: &CommonOptions) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(v) = &options.access_log {
            self.append(format!("access_log {v}"));
        }
        if let Some(v) = &options.error_log {
            self.append(format!("error_log {v}"));
        }
        if let Some(v) = &options.client_max_body_size {
            self.append(format!("client_max_body_size {v}"));
        }
        if let Some(v) = options.keepalive_timeout {
            self.append(format!("keepalive_timeout {v}"));
        }
        if let Some(v) = options.send_timeout {
            self.append(format!("send_timeout {v}"));
        }
        if let Some(v) = options.sendfile {
            self.append(format!("sendfile {}", on_off(v)));
        }
        if let Some(v) = options.tcp_nopush {
            self.append(format!("tcp_nopush {}", on_off(v)));
        }
        if let Some(v) = options.tcp_nodelay {
            self.append(format!("tcp_nodelay {}", on_off(v)));
        }
        self
    }

    /// Translate a partial [`CompressionOptions`] record into gzip
    /// directives, in fixed schema order.
    fn merge_compression(&mut self, options: &CompressionOptions) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(v) = options.enabled {
            self.append(format!("gzip {}", on_off(v)));
        }
        if let Some(v) = options.comp_level {
            self.append(format!("gzip_comp_level {v}"));
        }
        if let Some(v) = options.min_length {
            self.append(format!("gzip_min_length {v}"));
        }
        if let Some(v) = &options.types {
            self.append(format!("gzip_types {}", v.join(" ")));
        }
        if let Some(v) = options.vary {
            self.append(format!("gzip_vary {}", on_off(v)));
        }
        if let Some(v) = &options.proxied {
            self.append(format!("gzip_proxied {v}"));
        }
        self
    }

    /// Translate a partial [`CacheOptions`] record into caching
    /// directives, in fixed schema order.
    fn merge_cache(&mut self, options: &CacheOptions) -> &mut Self
    where
        Self: Sized,
    {
        if let Some(v) = &options.expires {
            self.append(format!("expires {v}"));
        }
        if let Some(v) = &options.cache_control {
            self.append(format!("add_header Cache-Control \"{v}\""));
        }
        if let Some(v) = options.etag {
            self.append(format!("etag {}", on_off(v)));
        }
        if let Some(v) = &options.open_file_cache {
            self.append(format!("open_file_cache {v}"));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_common_fixed_order() {
        let mut block = EventsBlock::new();
        block.merge_common(&CommonOptions {
            tcp_nodelay: Some(true),
            access_log: Some("/var/log/nginx/access.log".to_string()),
            sendfile: Some(true),
            ..Default::default()
        });
        let lines: Vec<_> = block.directives().iter().collect();
        assert_eq!(
            lines,
            vec![
                "access_log /var/log/nginx/access.log;",
                "sendfile on;",
                "tcp_nodelay on;",
            ]
        );
    }

    #[test]
    fn test_merge_compression_fixed_order() {
        let mut block = EventsBlock::new();
        block.merge_compression(&CompressionOptions {
            vary: Some(true),
            enabled: Some(true),
            types: Some(vec!["text/css".to_string(), "text/plain".to_string()]),
            ..Default::default()
        });
        let lines: Vec<_> = block.directives().iter().collect();
        assert_eq!(
            lines,
            vec!["gzip on;", "gzip_types text/css text/plain;", "gzip_vary on;"]
        );
    }

    #[test]
    fn test_merge_cache_fixed_order() {
        let mut block = EventsBlock::new();
        block.merge_cache(&CacheOptions {
            etag: Some(false),
            expires: Some("30d".to_string()),
            ..Default::default()
        });
        let lines: Vec<_> = block.directives().iter().collect();
        assert_eq!(lines, vec!["expires 30d;", "etag off;"]);
    }

    #[test]
    fn test_append_is_fluent() {
        let mut block = EventsBlock::new();
        block.append("worker_connections 512").append("multi_accept on");
        assert_eq!(block.directives().len(), 2);
    }
}
