//! Nginxgen core
//!
//! Block tree and deterministic rendering engine for nginx-style
//! configuration text. Callers build a tree of blocks through fluent
//! append/merge/add-child operations, then render it depth-first; the
//! same tree always serializes to the same bytes.
//!
//! # Example
//!
//! ```rust
//! use nginxgen_core::{Config, Document};
//!
//! let mut config = Config::new();
//! config.user("nginx");
//! config.events().worker_connections(1024);
//! let server = config.http().add_server();
//! server.listen(80);
//! server.add_location("/").root("/var/www/html");
//!
//! let text = config.render();
//! assert!(text.contains("worker_connections 1024;"));
//! ```

pub mod block;
pub mod directive;
pub mod document;
pub mod options;
pub mod render;

pub use block::{
    Block, EventsBlock, HttpBlock, IfBlock, LocationBlock, LocationMatch, MapBlock, ServerBlock,
    UpstreamBlock,
};
pub use directive::DirectiveStore;
pub use document::{Config, Document, ServersConfig};
pub use options::{
    CacheOptions, CommonOptions, CompressionOptions, CorsOptions, HttpOptions,
    UpstreamServerOptions,
};
