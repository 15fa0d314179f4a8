//! Nginxgen
//!
//! Programmatic nginx configuration generation: build a tree of
//! blocks through fluent calls, then render it to deterministic,
//! nginx-grammar text. No directive validation is performed and no
//! configuration is ever parsed back in; generation is one-way.
//!
//! # Example
//!
//! ```rust
//! use nginxgen::{Config, Document};
//!
//! let mut config = Config::new();
//! config.user("nginx");
//! config.events().worker_connections(1024);
//! let server = config.http().add_server();
//! server.listen(80);
//! server.add_location("/").root("/var/www/html");
//!
//! let text = config.render();
//! assert!(text.ends_with('\n'));
//! ```
//!
//! Documents can also be described as plain JSON or TOML settings and
//! built in one call:
//!
//! ```rust
//! use nginxgen::{Document, SettingsLoader};
//!
//! let settings = SettingsLoader::from_toml(r#"
//!     user = "nginx"
//!
//!     [events]
//!     worker_connections = 1024
//! "#).unwrap();
//! let text = settings.build().render();
//! assert!(text.contains("worker_connections 1024;"));
//! ```

pub mod error;
pub mod settings;

pub use error::{Error, Result};
pub use settings::{
    EventsSettings, HttpSettings, LocationSettings, MapEntry, MapSettings, ServerSettings,
    Settings, SettingsLoader, UpstreamServerSettings, UpstreamSettings,
};

pub use nginxgen_core::{
    Block, CacheOptions, CommonOptions, CompressionOptions, Config, CorsOptions, DirectiveStore,
    Document, EventsBlock, HttpBlock, HttpOptions, IfBlock, LocationBlock, LocationMatch,
    MapBlock, ServerBlock, ServersConfig, UpstreamBlock, UpstreamServerOptions,
};

use std::path::Path;

/// Full pipeline: settings file in, rendered configuration text out.
pub fn generate_from_file(path: impl AsRef<Path>) -> Result<String> {
    let settings = SettingsLoader::load(path)?;
    Ok(settings.build().render())
}

/// Render a document and write it to a file.
pub fn save<D: Document, P: AsRef<Path>>(document: &D, path: P) -> Result<()> {
    std::fs::write(path.as_ref(), document.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_from_file() {
        let path = std::env::temp_dir().join("nginxgen-lib-test.json");
        std::fs::write(
            &path,
            r#"{ "user": "nginx", "events": { "worker_connections": 256 } }"#,
        )
        .unwrap();

        let text = generate_from_file(&path).unwrap();
        assert!(text.starts_with("user nginx;\n\nevents {"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_writes_rendered_document() {
        let mut config = Config::new();
        config.user("www-data");

        let path = std::env::temp_dir().join("nginxgen-save-test.conf");
        save(&config, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, config.render());

        let _ = std::fs::remove_file(&path);
    }
}
