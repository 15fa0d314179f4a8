//! Settings adapter
//!
//! Deserializes a plain settings tree from JSON or TOML and applies it
//! to a document in one pass. The translation visits fields in a fixed
//! order, so equal settings values always render to identical bytes no
//! matter where they came from.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use nginxgen_core::{
    Block, Config, CorsOptions, HttpOptions, LocationMatch, ServerBlock, UpstreamServerOptions,
};

/// Root of the settings tree, mirroring the document layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user: Option<String>,
    pub worker_processes: Option<String>,
    pub pid: Option<String>,
    pub error_log: Option<String>,
    pub include: Vec<String>,
    pub directives: Vec<String>,
    pub events: Option<EventsSettings>,
    pub http: Option<HttpSettings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsSettings {
    pub worker_connections: Option<u32>,
    pub multi_accept: Option<bool>,
    #[serde(rename = "use")]
    pub use_method: Option<String>,
    pub directives: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    #[serde(flatten)]
    pub options: HttpOptions,
    pub directives: Vec<String>,
    pub upstreams: Vec<UpstreamSettings>,
    pub maps: Vec<MapSettings>,
    pub servers: Vec<ServerSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    pub name: String,
    #[serde(default)]
    pub least_conn: bool,
    #[serde(default)]
    pub ip_hash: bool,
    #[serde(default)]
    pub keepalive: Option<u32>,
    #[serde(default)]
    pub servers: Vec<UpstreamServerSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamServerSettings {
    pub address: String,
    #[serde(flatten)]
    pub options: UpstreamServerOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    pub source: String,
    pub output: String,
    #[serde(default)]
    pub hostnames: bool,
    #[serde(default)]
    pub entries: Vec<MapEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub listen: Vec<String>,
    pub server_name: Vec<String>,
    pub root: Option<String>,
    pub index: Vec<String>,
    pub directives: Vec<String>,
    pub locations: Vec<LocationSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSettings {
    pub path: String,
    #[serde(default)]
    pub matcher: LocationMatch,
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub proxy_pass: Option<String>,
    #[serde(default)]
    pub try_files: Vec<String>,
    #[serde(default)]
    pub cors: Option<CorsOptions>,
    #[serde(default)]
    pub directives: Vec<String>,
}

impl Settings {
    /// Apply this settings tree to a fresh document.
    pub fn build(&self) -> Config {
        let mut config = Config::new();
        if let Some(v) = &self.user {
            config.user(v);
        }
        if let Some(v) = &self.worker_processes {
            config.worker_processes(v);
        }
        if let Some(v) = &self.pid {
            config.pid(v);
        }
        if let Some(v) = &self.error_log {
            config.error_log(v);
        }
        for path in &self.include {
            config.include(path);
        }
        for line in &self.directives {
            config.append(line);
        }

        if let Some(events) = &self.events {
            let block = config.events();
            if let Some(n) = events.worker_connections {
                block.worker_connections(n);
            }
            if let Some(v) = events.multi_accept {
                block.multi_accept(v);
            }
            if let Some(m) = &events.use_method {
                block.use_method(m);
            }
            for line in &events.directives {
                block.append(line);
            }
        }

        if let Some(http) = &self.http {
            let block = config.http();
            block.merge_options(&http.options);
            for line in &http.directives {
                block.append(line);
            }
            for upstream in &http.upstreams {
                let pool = block.add_upstream(&upstream.name);
                if upstream.least_conn {
                    pool.least_conn();
                }
                if upstream.ip_hash {
                    pool.ip_hash();
                }
                for member in &upstream.servers {
                    pool.server(&member.address, &member.options);
                }
                if let Some(n) = upstream.keepalive {
                    pool.keepalive(n);
                }
            }
            for map in &http.maps {
                let section = block.add_map(&map.source, &map.output);
                if map.hostnames {
                    section.hostnames();
                }
                for entry in &map.entries {
                    section.entry(&entry.key, &entry.value);
                }
            }
            for server in &http.servers {
                apply_server(block.add_server(), server);
            }
        }

        tracing::debug!(
            servers = self.http.as_ref().map_or(0, |h| h.servers.len()),
            "built configuration from settings"
        );
        config
    }
}

fn apply_server(section: &mut ServerBlock, settings: &ServerSettings) {
    for address in &settings.listen {
        section.listen_addr(address);
    }
    if !settings.server_name.is_empty() {
        let names: Vec<&str> = settings.server_name.iter().map(String::as_str).collect();
        section.server_name(&names);
    }
    if let Some(v) = &settings.root {
        section.root(v);
    }
    if !settings.index.is_empty() {
        let files: Vec<&str> = settings.index.iter().map(String::as_str).collect();
        section.index(&files);
    }
    for line in &settings.directives {
        section.append(line);
    }
    for location in &settings.locations {
        let block = section.add_location_matched(&location.path, location.matcher);
        if let Some(v) = &location.root {
            block.root(v);
        }
        if let Some(v) = &location.alias {
            block.alias(v);
        }
        if let Some(v) = &location.proxy_pass {
            block.proxy_pass(v);
        }
        if !location.try_files.is_empty() {
            let targets: Vec<&str> = location.try_files.iter().map(String::as_str).collect();
            block.try_files(&targets);
        }
        if let Some(cors) = &location.cors {
            block.cors(cors);
        }
        for line in &location.directives {
            block.append(line);
        }
    }
}

/// Settings loader for the supported input formats.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a file, dispatching on the extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        tracing::info!("Loading settings from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Settings(format!("Failed to read settings file: {}", e)))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "json" => Self::from_json(&content),
            "toml" => Self::from_toml(&content),
            _ => Err(Error::Settings(format!("Unknown settings format: {ext}"))),
        }
    }

    /// Parse JSON settings
    pub fn from_json(content: &str) -> Result<Settings> {
        serde_json::from_str(content).map_err(|e| Error::Settings(format!("Invalid JSON: {}", e)))
    }

    /// Parse TOML settings
    pub fn from_toml(content: &str) -> Result<Settings> {
        toml::from_str(content).map_err(|e| Error::Settings(format!("Invalid TOML: {}", e)))
    }
}
