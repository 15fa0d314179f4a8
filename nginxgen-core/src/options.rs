//! Typed option sets
//!
//! Schema-constrained option records, in contrast to free-form
//! directives: every slot is independently present-or-absent, partial
//! merges overwrite only the slots supplied, and rendering follows the
//! fixed schema order rather than merge call order.

use serde::{Deserialize, Serialize};

pub(crate) fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Typed option set of the `http` section.
///
/// Slots render in the field order below, one line per present slot,
/// ahead of any free-form directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpOptions {
    pub sendfile: Option<bool>,
    pub tcp_nopush: Option<bool>,
    pub tcp_nodelay: Option<bool>,
    pub keepalive_timeout: Option<u32>,
    pub keepalive_requests: Option<u32>,
    pub types_hash_max_size: Option<u32>,
    pub server_tokens: Option<bool>,
    pub client_max_body_size: Option<String>,
    pub default_type: Option<String>,
    pub index: Option<Vec<String>>,
}

impl HttpOptions {
    /// Overwrite only the slots present in `other`. Merge call order
    /// never affects rendering; only the final set of present slots
    /// does.
    pub fn merge(&mut self, other: &HttpOptions) {
        if other.sendfile.is_some() {
            self.sendfile = other.sendfile;
        }
        if other.tcp_nopush.is_some() {
            self.tcp_nopush = other.tcp_nopush;
        }
        if other.tcp_nodelay.is_some() {
            self.tcp_nodelay = other.tcp_nodelay;
        }
        if other.keepalive_timeout.is_some() {
            self.keepalive_timeout = other.keepalive_timeout;
        }
        if other.keepalive_requests.is_some() {
            self.keepalive_requests = other.keepalive_requests;
        }
        if other.types_hash_max_size.is_some() {
            self.types_hash_max_size = other.types_hash_max_size;
        }
        if other.server_tokens.is_some() {
            self.server_tokens = other.server_tokens;
        }
        if other.client_max_body_size.is_some() {
            self.client_max_body_size = other.client_max_body_size.clone();
        }
        if other.default_type.is_some() {
            self.default_type = other.default_type.clone();
        }
        if other.index.is_some() {
            self.index = other.index.clone();
        }
    }

    /// Render the present slots in schema order, one indented line
    /// each, without a trailing newline.
    pub fn render(&self, depth: usize) -> String {
        let pad = crate::render::pad(depth);
        let mut lines = Vec::new();
        if let Some(v) = self.sendfile {
            lines.push(format!("{pad}sendfile {};", on_off(v)));
        }
        if let Some(v) = self.tcp_nopush {
            lines.push(format!("{pad}tcp_nopush {};", on_off(v)));
        }
        if let Some(v) = self.tcp_nodelay {
            lines.push(format!("{pad}tcp_nodelay {};", on_off(v)));
        }
        if let Some(v) = self.keepalive_timeout {
            lines.push(format!("{pad}keepalive_timeout {v};"));
        }
        if let Some(v) = self.keepalive_requests {
            lines.push(format!("{pad}keepalive_requests {v};"));
        }
        if let Some(v) = self.types_hash_max_size {
            lines.push(format!("{pad}types_hash_max_size {v};"));
        }
        if let Some(v) = self.server_tokens {
            lines.push(format!("{pad}server_tokens {};", on_off(v)));
        }
        if let Some(v) = &self.client_max_body_size {
            lines.push(format!("{pad}client_max_body_size {v};"));
        }
        if let Some(v) = &self.default_type {
            lines.push(format!("{pad}default_type {v};"));
        }
        if let Some(v) = &self.index {
            lines.push(format!("{pad}index {};", v.join(" ")));
        }
        lines.join("\n")
    }
}

/// Cross-cutting options translated into directives by
/// [`Block::merge_common`](crate::Block::merge_common).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonOptions {
    pub access_log: Option<String>,
    pub error_log: Option<String>,
    pub client_max_body_size: Option<String>,
    pub keepalive_timeout: Option<u32>,
    pub send_timeout: Option<u32>,
    pub sendfile: Option<bool>,
    pub tcp_nopush: Option<bool>,
    pub tcp_nodelay: Option<bool>,
}

/// Gzip options translated into directives by
/// [`Block::merge_compression`](crate::Block::merge_compression).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionOptions {
    pub enabled: Option<bool>,
    pub comp_level: Option<u32>,
    pub min_length: Option<u32>,
    pub types: Option<Vec<String>>,
    pub vary: Option<bool>,
    pub proxied: Option<String>,
}

/// Response caching options translated into directives by
/// [`Block::merge_cache`](crate::Block::merge_cache).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheOptions {
    pub expires: Option<String>,
    pub cache_control: Option<String>,
    pub etag: Option<bool>,
    pub open_file_cache: Option<String>,
}

/// Modifiers for one upstream pool member.
///
/// Present modifiers are appended to the `server` directive in a fixed
/// tail order: weight, max_fails, fail_timeout, backup, down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamServerOptions {
    pub weight: Option<u32>,
    pub max_fails: Option<u32>,
    pub fail_timeout: Option<String>,
    pub backup: bool,
    pub down: bool,
}

/// Options for the CORS header preset.
///
/// [`directives`](Self::directives) always emits headers in the same
/// order: Allow-Origin, Allow-Methods, Allow-Headers, Expose-Headers,
/// Allow-Credentials (only when `credentials` is set), Max-Age — five
/// lines with the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    pub origins: Vec<String>,
    pub methods: Vec<String>,
    pub headers: Vec<String>,
    pub expose_headers: Vec<String>,
    pub credentials: bool,
    pub max_age: u64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: strings(&["*"]),
            methods: strings(&["GET", "POST", "OPTIONS"]),
            headers: strings(&[
                "DNT",
                "User-Agent",
                "X-Requested-With",
                "If-Modified-Since",
                "Cache-Control",
                "Content-Type",
                "Range",
            ]),
            expose_headers: strings(&["Content-Length", "Content-Range"]),
            credentials: false,
            max_age: 1_728_000,
        }
    }
}

impl CorsOptions {
    /// The `add_header` directive sequence for these options.
    pub fn directives(&self) -> Vec<String> {
        let mut out = vec![
            format!(
                "add_header Access-Control-Allow-Origin \"{}\"",
                self.origins.join(", ")
            ),
            format!(
                "add_header Access-Control-Allow-Methods \"{}\"",
                self.methods.join(", ")
            ),
            format!(
                "add_header Access-Control-Allow-Headers \"{}\"",
                self.headers.join(", ")
            ),
            format!(
                "add_header Access-Control-Expose-Headers \"{}\"",
                self.expose_headers.join(", ")
            ),
        ];
        if self.credentials {
            out.push("add_header Access-Control-Allow-Credentials \"true\"".to_string());
        }
        out.push(format!("add_header Access-Control-Max-Age {}", self.max_age));
        out
    }
}
