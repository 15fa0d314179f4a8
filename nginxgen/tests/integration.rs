use nginxgen::{
    Config, CorsOptions, Document, HttpOptions, ServersConfig, SettingsLoader,
    UpstreamServerOptions,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn test_full_document_renders_exact_text() {
    init_tracing();

    let mut config = Config::new();
    config.user("nginx");
    config.events().worker_connections(1024);
    let server = config.http().add_server();
    server.listen(80);
    server.add_location("/").root("/var/www/html");

    let expected = "\
user nginx;

events {
    worker_connections 1024;
}

http {
    server {
        listen 80;

        location / {
            root /var/www/html;
        }
    }
}
";
    assert_eq!(config.render(), expected);
}

#[test]
fn test_reverse_proxy_document() {
    let mut config = Config::new();
    config.user("nginx").worker_processes("auto");
    config.events().worker_connections(4096);

    let http = config.http();
    http.merge_options(&HttpOptions {
        sendfile: Some(true),
        keepalive_timeout: Some(65),
        ..Default::default()
    });

    let pool = http.add_upstream("backend");
    pool.least_conn();
    pool.server(
        "10.0.0.1:8080",
        &UpstreamServerOptions {
            weight: Some(3),
            ..Default::default()
        },
    );
    pool.server(
        "10.0.0.2:8080",
        &UpstreamServerOptions {
            backup: true,
            ..Default::default()
        },
    );

    http.add_map("$http_upgrade", "$connection_upgrade")
        .default_value("upgrade")
        .entry("''", "close");

    let server = http.add_server();
    server.listen(80).server_name(&["api.example.com"]);
    let api = server.add_location("/");
    api.proxy_pass("http://backend")
        .proxy_set_header("Host", "$host")
        .websocket();
    api.cors(&CorsOptions::default());

    let text = config.render();

    // Child collection order inside http: upstreams, maps, servers.
    let upstream_at = text.find("upstream backend {").unwrap();
    let map_at = text.find("map $http_upgrade $connection_upgrade {").unwrap();
    let server_at = text.find("    server {").unwrap();
    assert!(upstream_at < map_at && map_at < server_at);

    // Typed options come first inside http.
    assert!(text.contains("http {\n    sendfile on;\n    keepalive_timeout 65;\n\n"));

    // Pool members keep call order, modifiers keep the fixed tail order.
    assert!(text.contains(
        "        least_conn;\n        server 10.0.0.1:8080 weight=3;\n        server 10.0.0.2:8080 backup;"
    ));

    // CORS defaults: five header lines, credentials omitted.
    assert_eq!(text.matches("add_header Access-Control-").count(), 5);
    assert!(!text.contains("Access-Control-Allow-Credentials"));

    assert!(text.ends_with("}\n"));
    assert!(!text.ends_with("}\n\n"));
}

#[test]
fn test_servers_only_document() {
    let mut config = ServersConfig::new();
    config.include("/etc/nginx/mime.types");

    let site = config.add_server();
    site.listen(443)
        .server_name(&["example.com"])
        .ssl_certificate("/etc/ssl/example.crt")
        .ssl_certificate_key("/etc/ssl/example.key");
    site.add_exact_location("/health").return_with(200, "'ok'");

    let redirect = config.add_server();
    redirect.listen(80).server_name(&["example.com"]);
    redirect.return_with(301, "https://example.com$request_uri");

    let expected = "\
include /etc/nginx/mime.types;

server {
    listen 443;
    server_name example.com;
    ssl_certificate /etc/ssl/example.crt;
    ssl_certificate_key /etc/ssl/example.key;

    location = /health {
        return 200 'ok';
    }
}

server {
    listen 80;
    server_name example.com;
    return 301 https://example.com$request_uri;
}
";
    assert_eq!(config.render(), expected);
}

#[test]
fn test_settings_and_fluent_paths_agree() {
    init_tracing();

    let settings = SettingsLoader::from_json(
        r#"{
            "user": "nginx",
            "events": { "worker_connections": 1024 },
            "http": {
                "servers": [
                    {
                        "listen": ["80"],
                        "locations": [ { "path": "/", "root": "/var/www/html" } ]
                    }
                ]
            }
        }"#,
    )
    .unwrap();

    let mut fluent = Config::new();
    fluent.user("nginx");
    fluent.events().worker_connections(1024);
    let server = fluent.http().add_server();
    server.listen(80);
    server.add_location("/").root("/var/www/html");

    assert_eq!(settings.build().render(), fluent.render());
}

#[test]
fn test_append_normalizes_separator_end_to_end() {
    let mut config = Config::new();
    config.append("user nginx").append("pid /run/nginx.pid;");
    assert_eq!(config.render(), "user nginx;\npid /run/nginx.pid;\n");
}

#[test]
fn test_render_twice_is_byte_identical() {
    let mut config = Config::new();
    config.user("nginx");
    let http = config.http();
    http.add_upstream("backend").random(true);
    http.add_server().listen(80);
    assert_eq!(config.render(), config.render());
}
