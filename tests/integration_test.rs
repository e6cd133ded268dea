//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Arrancan el servidor real una sola vez en un puerto de prueba, con un
//! static root temporal, y le hablan por TcpStream como un cliente crudo.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use web_server::config::Config;
use web_server::handlers;
use web_server::router::Router;
use web_server::server::Server;

const TEST_PORT: u16 = 35999;

const CSS_CONTENT: &str = "body { color: red; }\n";

fn broken_handler() -> String {
    panic!("handler de demostración que falla")
}

/// Static root temporal compartido por toda la suite
fn server_root() -> &'static TempDir {
    static ROOT: OnceLock<TempDir> = OnceLock::new();
    ROOT.get_or_init(|| {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<h1>Hi</h1>").expect("write index");
        std::fs::write(dir.path().join("styles.css"), CSS_CONTENT).expect("write css");
        dir
    })
}

/// Arranca el servidor una sola vez para toda la suite
fn ensure_server() {
    static STARTED: OnceLock<()> = OnceLock::new();
    STARTED.get_or_init(|| {
        let mut config = Config::default();
        config.host = "127.0.0.1".to_string();
        config.port = TEST_PORT;
        config.set_static_root(server_root().path().to_str().expect("utf8 path"));

        let mut router = Router::new();
        router.register("/greeting", handlers::greeting_handler);
        router.register("/product/allProducts", handlers::products_handler);
        router.register("/roto", broken_handler);

        let server = Server::new(config, router);
        thread::spawn(move || {
            server.run().expect("server run");
        });

        // Dar tiempo al servidor a estar listo
        thread::sleep(Duration::from_millis(100));
    });
}

/// Helper: manda bytes crudos y retorna la response completa
fn send_raw(raw: &[u8]) -> String {
    ensure_server();

    let mut stream = TcpStream::connect(("127.0.0.1", TEST_PORT)).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("read timeout");

    stream.write_all(raw).expect("write request");
    stream.flush().expect("flush");

    let mut response = String::new();
    stream.read_to_string(&mut response).expect("read response");
    response
}

/// Helper: envía un GET y retorna la response completa
fn send_request(path: &str) -> String {
    send_raw(format!("GET {} HTTP/1.1\r\nHost: localhost\r\n\r\n", path).as_bytes())
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    if let Some(pos) = response.find("\r\n\r\n") {
        &response[pos + 4..]
    } else {
        ""
    }
}

/// Helper: extrae el valor de Content-Length de una response
fn content_length(response: &str) -> usize {
    response
        .lines()
        .find_map(|l| l.strip_prefix("Content-Length: "))
        .expect("Content-Length header")
        .trim()
        .parse()
        .expect("numeric Content-Length")
}

#[test]
fn test_registered_route() {
    let response = send_request("/greeting");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"), "got: {}", response);
    assert!(response.contains("Content-Type: text/html\r\n"));
    assert_eq!(extract_body(&response), "<h1>Hola Mundo</h1>");
}

#[test]
fn test_products_route_returns_json_array() {
    let response = send_request("/product/allProducts");

    assert!(response.contains("200 OK"));
    // El body del handler se envuelve como HTML aunque el contenido sea JSON
    assert!(response.contains("Content-Type: text/html\r\n"));

    let body = extract_body(&response);
    assert!(body.starts_with('['), "body: {}", body);
    assert!(body.contains("Radio"));
}

#[test]
fn test_unknown_route_is_404_with_fixed_body() {
    let response = send_request("/nonexistent");

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(response.contains("Content-Type: text/html\r\n"));
    assert_eq!(
        extract_body(&response),
        "<html><body><h1>404 Not Found</h1></body></html>"
    );
}

#[test]
fn test_root_serves_index_exact_bytes() {
    // GET / resuelve al index.html del root y sirve su contenido exacto
    let response = send_request("/");

    assert_eq!(
        response,
        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 11\r\n\r\n<h1>Hi</h1>"
    );
}

#[test]
fn test_static_css_roundtrip() {
    let response = send_request("/styles.css");

    assert!(response.contains("200 OK"));
    assert!(response.contains("Content-Type: text/css\r\n"));
    assert_eq!(extract_body(&response), CSS_CONTENT);
}

#[test]
fn test_malformed_request_line_still_answers_404() {
    let response = send_raw(b"BADREQUEST\r\n\r\n");

    // La conexión no se cae: llega un 404 completo y el socket cierra limpio
    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert_eq!(content_length(&response), extract_body(&response).len());
}

#[test]
fn test_content_length_matches_body_everywhere() {
    for path in ["/greeting", "/styles.css", "/nonexistent", "/"] {
        let response = send_request(path);
        assert_eq!(
            content_length(&response),
            extract_body(&response).len(),
            "path: {}",
            path
        );
    }
}

#[test]
fn test_broken_handler_answers_200_with_error_body() {
    // Política por defecto: transparente
    let response = send_request("/roto");

    assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(extract_body(&response), "<h1>Error al invocar servicio</h1>");
}

#[test]
fn test_method_does_not_restrict_routing() {
    let response = send_raw(b"POST /greeting HTTP/1.1\r\nHost: x\r\n\r\n");

    assert!(response.contains("200 OK"));
    assert_eq!(extract_body(&response), "<h1>Hola Mundo</h1>");
}

#[test]
fn test_query_string_is_ignored_for_routing() {
    let response = send_request("/greeting?nombre=Ana");

    assert!(response.contains("200 OK"));
    assert_eq!(extract_body(&response), "<h1>Hola Mundo</h1>");
}

#[test]
fn test_traversal_is_rejected() {
    let response = send_request("/../Cargo.toml");

    assert!(response.starts_with("HTTP/1.1 404 Not Found\r\n"));
}

#[test]
fn test_multiple_requests_sequentially() {
    for i in 0..5 {
        let response = send_request("/greeting");
        assert!(response.contains("200 OK"), "Request {} failed", i);
    }
}
