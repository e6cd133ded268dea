//! # Web Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor. Parsea la configuración, registra las
//! rutas de demostración y arranca el accept loop.

use web_server::config::Config;
use web_server::handlers;
use web_server::router::Router;
use web_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Web Server HTTP/1.1");
    println!("=================================\n");

    // Configuración desde CLI y variables de entorno
    let config = Config::new();
    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }
    config.print_summary();

    // Registro explícito de rutas: la tabla queda fija antes de servir
    let mut router = Router::new();
    router.register("/greeting", handlers::greeting_handler);
    router.register("/product/allProducts", handlers::products_handler);

    // Arrancar el servidor (bloquea; fallar el bind es fatal)
    let server = Server::new(config, router);
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
