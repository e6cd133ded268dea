//! # Web Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 minimalista implementado desde cero: parsea la request
//! line y los headers directamente del socket, despacha por path exacto a
//! handlers registrados en proceso o a un resolutor de archivos estáticos,
//! y serializa la respuesta byte a byte.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, construcción de responses y tipos MIME
//! - `server`: Accept loop TCP, despacho y archivos estáticos
//! - `router`: Tabla de rutas (path exacto → handler)
//! - `handlers`: Handlers de demostración (saludo y catálogo de productos)
//! - `config`: Configuración por CLI y variables de entorno
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use web_server::config::Config;
//! use web_server::router::Router;
//! use web_server::server::Server;
//!
//! fn saludo() -> String {
//!     "<h1>Hola</h1>".to_string()
//! }
//!
//! let config = Config::default();
//! let mut router = Router::new();
//! router.register("/saludo", saludo);
//!
//! let server = Server::new(config, router);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
