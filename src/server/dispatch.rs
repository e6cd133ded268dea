//! # Despacho de Requests
//! src/server/dispatch.rs
//!
//! Decide si el path de una request resuelve a un handler registrado o a un
//! archivo estático, y garantiza que TODA entrada (incluyendo requests
//! degradadas y handlers que fallan) termina en una response completa.

use crate::config::{Config, HandlerErrorPolicy};
use crate::http::{Request, Response, StatusCode};
use crate::router::Router;
use crate::server::static_files;
use std::panic;

/// Body fijo cuando un handler falla al invocarse
const INVOCATION_ERROR_BODY: &str = "<h1>Error al invocar servicio</h1>";

/// Despacha una request parseada a su response
///
/// - Path registrado en la tabla de rutas: se invoca el handler y su string
///   se envuelve como response HTML 200. Si el handler falla (panic), el
///   fallo NO se propaga a la conexión: se responde según la política
///   configurada (200 con body de error, o 500).
/// - Path no registrado (o request degradada sin path): se delega al
///   resolutor de archivos estáticos.
///
/// Ambas ramas retornan siempre una response bien formada.
pub fn dispatch(request: &Request, router: &Router, config: &Config) -> Response {
    let path = request.path().unwrap_or("");

    if let Some(handler) = router.lookup(path) {
        return match panic::catch_unwind(handler) {
            Ok(body) => Response::html(&body),
            Err(_) => {
                eprintln!("   ❌ Handler falló para {}", path);
                invocation_error(config.handler_errors)
            }
        };
    }

    static_files::resolve(path, &config.static_root)
}

/// Response para un handler que falló, según la política configurada
fn invocation_error(policy: HandlerErrorPolicy) -> Response {
    match policy {
        HandlerErrorPolicy::Transparent => Response::html(INVOCATION_ERROR_BODY),
        HandlerErrorPolicy::Strict => Response::new(
            StatusCode::InternalServerError,
            "text/html",
            INVOCATION_ERROR_BODY.as_bytes().to_vec(),
        ),
    }
}
