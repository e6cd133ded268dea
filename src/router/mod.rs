//! # Tabla de Rutas
//! src/router/mod.rs
//!
//! Mapea paths HTTP a handlers registrados en proceso.
//!
//! El match es por igualdad exacta de strings, case-sensitive: sin patrones,
//! sin prefijos, sin parámetros. La tabla se llena una sola vez durante el
//! arranque y después solo se lee, por lo que compartirla entre threads de
//! conexión no requiere locks.

use std::collections::HashMap;

/// Tipo de función handler
///
/// Un handler no recibe argumentos y retorna el body (HTML) de la respuesta
pub type Handler = fn() -> String;

/// Tabla de rutas: path exacto → handler
pub struct Router {
    routes: HashMap<String, Handler>,
}

impl Router {
    /// Crea una tabla de rutas vacía
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registra una ruta con su handler
    ///
    /// Si el path ya estaba registrado, el handler anterior se sobrescribe.
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::router::Router;
    ///
    /// fn saludo() -> String {
    ///     "<h1>Hola</h1>".to_string()
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register("/saludo", saludo);
    /// ```
    pub fn register(&mut self, path: &str, handler: Handler) {
        self.routes.insert(path.to_string(), handler);
    }

    /// Busca el handler registrado para un path
    ///
    /// Retorna `None` si el path no está registrado; el despacho cae
    /// entonces al resolutor de archivos estáticos.
    pub fn lookup(&self, path: &str) -> Option<Handler> {
        self.routes.get(path).copied()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
