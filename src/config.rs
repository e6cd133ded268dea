//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor HTTP con soporte
//! para argumentos CLI y variables de entorno.
//!
//! La configuración se fija ANTES de que el servidor empiece a aceptar
//! conexiones; una vez corriendo el accept loop se trata como inmutable.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./web_server --port 35000 \
//!   --static-root ./public \
//!   --handler-errors strict
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=35000 STATIC_ROOT=./public ./web_server
//! ```

use clap::{Parser, ValueEnum};

/// Política ante un handler que falla (panic) durante su invocación
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HandlerErrorPolicy {
    /// Responder 200 con un body de error fijo (comportamiento permisivo:
    /// el cliente siempre recibe una respuesta "exitosa")
    Transparent,

    /// Responder 500 Internal Server Error
    Strict,
}

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "web_server")]
#[command(about = "Servidor HTTP/1.1 minimalista con handlers registrables y archivos estáticos")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "35000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz desde el que se sirven los archivos estáticos
    #[arg(long = "static-root", default_value = "./public", env = "STATIC_ROOT")]
    pub static_root: String,

    /// Qué responder cuando un handler registrado falla al invocarse
    #[arg(long = "handler-errors", value_enum, default_value = "transparent", env = "HANDLER_ERRORS")]
    pub handler_errors: HandlerErrorPolicy,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    ///
    /// # Ejemplo
    /// ```no_run
    /// use web_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use web_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:35000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Cambia el directorio de archivos estáticos
    ///
    /// Un valor de `/` se ignora: protege contra borrar la raíz configurada
    /// por accidente.
    ///
    /// # Ejemplo
    /// ```rust
    /// use web_server::config::Config;
    ///
    /// let mut config = Config::default();
    /// config.set_static_root("./www");
    /// assert_eq!(config.static_root, "./www");
    ///
    /// config.set_static_root("/");
    /// assert_eq!(config.static_root, "./www"); // sin cambios
    /// ```
    pub fn set_static_root(&mut self, path: &str) {
        if path != "/" {
            self.static_root = path.to_string();
            println!("[*] Archivos estáticos servirán desde: {}", self.static_root);
        }
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.static_root.trim().is_empty() {
            return Err("Static root must not be empty".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════╗");
        println!("║       Web Server HTTP/1.1 Configuration      ║");
        println!("╚══════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!("   Static root:  {}", self.static_root);
        println!();
        println!("⚙️  Dispatch:");
        match self.handler_errors {
            HandlerErrorPolicy::Transparent => {
                println!("   Handler errors: transparent (200 con body de error)");
            }
            HandlerErrorPolicy::Strict => {
                println!("   Handler errors: strict (500 Internal Server Error)");
            }
        }
        println!();
        println!("════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 35000,
            host: "0.0.0.0".to_string(),
            static_root: "./public".to_string(),
            handler_errors: HandlerErrorPolicy::Transparent,
        }
    }
}
