//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Accept loop del servidor. Cada conexión aceptada se procesa en su propio
//! thread: parsear la request, despachar, escribir la response y cerrar.
//!
//! La tabla de rutas y la configuración se fijan antes de servir y después
//! solo se leen, así que se comparten entre threads con `Arc` sin locks.

use crate::config::Config;
use crate::http::Request;
use crate::router::Router;
use crate::server::dispatch::dispatch;
use std::io::{BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Servidor HTTP/1.1
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor con su configuración y su tabla de rutas
    ///
    /// La tabla se construye ANTES de llamar a `run`: no hay registro de
    /// rutas una vez que el servidor acepta conexiones.
    pub fn new(config: Config, router: Router) -> Self {
        Self {
            config: Arc::new(config),
            router: Arc::new(router),
        }
    }

    /// Arranca el accept loop (bloquea el thread actual)
    ///
    /// Fallar el bind del puerto es fatal y se propaga al llamador. Los
    /// errores de una conexión individual solo se loggean: el accept loop
    /// sigue atendiendo al resto.
    pub fn run(&self) -> std::io::Result<()> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address)?;
        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo concurrente: un thread por conexión\n");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let config = Arc::clone(&self.config);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());

                    println!(" ✅ Nueva conexión desde: {}", peer_addr);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router, config) {
                            eprintln!("   ❌ Error en la conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Ciclo completo de una conexión: parsear, despachar, responder, cerrar
    ///
    /// Toda entrada produce una response completa antes de escribir: una
    /// request line malformada o un stream vacío terminan en un 404 bien
    /// formado, nunca en un stream truncado.
    fn handle_connection(
        mut stream: TcpStream,
        router: Arc<Router>,
        config: Arc<Config>,
    ) -> std::io::Result<()> {
        let start = Instant::now();

        let mut reader = BufReader::new(stream.try_clone()?);
        let request = Request::read_from(&mut reader)?;

        println!(
            "   ✅ {} {}",
            request.method().unwrap_or("-"),
            request.path().unwrap_or("-")
        );

        let response = dispatch(&request, &router, &config);

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        let latency = start.elapsed();
        println!(
            "   ✅ {} ({:.2}ms)\n",
            response.status(),
            latency.as_secs_f64() * 1000.0
        );

        // El drop del stream cierra la conexión
        Ok(())
    }
}
