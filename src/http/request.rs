//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Este módulo lee la request line y los headers directamente del stream de
//! la conexión, línea por línea, hasta la línea vacía que termina el bloque
//! de headers.
//!
//! ## Formato aceptado
//!
//! ```text
//! GET /path?query=ignorada HTTP/1.1\r\n
//! Host: localhost:35000\r\n
//! Content-Length: 0\r\n
//! \r\n
//! ```
//!
//! Del target solo se conserva el componente path (decodificado); la query y
//! el fragment se descartan. De los headers solo se captura `Content-Length`
//! (informativo, nunca se lee un body). El resto se ignora.
//!
//! Una request line malformada NO es un error fatal: produce una request
//! degradada sin path, que no matchea ninguna ruta ni ningún archivo y
//! termina en un 404 bien formado.

use std::io::BufRead;

/// Errores de parsing de la request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// La request line no tiene al menos método y target
    InvalidRequestLine,

    /// El target no pudo decodificarse como path válido
    InvalidTarget(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidTarget(t) => write!(f, "Invalid request target: {}", t),
        }
    }
}

impl std::error::Error for ParseError {}

/// Representa una request HTTP parseada (solo lo que el despacho necesita)
///
/// Los campos son `Option` porque una request line malformada, o un stream
/// que se cierra antes de mandar nada, degradan la request en vez de
/// abortarla: `method` y `path` quedan en `None` y el despacho responde 404.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP (GET, POST, ...). Solo se registra en el log; el despacho
    /// trata todos los métodos igual
    method: Option<String>,

    /// Componente path del target, percent-decodificado (ej: "/productos")
    path: Option<String>,

    /// Valor del header Content-Length, si vino. Capturado pero no usado:
    /// este servidor no lee bodies
    content_length: Option<usize>,
}

impl Request {
    /// Lee una request desde el stream de una conexión
    ///
    /// Consume líneas (terminadas en CRLF o LF) hasta la línea vacía o el
    /// fin del stream. Nunca lee más allá de la línea vacía: el body, si
    /// existe, queda sin consumir en el stream.
    ///
    /// # Ejemplo
    /// ```
    /// use std::io::Cursor;
    /// use web_server::http::Request;
    ///
    /// let raw = b"GET /saludo HTTP/1.1\r\nHost: localhost\r\n\r\n";
    /// let request = Request::read_from(&mut Cursor::new(&raw[..])).unwrap();
    ///
    /// assert_eq!(request.method(), Some("GET"));
    /// assert_eq!(request.path(), Some("/saludo"));
    /// ```
    pub fn read_from<R: BufRead>(reader: &mut R) -> std::io::Result<Self> {
        let mut method = None;
        let mut path = None;
        let mut content_length = None;
        let mut first_line = true;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let bytes_read = reader.read_until(b'\n', &mut buf)?;
            if bytes_read == 0 {
                // El stream se cerró antes de la línea vacía
                break;
            }

            // Bytes arbitrarios no deben tumbar el parser
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches('\n').trim_end_matches('\r');

            if line.is_empty() {
                // Línea vacía: fin del bloque de headers
                break;
            }

            if first_line {
                first_line = false;
                match Self::parse_request_line(line) {
                    Ok((m, p)) => {
                        method = Some(m);
                        path = Some(p);
                    }
                    Err(e) => {
                        // Request degradada: sin path no matchea nada → 404
                        eprintln!("   ❌ Request line inválida: {:?} ({})", line, e);
                    }
                }
                continue;
            }

            if let Some(value) = line.strip_prefix("Content-Length:") {
                content_length = value.trim().parse().ok();
            }
            // Cualquier otro header se ignora
        }

        Ok(Request {
            method,
            path,
            content_length,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path?query HTTP/1.1`. Se separa por espacio y se
    /// exigen al menos método y target; la versión no se valida.
    fn parse_request_line(line: &str) -> Result<(String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        if parts.len() < 2 {
            return Err(ParseError::InvalidRequestLine);
        }

        let method = parts[0].to_string();
        let path = Self::parse_target_path(parts[1])?;

        Ok((method, path))
    }

    /// Extrae el componente path del request target
    ///
    /// Descarta fragment y query, y decodifica el percent-encoding.
    ///
    /// Ejemplo: "/lista%20negra?x=1#frag" → "/lista negra"
    fn parse_target_path(target: &str) -> Result<String, ParseError> {
        let without_fragment = target.split('#').next().unwrap_or("");
        let without_query = without_fragment.split('?').next().unwrap_or("");

        match urlencoding::decode(without_query) {
            Ok(decoded) => Ok(decoded.into_owned()),
            Err(_) => Err(ParseError::InvalidTarget(target.to_string())),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP, si la request line fue válida
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Obtiene el path de la request, si la request line fue válida
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Obtiene el Content-Length declarado, si vino y era numérico
    pub fn content_length(&self) -> Option<usize> {
        self.content_length
    }
}
