//! # Construcción de Responses HTTP
//!
//! Este módulo construye la secuencia de bytes exacta que se escribe de
//! vuelta al socket. El framing es fijo: status line, `Content-Type`,
//! `Content-Length` y línea vacía, en ese orden y con ese casing, para ser
//! compatible con clientes simples que indexan los headers textualmente.
//!
//! ## Formato generado
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 12\r\n
//! \r\n
//! <h1>Hi</h1>
//! ```
//!
//! `Content-Length` siempre es exactamente `body.len()`: el cliente nunca ve
//! un stream truncado, ni siquiera en los caminos de error.

use super::StatusCode;

/// Body fijo de las respuestas 404
pub const NOT_FOUND_BODY: &str = "<html><body><h1>404 Not Found</h1></body></html>";

/// Body fijo de las respuestas 500
pub const SERVER_ERROR_BODY: &str =
    "<html><body><h1>500 Internal Server Error</h1></body></html>";

/// Representa una response HTTP completa, lista para serializar
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado (200, 404, 500)
    status: StatusCode,

    /// Valor del header Content-Type
    content_type: String,

    /// Cuerpo de la respuesta (puede ser binario)
    body: Vec<u8>,
}

impl Response {
    /// Crea una response con status, content type y body explícitos
    pub fn new(status: StatusCode, content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body,
        }
    }

    /// Response 200 con body HTML (forma de conveniencia para handlers)
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::{Response, StatusCode};
    ///
    /// let response = Response::html("<h1>Hola</h1>");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.content_type(), "text/html");
    /// ```
    pub fn html(body: &str) -> Self {
        Self::new(StatusCode::Ok, "text/html", body.as_bytes().to_vec())
    }

    /// Response 200 con body binario (forma de conveniencia para archivos)
    pub fn file(body: Vec<u8>, content_type: &str) -> Self {
        Self::new(StatusCode::Ok, content_type, body)
    }

    /// Response 404 con el body HTML fijo
    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NotFound,
            "text/html",
            NOT_FOUND_BODY.as_bytes().to_vec(),
        )
    }

    /// Response 500 con el body HTML fijo
    pub fn server_error() -> Self {
        Self::new(
            StatusCode::InternalServerError,
            "text/html",
            SERVER_ERROR_BODY.as_bytes().to_vec(),
        )
    }

    /// Convierte la response a los bytes exactos a enviar por el socket
    ///
    /// # Ejemplo
    /// ```
    /// use web_server::http::Response;
    ///
    /// let bytes = Response::html("Hola").to_bytes();
    /// let text = String::from_utf8(bytes).unwrap();
    /// assert_eq!(
    ///     text,
    ///     "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 4\r\n\r\nHola"
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_type,
            self.body.len()
        );

        let mut result = Vec::with_capacity(header.len() + self.body.len());
        result.extend_from_slice(header.as_bytes());
        result.extend_from_slice(&self.body);
        result
    }

    /// Obtiene el código de estado de la response
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene el Content-Type de la response
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
