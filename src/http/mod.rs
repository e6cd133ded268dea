//! # Módulo HTTP
//!
//! Este módulo implementa la parte de protocolo HTTP/1.1 del servidor,
//! sin usar librerías de alto nivel. Incluye:
//!
//! - Parsing de la request line y los headers
//! - Construcción de responses byte a byte
//! - Códigos de estado
//! - Inferencia de tipos MIME por extensión
//!
//! ### Formato de Request aceptado
//!
//! ```text
//! GET /path?query=ignorada HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! Content-Length: 0\r\n
//! \r\n
//! ```
//!
//! Solo se usa el componente path del target para el ruteo; la query y el
//! fragment se descartan. La línea vacía termina los headers y no se lee
//! ningún body después, independientemente de Content-Length.
//!
//! ### Formato de Response generado
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/html\r\n
//! Content-Length: 13\r\n
//! \r\n
//! <h1>Hola</h1>
//! ```

pub mod mime;
pub mod request;
pub mod response;
pub mod status;

// Re-exportamos los tipos principales para facilitar su uso
pub use request::Request;
pub use response::Response;
pub use status::StatusCode;
