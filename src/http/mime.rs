//! # Tipos MIME
//!
//! Inferencia del Content-Type de un archivo estático a partir de su
//! extensión. La tabla es fija; cualquier extensión desconocida (o la
//! ausencia de extensión) se sirve como `text/plain`.

/// Retorna el Content-Type según la extensión del archivo
///
/// # Ejemplos
/// ```
/// use web_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), "text/html");
/// assert_eq!(content_type_for(Some("css")), "text/css");
/// assert_eq!(content_type_for(None), "text/plain");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => "text/plain",
    }
}
