//! # Resolutor de Archivos Estáticos
//! src/server/static_files.rs
//!
//! Mapea un path de request a un archivo bajo el static root configurado.
//!
//! El path se normaliza segmento por segmento antes de tocar el filesystem:
//! un `..` que escape del root resuelve en 404, nunca en un archivo fuera
//! del directorio configurado.

use crate::http::{mime, Response};
use std::fs;
use std::path::{Path, PathBuf};

/// Resuelve un path contra el static root y construye la response
///
/// 1. `/` se sustituye por `/index.html`
/// 2. El path se normaliza; un escape del root es 404
/// 3. Un archivo regular existente se sirve completo, 200, con el
///    Content-Type inferido de la extensión
/// 4. Todo lo demás es 404 con el body fijo
///
/// Un fallo de lectura después de verificar existencia (carrera, permisos)
/// se responde como 500, nunca se propaga.
pub fn resolve(path: &str, root: &str) -> Response {
    let effective = if path == "/" { "/index.html" } else { path };

    let relative = match sanitize(effective) {
        Some(r) => r,
        None => return Response::not_found(),
    };

    let file_path = Path::new(root).join(relative);

    if file_path.exists() && !file_path.is_dir() {
        match fs::read(&file_path) {
            Ok(contents) => {
                let extension = file_path.extension().and_then(|e| e.to_str());
                Response::file(contents, mime::content_type_for(extension))
            }
            Err(e) => {
                eprintln!("   ❌ Error leyendo {}: {}", file_path.display(), e);
                Response::server_error()
            }
        }
    } else {
        Response::not_found()
    }
}

/// Normaliza un path de request a un path relativo bajo el root
///
/// Segmentos vacíos y `.` se descartan; `..` quita el segmento anterior.
/// Retorna `None` si un `..` escaparía del root.
fn sanitize(path: &str) -> Option<PathBuf> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }

    Some(segments.iter().collect())
}
