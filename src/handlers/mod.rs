//! # Handlers de Demostración
//! src/handlers/mod.rs
//!
//! Handlers registrables de ejemplo:
//! - `/greeting`: saludo HTML
//! - `/product/allProducts`: catálogo de productos en memoria, como JSON
//!
//! Los handlers cumplen el contrato de la tabla de rutas: cero argumentos,
//! retornan el body como `String`. El catálogo vive en un `ProductService`
//! global; se llena al arrancar y los handlers solo lo leen.

use serde::Serialize;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Un producto del catálogo de demostración
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub nombre: String,
    pub precio: f64,
    pub imagen: String,
}

/// Catálogo de productos en memoria
///
/// Sin persistencia: el contenido vive lo que viva el proceso.
pub struct ProductService {
    products: Mutex<Vec<Product>>,
}

impl ProductService {
    /// Crea un catálogo vacío
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
        }
    }

    /// Agrega un producto y retorna el id asignado (consecutivo)
    pub fn add(&self, nombre: &str, precio: f64, imagen: &str) -> u32 {
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);

        let id = products.last().map(|p| p.id + 1).unwrap_or(1);
        products.push(Product {
            id,
            nombre: nombre.to_string(),
            precio,
            imagen: imagen.to_string(),
        });

        println!("[*] Producto agregado: {} (id {})", nombre, id);
        id
    }

    /// Elimina el producto con el id dado; retorna si existía
    pub fn remove(&self, id: u32) -> bool {
        let mut products = self.products.lock().unwrap_or_else(PoisonError::into_inner);

        let before = products.len();
        products.retain(|p| p.id != id);
        products.len() < before
    }

    /// Serializa el catálogo completo como JSON
    pub fn to_json(&self) -> String {
        let products = self.products.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_string(&*products).unwrap_or_else(|_| "[]".to_string())
    }

    /// Catálogo global, sembrado con productos de ejemplo
    fn instance() -> &'static ProductService {
        static INSTANCE: OnceLock<ProductService> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let service = ProductService::new();
            service.add("Radio", 120.0, "/img/radio.png");
            service.add("Parlante", 85.5, "/img/parlante.png");
            service
        })
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler para `/greeting`
pub fn greeting_handler() -> String {
    "<h1>Hola Mundo</h1>".to_string()
}

/// Handler para `/product/allProducts`
///
/// Retorna el catálogo completo como un arreglo JSON.
pub fn products_handler() -> String {
    ProductService::instance().to_json()
}
