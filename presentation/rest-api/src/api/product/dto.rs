use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Store-generated identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Public URL of the hosted product image
    #[oai(rename = "imageUrl")]
    pub image_url: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

/// Multipart payload for product creation. The image part is mandatory at
/// the business layer; transport-level absence maps to a 400.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<Upload>,
}

/// Multipart payload for product replacement; without an image part the
/// stored image is kept.
#[derive(Debug, Multipart)]
pub struct UpdateProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<Upload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct DeleteConfirmationResponse {
    pub message: String,
    /// Identifier of the removed product
    pub id: Uuid,
}
