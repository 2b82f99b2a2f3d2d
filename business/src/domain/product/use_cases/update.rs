use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::media::ImageFile;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Replacement image; the stored image is kept untouched when absent.
    pub image: Option<ImageFile>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
