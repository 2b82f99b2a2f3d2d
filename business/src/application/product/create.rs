use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::media::MediaStore;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media: Arc<dyn MediaStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        validate_fields(&params.name, &params.description, params.price)?;

        let image = params
            .image
            .filter(|image| !image.bytes.is_empty())
            .ok_or(ProductError::ImageRequired)?;

        // Upload first, then insert. A failed insert leaves the uploaded
        // asset orphaned at the media host; there is no compensating delete.
        let asset = self.media.upload(&image).await?;

        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: asset.url,
        })?;

        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
