use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::media::{DeleteOutcome, MediaStore, public_id_from_url};
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media: Arc<dyn MediaStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Asset cleanup is best-effort; record removal must not hinge on it.
        match public_id_from_url(&existing.image_url) {
            Some(public_id) => match self.media.delete(&public_id).await {
                Ok(DeleteOutcome::Deleted) => {}
                Ok(DeleteOutcome::NotFound) => self.logger.warn(&format!(
                    "Asset already absent at media host: {}",
                    public_id
                )),
                Err(e) => self
                    .logger
                    .warn(&format!("Failed to delete asset {}: {}", public_id, e)),
            },
            None => self.logger.warn(&format!(
                "Could not derive media id from url, asset kept: {}",
                existing.image_url
            )),
        }

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
