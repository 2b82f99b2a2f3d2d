use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::media::{DeleteOutcome, MediaStore, public_id_from_url};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub media: Arc<dyn MediaStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        validate_fields(&params.name, &params.description, params.price)?;

        // Verify product exists
        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let new_image = params.image.filter(|image| !image.bytes.is_empty());
        let image_url = match new_image {
            Some(image) => {
                // New image goes up first; only then is the old asset
                // decommissioned. Asset deletion is not fatal to the update.
                let asset = self.media.upload(&image).await?;
                self.decommission_old_asset(&existing.image_url).await;
                asset.url
            }
            None => existing.image_url.clone(),
        };

        let updated_product = Product::from_repository(
            existing.id,
            params.name,
            params.description,
            params.price,
            image_url,
            existing.created_at,
            chrono::Utc::now(),
        );

        self.repository.save(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

impl UpdateProductUseCaseImpl {
    async fn decommission_old_asset(&self, image_url: &str) {
        let Some(public_id) = public_id_from_url(image_url) else {
            self.logger.warn(&format!(
                "Could not derive media id from url, asset kept: {}",
                image_url
            ));
            return;
        };

        match self.media.delete(&public_id).await {
            Ok(DeleteOutcome::Deleted) => {}
            Ok(DeleteOutcome::NotFound) => self.logger.warn(&format!(
                "Replaced asset already absent at media host: {}",
                public_id
            )),
            Err(e) => self.logger.warn(&format!(
                "Failed to delete replaced asset {}: {}",
                public_id, e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{ImageFile, MediaError, RemoteAsset};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Media {}

        #[async_trait]
        impl MediaStore for Media {
            async fn upload(&self, image: &ImageFile) -> Result<RemoteAsset, MediaError>;
            async fn delete(&self, public_id: &str) -> Result<DeleteOutcome, MediaError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    const OLD_URL: &str =
        "https://res.cloudinary.com/demo/image/upload/v1/store-products/old-asset.jpg";
    const NEW_URL: &str =
        "https://res.cloudinary.com/demo/image/upload/v2/store-products/new-asset.jpg";

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn make_product(id: Uuid) -> Product {
        Product::from_repository(
            id,
            "Mug".to_string(),
            "Ceramic mug".to_string(),
            9.99,
            OLD_URL.to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn replacement_image() -> ImageFile {
        ImageFile {
            file_name: "mug-v2.png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn fields_only_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price: 12.50,
            image: None,
        }
    }

    #[tokio::test]
    async fn should_preserve_image_url_when_no_new_image() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_media = MockMedia::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id)));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        mock_media.expect_upload().never();
        mock_media.expect_delete().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case.execute(fields_only_params(product_id)).await;

        let product = result.unwrap();
        assert_eq!(product.image_url, OLD_URL);
        assert_eq!(product.price, 12.50);
    }

    #[tokio::test]
    async fn should_replace_image_and_delete_exactly_one_old_asset() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_media = MockMedia::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id)));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        mock_media.expect_upload().times(1).returning(|_| {
            Ok(RemoteAsset {
                url: NEW_URL.to_string(),
                public_id: "store-products/new-asset".to_string(),
            })
        });
        mock_media
            .expect_delete()
            .withf(|public_id| public_id == "store-products/old-asset")
            .times(1)
            .returning(|_| Ok(DeleteOutcome::Deleted));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: product_id,
                name: "Mug".to_string(),
                description: "Ceramic mug, new photo".to_string(),
                price: 9.99,
                image: Some(replacement_image()),
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.image_url, NEW_URL);
    }

    #[tokio::test]
    async fn should_complete_update_when_old_asset_delete_fails() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_media = MockMedia::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id)));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        mock_media.expect_upload().returning(|_| {
            Ok(RemoteAsset {
                url: NEW_URL.to_string(),
                public_id: "store-products/new-asset".to_string(),
            })
        });
        mock_media
            .expect_delete()
            .returning(|_| Err(MediaError::DeleteFailed));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: product_id,
                name: "Mug".to_string(),
                description: "Ceramic mug".to_string(),
                price: 9.99,
                image: Some(replacement_image()),
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.image_url, NEW_URL);
    }

    #[tokio::test]
    async fn should_fail_update_when_new_image_upload_fails() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_media = MockMedia::new();

        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(product_id)));
        mock_repo.expect_save().never();
        mock_media
            .expect_upload()
            .returning(|_| Err(MediaError::UploadFailed));
        mock_media.expect_delete().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: product_id,
                name: "Mug".to_string(),
                description: "Ceramic mug".to_string(),
                price: 9.99,
                image: Some(replacement_image()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Media(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_media = MockMedia::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_media.expect_upload().never();
        mock_media.expect_delete().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case.execute(fields_only_params(Uuid::new_v4())).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_update_before_lookup_when_fields_invalid() {
        let mut mock_repo = MockProductRepo::new();
        let mock_media = MockMedia::new();
        mock_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            media: Arc::new(mock_media),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: Uuid::new_v4(),
                name: "Mug".to_string(),
                description: "   ".to_string(),
                price: 9.99,
                image: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::DescriptionEmpty
        ));
    }
}
