use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_fields(&props.name, &props.description, props.price)?;

        if props.image_url.trim().is_empty() {
            return Err(ProductError::ImageRequired);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            image_url: props.image_url,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        image_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image_url,
            created_at,
            updated_at,
        }
    }
}

/// Field validation shared by create and update, run before any side effect.
pub fn validate_fields(name: &str, description: &str, price: f64) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if description.trim().is_empty() {
        return Err(ProductError::DescriptionEmpty);
    }
    if !(price > 0.0) {
        return Err(ProductError::PriceNotPositive);
    }
    Ok(())
}
