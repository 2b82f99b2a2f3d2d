use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use business::domain::media::{
    DeleteOutcome, ImageFile, MEDIA_FOLDER, MediaError, MediaStore, RemoteAsset,
};

use crate::client::CloudinaryClient;

/// Files outside this list are rejected before any network call; the host
/// enforces the same list server-side through `allowed_formats`.
const ALLOWED_FORMATS: &[&str] = &["jpg", "jpeg", "png"];

/// Server-side bound applied to every stored image.
const TRANSFORMATION: &str = "w_500,h_500,c_limit";

pub struct CloudinaryMediaStore {
    client: CloudinaryClient,
}

impl CloudinaryMediaStore {
    pub fn new(client: CloudinaryClient) -> Self {
        Self { client }
    }

    fn extension(file_name: &str) -> Option<String> {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    async fn upload(&self, image: &ImageFile) -> Result<RemoteAsset, MediaError> {
        let extension =
            Self::extension(&image.file_name).ok_or(MediaError::UnsupportedFormat)?;
        if !ALLOWED_FORMATS.contains(&extension.as_str()) {
            return Err(MediaError::UnsupportedFormat);
        }

        // The asset name is a fresh UUID under the folder namespace. The
        // delivery URL then ends in <uuid>.<ext>, which is what
        // business::domain::media::public_id_from_url derives back from.
        let public_id = Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut params = BTreeMap::new();
        params.insert("allowed_formats", ALLOWED_FORMATS.join(","));
        params.insert("folder", MEDIA_FOLDER.to_string());
        params.insert("public_id", public_id.clone());
        params.insert("timestamp", timestamp.clone());
        params.insert("transformation", TRANSFORMATION.to_string());
        let signature = self.client.sign(&params);

        let file_part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.client.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("folder", MEDIA_FOLDER)
            .text("public_id", public_id)
            .text("allowed_formats", ALLOWED_FORMATS.join(","))
            .text("transformation", TRANSFORMATION);

        let response = self
            .client
            .client
            .post(self.client.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|_| MediaError::UploadFailed)?;

        if !response.status().is_success() {
            return Err(MediaError::UploadFailed);
        }

        let data: UploadResponse = response
            .json()
            .await
            .map_err(|_| MediaError::UploadFailed)?;

        Ok(RemoteAsset {
            url: data.secure_url,
            public_id: data.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<DeleteOutcome, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();

        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());
        params.insert("timestamp", timestamp.clone());
        let signature = self.client.sign(&params);

        let form = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp),
            ("api_key", self.client.api_key.clone()),
            ("signature", signature),
        ];

        let response = self
            .client
            .client
            .post(self.client.destroy_url())
            .form(&form)
            .send()
            .await
            .map_err(|_| MediaError::DeleteFailed)?;

        if !response.status().is_success() {
            return Err(MediaError::DeleteFailed);
        }

        let data: DestroyResponse = response
            .json()
            .await
            .map_err(|_| MediaError::DeleteFailed)?;

        match data.result.as_str() {
            "ok" => Ok(DeleteOutcome::Deleted),
            "not found" => Ok(DeleteOutcome::NotFound),
            _ => Err(MediaError::DeleteFailed),
        }
    }
}
