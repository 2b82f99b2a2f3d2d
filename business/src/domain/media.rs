use async_trait::async_trait;

/// Folder namespace every catalog image lives under at the media host.
pub const MEDIA_FOLDER: &str = "store-products";

/// Raw image payload received from the API boundary.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A stored asset at the media host, addressable by URL and by public id.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteAsset {
    pub url: String,
    pub public_id: String,
}

/// Result of a remote asset deletion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("media.unsupported_format")]
    UnsupportedFormat,
    #[error("media.upload_failed")]
    UploadFailed,
    #[error("media.delete_failed")]
    DeleteFailed,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, image: &ImageFile) -> Result<RemoteAsset, MediaError>;
    async fn delete(&self, public_id: &str) -> Result<DeleteOutcome, MediaError>;
}

/// Reconstructs the media host's public id from a URL it issued: the last
/// path segment minus its file extension, under [`MEDIA_FOLDER`].
///
/// Must stay the exact inverse of the upload naming scheme in the media
/// adapter; update and delete resolve the asset to decommission through it.
pub fn public_id_from_url(image_url: &str) -> Option<String> {
    let parsed = url::Url::parse(image_url).ok()?;
    let last = parsed.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let stem = last.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(last);
    if stem.is_empty() {
        return None;
    }
    Some(format!("{}/{}", MEDIA_FOLDER, stem))
}
