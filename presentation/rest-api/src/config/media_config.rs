/// Configuration for the image hosting service.
///
/// All three credentials are required; startup fails fast when any is
/// missing so uploads are never silently disabled.
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let cloud_name = std::env::var("CLOUDINARY_CLOUD_NAME")
            .expect("CLOUDINARY_CLOUD_NAME environment variable must be set");
        let api_key = std::env::var("CLOUDINARY_API_KEY")
            .expect("CLOUDINARY_API_KEY environment variable must be set");
        let api_secret = std::env::var("CLOUDINARY_API_SECRET")
            .expect("CLOUDINARY_API_SECRET environment variable must be set");

        Self {
            cloud_name,
            api_key,
            api_secret,
        }
    }
}
