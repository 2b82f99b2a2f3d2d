use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use sha2::{Digest, Sha256};

/// Shared Cloudinary HTTP client configuration.
pub struct CloudinaryClient {
    pub client: Client,
    pub api_key: String,
    api_secret: String,
    cloud_name: String,
    base_url: String,
}

impl CloudinaryClient {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_secret,
            cloud_name,
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
        }
    }

    /// Returns the image upload endpoint URL.
    pub fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.cloud_name)
    }

    /// Returns the image destroy endpoint URL.
    pub fn destroy_url(&self) -> String {
        format!("{}/{}/image/destroy", self.base_url, self.cloud_name)
    }

    /// Signs a request the way the host verifies it: SHA-256 over the
    /// alphabetically ordered `key=value` pairs joined with `&`, with the
    /// API secret appended, hex-encoded.
    pub fn sign(&self, params: &BTreeMap<&str, String>) -> String {
        let to_sign = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> CloudinaryClient {
        CloudinaryClient::new(
            "demo".to_string(),
            "key123".to_string(),
            "secret456".to_string(),
        )
    }

    fn sample_params() -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("timestamp", "1723000000".to_string());
        params.insert("public_id", "store-products/a1b2c3".to_string());
        params
    }

    #[test]
    fn should_build_endpoint_urls_from_cloud_name() {
        let client = test_client();
        assert_eq!(
            client.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
        assert_eq!(
            client.destroy_url(),
            "https://api.cloudinary.com/v1_1/demo/image/destroy"
        );
    }

    #[test]
    fn should_produce_hex_sha256_signature() {
        let signature = test_client().sign(&sample_params());
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn should_sign_deterministically() {
        let client = test_client();
        assert_eq!(client.sign(&sample_params()), client.sign(&sample_params()));
    }

    #[test]
    fn should_change_signature_with_secret() {
        let other = CloudinaryClient::new(
            "demo".to_string(),
            "key123".to_string(),
            "other-secret".to_string(),
        );
        assert_ne!(
            test_client().sign(&sample_params()),
            other.sign(&sample_params())
        );
    }

    #[test]
    fn should_change_signature_with_params() {
        let client = test_client();
        let mut tampered = sample_params();
        tampered.insert("public_id", "store-products/zzz".to_string());
        assert_ne!(client.sign(&sample_params()), client.sign(&tampered));
    }
}
