pub mod client;
pub mod media_store;

pub use client::CloudinaryClient;
pub use media_store::CloudinaryMediaStore;
