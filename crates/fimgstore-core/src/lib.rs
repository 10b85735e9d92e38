//! Fimgstore Core Library
//!
//! Domain types and pure URI construction for the fimagestore image storage
//! service: validated file keys, image transform encodings, endpoint
//! configuration, and the retry policy used by the client crate.

pub mod constants;
pub mod endpoint;
pub mod error;
pub mod file_key;
pub mod retry;
pub mod transform;
pub mod uri;

// Re-export commonly used types
pub use endpoint::{EndpointConfig, Scheme};
pub use error::StoreError;
pub use file_key::FileKey;
pub use retry::RetryPolicy;
pub use transform::{ImageTransform, ImgType, Point};
pub use uri::UriBuilder;
