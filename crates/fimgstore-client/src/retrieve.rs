//! File retrieval.

use bytes::Bytes;
use fimgstore_core::{FileKey, ImageTransform};
use reqwest::header;
use url::Url;

use crate::error::ClientError;
use crate::FimgStoreClient;

/// A downloaded file together with the metadata the server exposes
/// through response headers.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub key: FileKey,
    /// File name from the Content-Disposition header, reduced to its
    /// final path component, when the server sent a usable one.
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FimgStoreClient {
    /// Download a stored file unchanged.
    pub async fn get_file(&self, key: &FileKey) -> Result<StoredFile, ClientError> {
        let uri = self.uri_builder().file_uri(key)?;
        self.fetch(key, uri).await
    }

    /// Download with a transform applied on the server.
    pub async fn get_img(
        &self,
        key: &FileKey,
        transform: &ImageTransform,
    ) -> Result<StoredFile, ClientError> {
        let uri = self.uri_builder().img_uri(key, transform)?;
        self.fetch(key, uri).await
    }

    /// Download the stored metadata record as text.
    pub async fn get_metadata(&self, key: &FileKey) -> Result<String, ClientError> {
        let file = self.get_img(key, &ImageTransform::Metadata).await?;
        Ok(String::from_utf8_lossy(&file.data).into_owned())
    }

    async fn fetch(&self, key: &FileKey, uri: Url) -> Result<StoredFile, ClientError> {
        tracing::debug!(uri = %uri, "GET");
        let response = self.get(uri).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::RemoteRejection {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = header_str(&response, header::CONTENT_TYPE);
        let file_name = header_str(&response, header::CONTENT_DISPOSITION)
            .as_deref()
            .and_then(filename_from_content_disposition);
        let data = response.bytes().await?;

        Ok(StoredFile {
            key: key.clone(),
            file_name,
            content_type,
            data,
        })
    }
}

fn header_str(response: &reqwest::Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Pull the file name out of a Content-Disposition value such as
/// `attachment; filename="page_0001.jpg"`.
///
/// Only the final path component is kept. A server answering with
/// `filename="../x"` or an absolute path must not be able to steer a
/// caller that writes to this name outside its own directory.
fn filename_from_content_disposition(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        let name = part.strip_prefix("filename=")?.trim_matches('"');
        let name = name.rsplit(['/', '\\']).next()?;
        if name.is_empty() || name == "." || name == ".." {
            None
        } else {
            Some(name.to_string())
        }
    })
}
