//! Create and upload operations.
//!
//! The server exposes two ways of creating files: a PUT whose URI points
//! the server at the bytes of an existing stored file (possibly
//! transformed, as with blackening), and a multipart PUT carrying the
//! bytes directly. Both answer the new file's key as a bare text body.

use fimgstore_core::{FileKey, Point};
use url::Url;

use crate::error::ClientError;
use crate::FimgStoreClient;

/// Multipart part name the server expects for upload bodies.
const UPLOAD_PART_NAME: &str = "file";

impl FimgStoreClient {
    /// Create a new stored file from the bytes behind `source`, a
    /// retrieval URI built with the client's [`UriBuilder`]. Returns the
    /// key of the new file.
    ///
    /// [`UriBuilder`]: fimgstore_core::UriBuilder
    pub async fn create_file(
        &self,
        source: &Url,
        is_part_of: Option<&str>,
        timeout_secs: Option<u32>,
        replace_key: Option<&FileKey>,
    ) -> Result<FileKey, ClientError> {
        let uri = self
            .uri_builder()
            .create_uri(source, is_part_of, timeout_secs, replace_key)?;

        tracing::debug!(uri = %uri, "PUT");
        let response = self.put(uri).send().await?;
        self.read_upload_response(response).await
    }

    /// Blacken `polygons` on an existing image and store the result as a
    /// new file.
    pub async fn create_blackened_image(
        &self,
        key: &FileKey,
        polygons: &[Vec<Point>],
        is_part_of: Option<&str>,
        timeout_secs: Option<u32>,
        replace_key: Option<&FileKey>,
    ) -> Result<FileKey, ClientError> {
        let source = self.uri_builder().blackened_uri(key, polygons)?;
        self.create_file(&source, is_part_of, timeout_secs, replace_key)
            .await
    }

    /// Upload raw bytes as a new stored file via multipart PUT.
    pub async fn upload(
        &self,
        file_name: &str,
        data: Vec<u8>,
        is_part_of: Option<&str>,
        replace_key: Option<&FileKey>,
    ) -> Result<FileKey, ClientError> {
        let uri = self.uri_builder().put_uri(is_part_of, None, replace_key)?;

        let form = reqwest::multipart::Form::new().part(
            UPLOAD_PART_NAME,
            reqwest::multipart::Part::bytes(data).file_name(file_name.to_string()),
        );

        tracing::debug!(uri = %uri, file_name = %file_name, "PUT multipart");
        let response = self.put(uri).multipart(form).send().await?;
        self.read_upload_response(response).await
    }

    async fn read_upload_response(
        &self,
        response: reqwest::Response,
    ) -> Result<FileKey, ClientError> {
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

        let body = response.text().await?;
        let key = extract_key(&body)?;
        tracing::debug!(key = %key, "create done");
        Ok(key)
    }
}

/// Read a create/upload response body: the server answers the bare key of
/// the new file, possibly padded with whitespace.
fn extract_key(body: &str) -> Result<FileKey, ClientError> {
    let token = body.split_whitespace().next().unwrap_or("");
    FileKey::new(token).map_err(|_| ClientError::UnexpectedResponse(body.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_key_from_bare_body() {
        let key = extract_key("DWWAGAYXTSHYTZVPLTYJSKBF").unwrap();
        assert_eq!(key.as_str(), "DWWAGAYXTSHYTZVPLTYJSKBF");
    }

    #[test]
    fn test_extract_key_tolerates_trailing_newline() {
        let key = extract_key("DWWAGAYXTSHYTZVPLTYJSKBF\n").unwrap();
        assert_eq!(key.as_str(), "DWWAGAYXTSHYTZVPLTYJSKBF");
    }

    #[test]
    fn test_extract_key_rejects_html_body() {
        let err = extract_key("<html><body>It works!</body></html>").unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_extract_key_rejects_empty_body() {
        assert!(matches!(
            extract_key(""),
            Err(ClientError::UnexpectedResponse(_))
        ));
    }
}
