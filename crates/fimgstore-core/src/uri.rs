//! fimagestore URI construction.
//!
//! `UriBuilder` is pure: it holds an immutable [`EndpointConfig`] and
//! produces a fresh `Url` per call, so one builder can be shared freely.
//! Keys are validated before any assembly (a [`FileKey`] cannot exist
//! otherwise) and the `id` parameter always comes last, after the
//! transform parameters.
//!
//! Query values are form-urlencoded the way the server expects: spaces
//! become `+`, so a conversion option string `-rotate 35` is rendered as
//! `convertOpts=-rotate+35`.

use url::Url;

use crate::constants::{ID_PARAM, IS_PART_OF_PARAM, REPLACE_KEY_PARAM, TIMEOUT_PARAM};
use crate::endpoint::EndpointConfig;
use crate::error::StoreError;
use crate::file_key::FileKey;
use crate::transform::{ImageTransform, ImgType, Point};

/// Builds retrieval, creation, and deletion URIs for one fimagestore
/// deployment.
///
/// # Example
///
/// ```rust
/// use fimgstore_core::{EndpointConfig, FileKey, Scheme, UriBuilder};
///
/// let config =
///     EndpointConfig::new(Scheme::Https, "files.example.org", None, "imagestore").unwrap();
/// let builder = UriBuilder::new(config);
/// let key = FileKey::new("DWWAGAYXTSHYTZVPLTYJSKBF").unwrap();
/// let uri = builder.percent_scaled_uri(&key, 30).unwrap();
/// assert_eq!(
///     uri.as_str(),
///     "https://files.example.org/imagestore/GetImage?scalePerc=30&id=DWWAGAYXTSHYTZVPLTYJSKBF"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UriBuilder {
    config: EndpointConfig,
}

impl UriBuilder {
    pub fn new(config: EndpointConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Plain retrieval URI carrying only the `id` parameter.
    pub fn file_uri(&self, key: &FileKey) -> Result<Url, StoreError> {
        self.get_uri(key, &[])
    }

    /// Retrieval URI with a single transform applied.
    pub fn img_uri(&self, key: &FileKey, transform: &ImageTransform) -> Result<Url, StoreError> {
        self.get_uri(key, std::slice::from_ref(transform))
    }

    /// Retrieval URI for a stored rendition.
    pub fn img_type_uri(&self, key: &FileKey, img_type: ImgType) -> Result<Url, StoreError> {
        self.img_uri(key, &ImageTransform::FileType(img_type))
    }

    /// Retrieval URI scaled to a percentage of the original size.
    pub fn percent_scaled_uri(&self, key: &FileKey, percent: u32) -> Result<Url, StoreError> {
        self.img_uri(key, &ImageTransform::PercentScale(percent))
    }

    /// Retrieval URI scaled to pixel dimensions. With `preserve_aspect`
    /// unset the value carries the trailing `!` marker.
    pub fn pixel_scaled_uri(
        &self,
        key: &FileKey,
        width: u32,
        height: u32,
        preserve_aspect: bool,
    ) -> Result<Url, StoreError> {
        self.img_uri(
            key,
            &ImageTransform::PixelScale {
                width,
                height,
                preserve_aspect,
            },
        )
    }

    /// Retrieval URI cropped to a region.
    pub fn cropped_uri(
        &self,
        key: &FileKey,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<Url, StoreError> {
        self.img_uri(
            key,
            &ImageTransform::Crop {
                x,
                y,
                width,
                height,
            },
        )
    }

    /// Retrieval URI running an arbitrary convert call on the server.
    /// `opts` is passed through verbatim; `ext` is the target extension
    /// without the dot.
    pub fn converted_uri(&self, key: &FileKey, opts: &str, ext: &str) -> Result<Url, StoreError> {
        self.img_uri(
            key,
            &ImageTransform::Convert {
                opts: opts.to_string(),
                ext: ext.to_string(),
            },
        )
    }

    /// Retrieval URI for the stored metadata record.
    pub fn metadata_uri(&self, key: &FileKey) -> Result<Url, StoreError> {
        self.img_uri(key, &ImageTransform::Metadata)
    }

    /// Retrieval URI blackening the given polygons, one `polygon`
    /// parameter per polygon.
    pub fn blackened_uri(&self, key: &FileKey, polygons: &[Vec<Point>]) -> Result<Url, StoreError> {
        self.img_uri(key, &ImageTransform::Blacken(polygons.to_vec()))
    }

    /// Creation URI: the put action carrying every query parameter of
    /// `source` (a retrieval URI for the bytes to store), followed by the
    /// optional upload parameters where present.
    pub fn create_uri(
        &self,
        source: &Url,
        is_part_of: Option<&str>,
        timeout_secs: Option<u32>,
        replace_key: Option<&FileKey>,
    ) -> Result<Url, StoreError> {
        let mut url = self.action_url(self.config.put_path())?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in source.query_pairs() {
                pairs.append_pair(&name, &value);
            }
        }
        append_upload_params(&mut url, is_part_of, timeout_secs, replace_key);
        strip_empty_query(&mut url);
        Ok(url)
    }

    /// Upload URI carrying only the optional upload parameters.
    pub fn put_uri(
        &self,
        is_part_of: Option<&str>,
        timeout_secs: Option<u32>,
        replace_key: Option<&FileKey>,
    ) -> Result<Url, StoreError> {
        let mut url = self.action_url(self.config.put_path())?;
        append_upload_params(&mut url, is_part_of, timeout_secs, replace_key);
        strip_empty_query(&mut url);
        Ok(url)
    }

    /// Deletion URI carrying only the `id` parameter.
    pub fn delete_uri(&self, key: &FileKey) -> Result<Url, StoreError> {
        let mut url = self.action_url(self.config.del_path())?;
        url.query_pairs_mut().append_pair(ID_PARAM, key.as_str());
        Ok(url)
    }

    /// The server context root, without parameters.
    pub fn base_uri(&self) -> Result<Url, StoreError> {
        self.action_url(self.config.context())
    }

    fn get_uri(&self, key: &FileKey, transforms: &[ImageTransform]) -> Result<Url, StoreError> {
        let mut pairs: Vec<(&'static str, String)> = Vec::new();
        for transform in transforms {
            transform.append_query_pairs(&mut pairs)?;
        }

        let mut url = self.action_url(self.config.get_path())?;
        {
            let mut query = url.query_pairs_mut();
            for (name, value) in &pairs {
                query.append_pair(name, value);
            }
            // id always last
            query.append_pair(ID_PARAM, key.as_str());
        }
        Ok(url)
    }

    fn action_url(&self, path: &str) -> Result<Url, StoreError> {
        let mut url = self.config.root_url()?;
        url.set_path(path);
        Ok(url)
    }
}

fn append_upload_params(
    url: &mut Url,
    is_part_of: Option<&str>,
    timeout_secs: Option<u32>,
    replace_key: Option<&FileKey>,
) {
    let mut pairs = url.query_pairs_mut();
    if let Some(is_part_of) = is_part_of {
        pairs.append_pair(IS_PART_OF_PARAM, is_part_of);
    }
    if let Some(timeout) = timeout_secs {
        pairs.append_pair(TIMEOUT_PARAM, &timeout.to_string());
    }
    if let Some(replace_key) = replace_key {
        pairs.append_pair(REPLACE_KEY_PARAM, replace_key.as_str());
    }
}

// query_pairs_mut leaves `Some("")` behind when nothing was appended, which
// would render a dangling `?`.
fn strip_empty_query(url: &mut Url) {
    if url.query() == Some("") {
        url.set_query(None);
    }
}
