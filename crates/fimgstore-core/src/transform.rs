//! Image transform parameters and their query encodings.
//!
//! Each transform maps to a fixed set of query parameters that the server
//! feeds into its GraphicsMagick pipeline. `Convert` option strings are
//! opaque pass-through values; nothing here interprets them.

use std::fmt;

use crate::constants::{
    CONVERT_EXT_PARAM, CONVERT_OPTS_PARAM, CROP_PARAM, FILE_TYPE_PARAM, METADATA_FILE_TYPE,
    POLYGON_PARAM, SCALE_PERC_PARAM, SCALE_XY_PARAM,
};
use crate::error::StoreError;

/// Stored renditions the server keeps for every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImgType {
    /// The original upload.
    Orig,
    /// Viewing copy.
    View,
    /// Thumbnail.
    Thumbs,
    /// Binarized version.
    Bin,
}

impl ImgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImgType::Orig => "orig",
            ImgType::View => "view",
            ImgType::Thumbs => "thumbs",
            ImgType::Bin => "bin",
        }
    }
}

impl fmt::Display for ImgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A polygon vertex in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single server-side transformation applied at retrieval time.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageTransform {
    /// Select a stored rendition (`fileType=<type>`).
    FileType(ImgType),
    /// Scale to a percentage of the original size (`scalePerc=<p>`).
    /// Must be at least 1.
    PercentScale(u32),
    /// Scale to pixel dimensions (`scaleXY=<W>x<H>`). With
    /// `preserve_aspect` unset a trailing `!` tells the server to ignore
    /// the aspect ratio.
    PixelScale {
        width: u32,
        height: u32,
        preserve_aspect: bool,
    },
    /// Cut a region (`crop=<X>x<Y>x<W>x<H>`).
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Arbitrary convert call (`convertOpts=<opts>&convertExt=<ext>`).
    Convert { opts: String, ext: String },
    /// Fetch the stored metadata record instead of image bytes
    /// (`fileType=metadata`).
    Metadata,
    /// Blacken the given polygons on the image. Encodes one `polygon`
    /// parameter per polygon, points space-separated, coordinates
    /// comma-separated, in caller order.
    Blacken(Vec<Vec<Point>>),
}

impl ImageTransform {
    /// Validate this transform and append its query parameters to `pairs`.
    pub(crate) fn append_query_pairs(
        &self,
        pairs: &mut Vec<(&'static str, String)>,
    ) -> Result<(), StoreError> {
        match self {
            ImageTransform::FileType(img_type) => {
                pairs.push((FILE_TYPE_PARAM, img_type.to_string()));
            }
            ImageTransform::PercentScale(percent) => {
                if *percent < 1 {
                    return Err(StoreError::InvalidScalePercentage(*percent));
                }
                pairs.push((SCALE_PERC_PARAM, percent.to_string()));
            }
            ImageTransform::PixelScale {
                width,
                height,
                preserve_aspect,
            } => {
                let marker = if *preserve_aspect { "" } else { "!" };
                pairs.push((SCALE_XY_PARAM, format!("{}x{}{}", width, height, marker)));
            }
            ImageTransform::Crop {
                x,
                y,
                width,
                height,
            } => {
                pairs.push((CROP_PARAM, format!("{}x{}x{}x{}", x, y, width, height)));
            }
            ImageTransform::Convert { opts, ext } => {
                pairs.push((CONVERT_OPTS_PARAM, opts.clone()));
                pairs.push((CONVERT_EXT_PARAM, ext.clone()));
            }
            ImageTransform::Metadata => {
                pairs.push((FILE_TYPE_PARAM, METADATA_FILE_TYPE.to_string()));
            }
            ImageTransform::Blacken(polygons) => {
                for polygon in polygons {
                    if polygon.is_empty() {
                        return Err(StoreError::EmptyPolygon);
                    }
                    let value = polygon
                        .iter()
                        .map(|p| format!("{},{}", p.x, p.y))
                        .collect::<Vec<_>>()
                        .join(" ");
                    pairs.push((POLYGON_PARAM, value));
                }
            }
        }
        Ok(())
    }
}
