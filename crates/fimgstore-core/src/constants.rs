//! Wire-contract constants for the fimagestore HTTP interface.
//!
//! Parameter names and action path segments must match the server byte for
//! byte. A deployment with a different key shape or action naming is matched
//! by editing this module only.

/// Query parameter carrying the file key. Always appended last.
pub const ID_PARAM: &str = "id";

/// Query parameter selecting a stored rendition.
pub const FILE_TYPE_PARAM: &str = "fileType";

/// Query parameter for percentage scaling.
pub const SCALE_PERC_PARAM: &str = "scalePerc";

/// Query parameter for pixel-dimension scaling.
pub const SCALE_XY_PARAM: &str = "scaleXY";

/// Query parameter for cropping a region.
pub const CROP_PARAM: &str = "crop";

/// Query parameter carrying a GraphicsMagick convert option string.
pub const CONVERT_OPTS_PARAM: &str = "convertOpts";

/// Query parameter carrying the target extension of a conversion
/// (without the dot).
pub const CONVERT_EXT_PARAM: &str = "convertExt";

/// Query parameter carrying one blackening polygon. Repeated per polygon.
pub const POLYGON_PARAM: &str = "polygon";

/// Query parameter linking an upload to a parent document.
pub const IS_PART_OF_PARAM: &str = "isPartOf";

/// Query parameter for the server-side processing timeout in seconds.
pub const TIMEOUT_PARAM: &str = "timeout";

/// Query parameter naming the stored key an upload replaces.
pub const REPLACE_KEY_PARAM: &str = "replaceKey";

/// `fileType` value requesting the stored metadata record instead of
/// image bytes.
pub const METADATA_FILE_TYPE: &str = "metadata";

/// Retrieval action path segment.
pub const GET_ACTION: &str = "GetImage";

/// Upload/create action path segment.
pub const PUT_ACTION: &str = "PutImage";

/// Delete action path segment.
pub const DEL_ACTION: &str = "DelImage";

/// Exact length of a server-assigned file key.
pub const FILE_KEY_LEN: usize = 24;
