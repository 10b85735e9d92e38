use anyhow::{bail, Context};
use fimgstore_core::ImgType;

/// Parse a WIDTHxHEIGHT argument such as `800x600`.
pub fn parse_scale(value: &str) -> anyhow::Result<(u32, u32)> {
    let (width, height) = value
        .split_once('x')
        .with_context(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width = width
        .parse()
        .with_context(|| format!("bad width '{}'", width))?;
    let height = height
        .parse()
        .with_context(|| format!("bad height '{}'", height))?;
    Ok((width, height))
}

/// Parse an XxYxWIDTHxHEIGHT crop argument such as `10x20x300x400`.
pub fn parse_crop(value: &str) -> anyhow::Result<(u32, u32, u32, u32)> {
    let parts: Vec<&str> = value.split('x').collect();
    if parts.len() != 4 {
        bail!("expected XxYxWIDTHxHEIGHT, got '{}'", value);
    }
    let mut numbers = [0u32; 4];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .with_context(|| format!("bad crop value '{}'", part))?;
    }
    Ok((numbers[0], numbers[1], numbers[2], numbers[3]))
}

/// Map a --file-type argument onto a stored rendition.
pub fn parse_img_type(value: &str) -> anyhow::Result<ImgType> {
    match value {
        "orig" => Ok(ImgType::Orig),
        "view" => Ok(ImgType::View),
        "thumbs" => Ok(ImgType::Thumbs),
        "bin" => Ok(ImgType::Bin),
        other => bail!("unknown file type '{}' (orig, view, thumbs, bin)", other),
    }
}


/// Initialize tracing for the CLI binary.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
