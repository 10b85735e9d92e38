//! fimgstore CLI — command-line client for a fimagestore deployment.
//!
//! Set FIMGSTORE_URL, FIMGSTORE_USER and FIMGSTORE_PASSWORD. Uses basic auth.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fimgstore_cli::{init_tracing, parse_crop, parse_img_type, parse_scale};
use fimgstore_client::FimgStoreClient;
use fimgstore_core::{FileKey, RetryPolicy};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "fimgstore", about = "fimagestore CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// Collection the upload belongs to
        #[arg(long)]
        is_part_of: Option<String>,
        /// Replace this stored file instead of creating a new one
        #[arg(long)]
        replace_key: Option<String>,
    },
    /// Download a stored file
    Get {
        /// File key
        key: String,
        /// Write here instead of the server-provided file name
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
    /// Print a retrieval URL without contacting the server
    Url {
        /// File key
        key: String,
        /// Stored rendition: orig, view, thumbs, bin
        #[arg(long)]
        file_type: Option<String>,
        /// Scale to a percentage of the original size
        #[arg(long)]
        scale_perc: Option<u32>,
        /// Scale to WIDTHxHEIGHT pixels
        #[arg(long)]
        scale: Option<String>,
        /// Ignore the aspect ratio when scaling to pixels
        #[arg(long)]
        exact: bool,
        /// Crop to XxYxWIDTHxHEIGHT
        #[arg(long)]
        crop: Option<String>,
        /// GraphicsMagick convert options, e.g. "-rotate 35"
        #[arg(long)]
        convert_opts: Option<String>,
        /// Target extension for --convert-opts
        #[arg(long, default_value = "png")]
        convert_ext: String,
        /// URL of the metadata record instead of the file itself
        #[arg(long)]
        metadata: bool,
    },
    /// Delete stored files by key
    Delete {
        /// File keys
        #[arg(required = true)]
        keys: Vec<String>,
        /// Retry budget per key for failed exchanges
        #[arg(long, default_value = "2")]
        retries: u32,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client = FimgStoreClient::from_env().context(
        "Failed to create store client. Set FIMGSTORE_URL, FIMGSTORE_USER and FIMGSTORE_PASSWORD",
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            is_part_of,
            replace_key,
        } => {
            let file_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .context("File path has no usable name")?
                .to_string();
            let data = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Read {}", file.display()))?;
            let replace = replace_key.as_deref().map(FileKey::new).transpose()?;
            let key = client
                .upload(&file_name, data, is_part_of.as_deref(), replace.as_ref())
                .await?;
            print_json(&serde_json::json!({ "key": key }))?;
        }
        Commands::Get { key, output } => {
            let key = FileKey::new(key)?;
            let file = client.get_file(&key).await?;
            let path = output
                .or_else(|| file.file_name.clone().map(Into::into))
                .unwrap_or_else(|| format!("{}.bin", file.key).into());
            tokio::fs::write(&path, &file.data)
                .await
                .with_context(|| format!("Write {}", path.display()))?;
            print_json(&serde_json::json!({
                "key": file.key,
                "file_name": file.file_name,
                "content_type": file.content_type,
                "bytes": file.data.len(),
                "saved_to": path,
            }))?;
        }
        Commands::Url {
            key,
            file_type,
            scale_perc,
            scale,
            exact,
            crop,
            convert_opts,
            convert_ext,
            metadata,
        } => {
            let key = FileKey::new(key)?;
            let builder = client.uri_builder();
            let url = if metadata {
                builder.metadata_uri(&key)?
            } else if let Some(file_type) = file_type {
                builder.img_type_uri(&key, parse_img_type(&file_type)?)?
            } else if let Some(percent) = scale_perc {
                builder.percent_scaled_uri(&key, percent)?
            } else if let Some(scale) = scale {
                let (width, height) = parse_scale(&scale)?;
                builder.pixel_scaled_uri(&key, width, height, !exact)?
            } else if let Some(crop) = crop {
                let (x, y, width, height) = parse_crop(&crop)?;
                builder.cropped_uri(&key, x, y, width, height)?
            } else if let Some(opts) = convert_opts {
                builder.converted_uri(&key, &opts, &convert_ext)?
            } else {
                builder.file_uri(&key)?
            };
            print_json(&serde_json::json!({ "url": url.as_str() }))?;
        }
        Commands::Delete { keys, retries } => {
            let policy = RetryPolicy::new(retries);
            let keys = keys
                .into_iter()
                .map(FileKey::new)
                .collect::<Result<Vec<_>, _>>()?;
            if let [key] = keys.as_slice() {
                let deleted = client.delete_file(key, &policy).await?;
                print_json(&serde_json::json!({ "key": key, "deleted": deleted }))?;
            } else {
                let batch = client.delete_files(&keys, &policy).await;
                let outcomes: Vec<serde_json::Value> = batch
                    .outcomes
                    .iter()
                    .map(|outcome| match &outcome.result {
                        Ok(deleted) => serde_json::json!({
                            "key": outcome.file_key.as_str(),
                            "deleted": deleted,
                        }),
                        Err(error) => serde_json::json!({
                            "key": outcome.file_key.as_str(),
                            "error": error.to_string(),
                        }),
                    })
                    .collect();
                print_json(&serde_json::json!({
                    "total": batch.outcomes.len(),
                    "failed": batch.failed_count(),
                    "outcomes": outcomes,
                }))?;
            }
        }
    }

    Ok(())
}
