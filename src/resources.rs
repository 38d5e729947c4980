// ABOUTME: Resource handling for the deckgen library
// ABOUTME: Loads local or remote images and probes their format and pixel dimensions

use crate::errors::{DeckError, Result};
use image::ImageFormat;
use image::io::Reader as ImageReader;
use log::info;
use reqwest::blocking::Client;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An image reference that can be either a local file or a URL.
#[derive(Debug, Clone)]
pub struct ImageResource {
    pub path: String,
    pub is_remote: bool,
}

impl ImageResource {
    /// Create a new ImageResource from a path string.
    /// The path can be either a local file path or a URL.
    pub fn new(path: &str) -> Self {
        let is_remote = path.starts_with("http://") || path.starts_with("https://");
        Self {
            path: path.to_string(),
            is_remote,
        }
    }

    /// Where a local reference lives on disk, resolving relative paths
    /// against `base_dir` when one is given
    pub fn local_path(&self, base_dir: Option<&Path>) -> PathBuf {
        let path = Path::new(&self.path);
        match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load and probe the image.
    pub fn load(&self, base_dir: Option<&Path>) -> Result<ImageData> {
        let bytes = if self.is_remote {
            self.fetch_remote_bytes()?
        } else {
            read_local_bytes(&self.local_path(base_dir))?
        };
        ImageData::from_bytes(bytes)
    }

    /// Fetch bytes from a remote URL
    fn fetch_remote_bytes(&self) -> Result<Vec<u8>> {
        info!("Fetching remote image: {}", self.path);

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(DeckError::FetchError)?;

        let response = client.get(&self.path).send()?;
        if !response.status().is_success() {
            return Err(DeckError::MissingResource(format!(
                "{} (HTTP {})",
                self.path,
                response.status()
            )));
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Read an image file, reporting a missing file as a missing resource
pub fn read_local_bytes(path: &Path) -> Result<Vec<u8>> {
    info!("Reading local image: {:?}", path);
    if !path.is_file() {
        return Err(DeckError::MissingResource(format!(
            "Image file not found: {}",
            path.display()
        )));
    }
    fs::read(path).map_err(DeckError::FileReadError)
}

/// Raw image bytes together with their probed metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    /// Width in native pixels.
    pub width: u32,
    /// Height in native pixels.
    pub height: u32,
}

impl ImageData {
    /// Probe the format and dimensions of an in-memory image
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(DeckError::FileReadError)?;
        let format = reader.format().ok_or_else(|| {
            DeckError::UnsupportedImageFormat("unrecognized image data".to_string())
        })?;
        media_type(format)?;

        let (width, height) = reader.into_dimensions()?;
        if width == 0 || height == 0 {
            return Err(DeckError::ValidationError(format!(
                "Image has zero size: {}x{}",
                width, height
            )));
        }

        Ok(Self {
            bytes,
            format,
            width,
            height,
        })
    }

    /// File extension used for the media part
    pub fn extension(&self) -> &'static str {
        media_type(self.format).map(|(ext, _)| ext).unwrap_or("bin")
    }
}

/// Extension and MIME type of the image formats a package may embed.
pub fn media_type(format: ImageFormat) -> Result<(&'static str, &'static str)> {
    match format {
        ImageFormat::Png => Ok(("png", "image/png")),
        ImageFormat::Jpeg => Ok(("jpeg", "image/jpeg")),
        ImageFormat::Gif => Ok(("gif", "image/gif")),
        ImageFormat::Bmp => Ok(("bmp", "image/bmp")),
        ImageFormat::Tiff => Ok(("tiff", "image/tiff")),
        other => Err(DeckError::UnsupportedImageFormat(format!("{:?}", other))),
    }
}
