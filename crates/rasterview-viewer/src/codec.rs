//! Image reader/writer boundary.
//!
//! The viewer does not pick codecs itself; it is handed a reader and writer,
//! falling back to [`DefaultCodec`], which lets the `image` crate guess the
//! format from content (reading) or extension (writing).

use crate::raster::Image;
use image::{DynamicImage, ImageFormat};
use rasterview_core::{CodecError, Report};
use std::path::Path;

/// A decoded image plus whatever metadata the reader extracted.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: Image,
    pub report: Report,
}

pub trait ImageReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<LoadedImage, CodecError>;
}

pub trait ImageWriter: Send + Sync {
    fn write(&self, path: &Path, image: &Image) -> Result<(), CodecError>;
}

/// Reader/writer backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl ImageReader for DefaultCodec {
    fn read(&self, path: &Path) -> Result<LoadedImage, CodecError> {
        let reader = image::ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format().ok_or_else(|| CodecError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let decoded = reader.decode().map_err(|e| CodecError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut report = Report::new();
        report.set_string("Format", format!("{:?}", format));
        report.set_string("Color type", format!("{:?}", decoded.color()));

        Ok(LoadedImage {
            image: Image::from(decoded),
            report,
        })
    }
}

impl ImageWriter for DefaultCodec {
    fn write(&self, path: &Path, image: &Image) -> Result<(), CodecError> {
        let format = ImageFormat::from_path(path).map_err(|_| CodecError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let encode_error = |e: image::ImageError| CodecError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        match format {
            // no alpha channel in JPEG
            ImageFormat::Jpeg => DynamicImage::ImageRgba8(image.pixels().clone())
                .to_rgb8()
                .save_with_format(path, format)
                .map_err(encode_error),
            _ => image
                .pixels()
                .save_with_format(path, format)
                .map_err(encode_error),
        }
    }
}
