//! Image output.
//!
//! Writes an [`ImageBuffer`] as plain-text PPM (`P3`) or PNG. The render
//! loop never touches these; they sit on the caller's side.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Supported output containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain-text PPM (`P3`)
    Ppm,
    /// 8-bit RGB PNG
    Png,
}

impl OutputFormat {
    /// Pick a format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Write the image as plain-text PPM: a `P3` header with dimensions and
/// max value 255, then one `r g b` line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for [r, g, b] in &image.pixels {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save as a PPM file.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let file = File::create(path.as_ref())?;
    write_ppm(image, BufWriter::new(file))
}

/// Save as a PNG file.
pub fn save_png(buffer: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    image::save_buffer_with_format(
        path.as_ref(),
        &buffer.to_rgb_bytes(),
        buffer.width,
        buffer.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;
    Ok(())
}

/// Save in the format named by the file extension (`.ppm` or `.png`).
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    match OutputFormat::from_path(path)? {
        OutputFormat::Ppm => save_ppm(image, path)?,
        OutputFormat::Png => save_png(image, path)?,
    }
    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
