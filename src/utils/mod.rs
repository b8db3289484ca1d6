// pixelmagic/src/utils/mod.rs
use crate::core::{PixelToolError, Result};
use image::ImageFormat;

pub const MAX_DIMENSION: usize = 100_000;
pub const MAX_BUFFER_BYTES: usize = u32::MAX as usize;

pub fn validate_dimensions(width: usize, height: usize, channels: usize) -> Result<()> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PixelToolError::InvalidParameter(format!(
            "Dimensions {}x{} too large (max {} pixels per side)",
            width, height, MAX_DIMENSION
        )));
    }

    let bytes = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| n <= MAX_BUFFER_BYTES);
    if bytes.is_none() {
        return Err(PixelToolError::InvalidParameter(format!(
            "Dimensions {}x{}x{} exceed the {} byte buffer limit",
            width, height, channels, MAX_BUFFER_BYTES
        )));
    }

    Ok(())
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn image_format_to_string(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Png => "PNG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WebP",
        ImageFormat::Pnm => "PNM",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Tga => "TGA",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Ico => "ICO",
        ImageFormat::Qoi => "QOI",
        _ => "Unknown",
    }
    .to_string()
}
