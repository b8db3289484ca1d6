// pixelmagic/src/processors/encoder.rs
use crate::core::{ChannelMode, PixelBuffer, PixelToolError, Result};
use crate::utils::{format_file_size, image_format_to_string};
use image::{ColorType, ImageFormat};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    pub fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let format = self.detect_format(path)?;
        self.save_with_format(buffer, path, format)
    }

    pub fn save_with_format(&self, buffer: &PixelBuffer, path: &Path, format: ImageFormat) -> Result<()> {
        log::debug!(
            "Saving {} image to {} as {}",
            buffer.mode(),
            path.display(),
            image_format_to_string(format)
        );

        let width = u32::try_from(buffer.width())
            .map_err(|_| PixelToolError::InvalidParameter("image too wide to encode".to_string()))?;
        let height = u32::try_from(buffer.height())
            .map_err(|_| PixelToolError::InvalidParameter("image too tall to encode".to_string()))?;

        image::save_buffer_with_format(
            path,
            buffer.samples(),
            width,
            height,
            color_type(buffer.mode()),
            format,
        )?;

        self.log_save_result(path)
    }

    pub fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| {
            PixelToolError::UnsupportedFormat(format!("cannot infer an image format from {}", path.display()))
        })
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::info!("Saved image: {} ({})", path.display(), format_file_size(file_size));
        Ok(())
    }
}

fn color_type(mode: ChannelMode) -> ColorType {
    match mode {
        ChannelMode::L => ColorType::L8,
        ChannelMode::Rgb => ColorType::Rgb8,
        ChannelMode::Rgba => ColorType::Rgba8,
    }
}
