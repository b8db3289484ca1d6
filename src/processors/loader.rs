// pixelmagic/src/processors/loader.rs
use crate::core::{ChannelMode, PixelBuffer, PixelToolError, RawArray, Result};
use crate::utils::{image_format_to_string, validate_dimensions};
use image::{DynamicImage, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<PixelBuffer> {
        let (raw, declared) = self.decode(path)?;
        let buffer = PixelBuffer::new(raw)?;

        if buffer.mode() != declared {
            return Err(PixelToolError::ProcessingError(format!(
                "decoder declared {} but produced {} samples",
                declared,
                buffer.mode()
            )));
        }

        log::info!(
            "Loaded image: {}x{} pixels, mode: {}",
            buffer.width(),
            buffer.height(),
            buffer.mode()
        );

        Ok(buffer)
    }

    // Grayscale comes back 2-D.
    pub fn decode(&self, path: &Path) -> Result<(RawArray, ChannelMode)> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let reader = ImageReader::open(path)?.with_guessed_format()?;
        log::debug!(
            "Detected format: {}",
            reader
                .format()
                .map(image_format_to_string)
                .unwrap_or_else(|| "Unknown".to_string())
        );
        let image = reader.decode()?;

        let (width, height) = (image.width() as usize, image.height() as usize);
        let color = image.color();
        validate_dimensions(width, height, usize::from(color.channel_count()))?;

        match image {
            DynamicImage::ImageLuma8(buf) => {
                Ok((RawArray::from_u8(vec![height, width], buf.into_raw()), ChannelMode::L))
            }
            DynamicImage::ImageRgb8(buf) => Ok((
                RawArray::from_u8(vec![height, width, 3], buf.into_raw()),
                ChannelMode::Rgb,
            )),
            DynamicImage::ImageRgba8(buf) => Ok((
                RawArray::from_u8(vec![height, width, 4], buf.into_raw()),
                ChannelMode::Rgba,
            )),
            _ => Err(PixelToolError::UnsupportedMode(format!("{:?}", color))),
        }
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PixelToolError::InvalidParameter(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let metadata = path.metadata()?;
        if metadata.len() == 0 {
            return Err(PixelToolError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}
