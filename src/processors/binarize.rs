// pixelmagic/src/processors/binarize.rs
use super::convert::{map_pixels, to_l};
use crate::core::{PixelBuffer, Result};

pub struct Binarizer {
    threshold: f64,
}

impl Binarizer {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn binarize(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        log::debug!(
            "Binarizing {}x{} {} image at threshold {}",
            input.width(),
            input.height(),
            input.mode(),
            self.threshold
        );

        let luminance = to_l(input)?;
        let threshold = self.threshold;
        map_pixels(&luminance, 1, |src, dst| {
            dst[0] = if f64::from(src[0]) >= threshold { 255 } else { 0 };
        })
    }
}
