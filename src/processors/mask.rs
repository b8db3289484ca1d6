// pixelmagic/src/processors/mask.rs
use crate::core::{PixelBuffer, PixelToolError, Result};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaskApplier;

impl MaskApplier {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(&self, input: &PixelBuffer, mask: &PixelBuffer) -> Result<PixelBuffer> {
        if (input.height(), input.width()) != (mask.height(), mask.width()) {
            return Err(PixelToolError::DimensionMismatch {
                input: (input.height(), input.width()),
                mask: (mask.height(), mask.width()),
            });
        }

        let channels = input.channels();
        if !matches!(channels, 1 | 3 | 4) {
            return Err(PixelToolError::UnsupportedChannelCount(channels));
        }

        log::debug!(
            "Applying {} mask to {}x{} {} image",
            mask.mode(),
            input.width(),
            input.height(),
            input.mode()
        );

        let keep: Vec<bool> = mask
            .samples()
            .par_chunks_exact(mask.channels())
            .map(|px| px[0] > 0)
            .collect();

        apply_gate(input, &keep)
    }
}

fn apply_gate(input: &PixelBuffer, keep: &[bool]) -> Result<PixelBuffer> {
    let channels = input.channels();
    let mut out = input.samples().to_vec();
    out.par_chunks_exact_mut(channels)
        .zip(keep.par_iter())
        .for_each(|(px, &keep)| {
            if !keep {
                px.fill(0);
            }
        });

    PixelBuffer::from_vec(input.height(), input.width(), channels, out)
}
