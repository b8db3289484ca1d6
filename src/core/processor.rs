// pixelmagic/src/core/processor.rs
use super::{Operation, PixelBuffer, PixelToolError, ProcessingReport, Result};
use crate::processors::prelude::*;
use std::path::Path;

pub struct ImageProcessor {
    operation: Operation,
    loader: Loader,
    encoder: Encoder,
}

impl ImageProcessor {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            loader: Loader::new(),
            encoder: Encoder::new(),
        }
    }

    pub fn process<P: AsRef<Path>>(&self, input_path: P, output_path: P) -> Result<ProcessingReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        // Factor problems are reported before any file is touched.
        if let Operation::Resize { factors, .. } = &self.operation {
            factors.resolve()?;
        }

        self.validate_paths(input_path, output_path)?;

        let input = self.loader.load(input_path)?;
        let source_dimensions = (input.width(), input.height());

        let (output, notices) = match &self.operation {
            Operation::Resize {
                factors,
                interpolation,
            } => {
                let (factor_x, factor_y) = factors.resolve()?;
                let resized = Resizer::new(*interpolation).resize(&input, factor_x, factor_y)?;
                (resized.buffer, resized.notices)
            }
            Operation::ApplyMask { mask } => {
                let mask = self.loader.load(mask)?;
                (MaskApplier::new().apply(&input, &mask)?, Vec::new())
            }
            Operation::BinarizeByLightness { threshold } => {
                (Binarizer::new(*threshold).binarize(&input)?, Vec::new())
            }
        };

        self.save(&output, output_path)?;

        Ok(ProcessingReport {
            source_dimensions,
            output_dimensions: (output.width(), output.height()),
            output_mode: output.mode(),
            notices,
        })
    }

    fn save(&self, output: &PixelBuffer, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.encoder.save(output, output_path)
    }

    fn validate_paths(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        if !input_path.exists() {
            return Err(PixelToolError::InvalidParameter(format!(
                "Input file does not exist: {}",
                input_path.display()
            )));
        }

        if let Operation::ApplyMask { mask } = &self.operation {
            if !mask.exists() {
                return Err(PixelToolError::InvalidParameter(format!(
                    "Mask file does not exist: {}",
                    mask.display()
                )));
            }
        }

        // Fail before decoding when the output format cannot be inferred.
        self.encoder.detect_format(output_path)?;

        Ok(())
    }
}
