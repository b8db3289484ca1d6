// pixelmagic/src/core/mod.rs
pub mod pixels;
pub mod processor;

pub use pixels::{ChannelMode, PixelBuffer, RawArray, SampleData};

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    Area,
    Cubic,
    #[default]
    Linear,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResizeFactors {
    pub factor_x: Option<f64>,
    pub factor_y: Option<f64>,
    pub factor_xy: Option<f64>,
}

impl ResizeFactors {
    pub fn per_axis(factor_x: f64, factor_y: f64) -> Self {
        Self {
            factor_x: Some(factor_x),
            factor_y: Some(factor_y),
            factor_xy: None,
        }
    }

    pub fn uniform(factor: f64) -> Self {
        Self {
            factor_xy: Some(factor),
            ..Default::default()
        }
    }

    pub fn resolve(&self) -> Result<(f64, f64)> {
        if self.factor_xy.is_some() && self.factor_x.is_some() {
            return Err(PixelToolError::ConflictingFactors(
                "factor-x and factor-xy cannot be specified at the same time".to_string(),
            ));
        }
        if self.factor_xy.is_some() && self.factor_y.is_some() {
            return Err(PixelToolError::ConflictingFactors(
                "factor-y and factor-xy cannot be specified at the same time".to_string(),
            ));
        }

        let (x, y) = match (self.factor_x, self.factor_y, self.factor_xy) {
            (Some(x), Some(y), None) => (x, y),
            (None, None, Some(xy)) => (xy, xy),
            _ => {
                return Err(PixelToolError::IncompleteFactors(
                    "both factor-x and factor-y must be specified when factor-xy is not".to_string(),
                ))
            }
        };

        validate_factor("x", x)?;
        validate_factor("y", y)?;
        Ok((x, y))
    }
}

pub fn validate_factor(axis: &str, factor: f64) -> Result<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(PixelToolError::InvalidParameter(format!(
            "resize factor in the {} direction must be a positive number, got {}",
            axis, factor
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Resize {
        factors: ResizeFactors,
        interpolation: Interpolation,
    },
    ApplyMask {
        mask: PathBuf,
    },
    BinarizeByLightness {
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    InexactScale {
        axis: Axis,
        factor: f64,
        source: usize,
        rounded: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InexactScale {
                axis,
                factor,
                source,
                rounded,
            } => write!(
                f,
                "the factor {} does not evenly divide the {} {}. The resize {} is determined by rounding ({})",
                factor, axis, source, axis, rounded
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingReport {
    pub source_dimensions: (usize, usize),
    pub output_dimensions: (usize, usize),
    pub output_mode: ChannelMode,
    pub notices: Vec<Notice>,
}

#[derive(Error, Debug)]
pub enum PixelToolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot change pixel data from {from} to {to}")]
    ModeMismatch { from: ChannelMode, to: ChannelMode },

    #[error("Mask dimensions {mask:?} do not match input dimensions {input:?} (height, width)")]
    DimensionMismatch {
        input: (usize, usize),
        mask: (usize, usize),
    },

    #[error("Unsupported channel count {0}: only single channel, RGB, or RGBA images are supported")]
    UnsupportedChannelCount(usize),

    #[error("Conflicting resize factors: {0}")]
    ConflictingFactors(String),

    #[error("Incomplete resize factors: {0}")]
    IncompleteFactors(String),

    #[error("Unsupported image mode {0}: only L, RGB, and RGBA images are supported")]
    UnsupportedMode(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

pub type Result<T> = std::result::Result<T, PixelToolError>;
