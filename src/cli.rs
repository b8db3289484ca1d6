// pixelmagic/src/cli.rs
use crate::core::{Interpolation, Operation, ResizeFactors};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixelmagic", version, about = "Resize, mask and binarize images")]
pub struct Cli {
    /// Print full error traces and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resize an image by per-axis or combined factors
    Resize {
        /// Path to the input file
        #[arg(long)]
        input: PathBuf,

        /// Path to the output file
        #[arg(long)]
        output: PathBuf,

        /// Factor to resize the image by in the x direction
        #[arg(long)]
        factor_x: Option<f64>,

        /// Factor to resize the image by in the y direction
        #[arg(long)]
        factor_y: Option<f64>,

        /// Factor to resize the image by (equally) in both directions
        #[arg(long)]
        factor_xy: Option<f64>,

        /// Interpolation method
        #[arg(long, value_enum, default_value_t = Algorithm::Linear)]
        interp: Algorithm,
    },

    /// Zero every pixel whose mask red channel is zero
    ApplyMask {
        /// Path to the input image
        #[arg(long)]
        input: PathBuf,

        /// Path to the output image
        #[arg(long)]
        output: PathBuf,

        /// Path to the mask image
        #[arg(long)]
        mask: PathBuf,
    },

    /// Binarize an image by its lightness
    BinarizeByLightness {
        /// Path to the input image
        #[arg(long)]
        input: PathBuf,

        /// Path to the output image
        #[arg(long)]
        output: PathBuf,

        /// Threshold (0-255 inclusive) for the binarization
        #[arg(long)]
        threshold: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Area,
    Cubic,
    Linear,
}

impl From<Algorithm> for Interpolation {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Area => Interpolation::Area,
            Algorithm::Cubic => Interpolation::Cubic,
            Algorithm::Linear => Interpolation::Linear,
        }
    }
}

impl Commands {
    pub fn input(&self) -> &PathBuf {
        match self {
            Commands::Resize { input, .. }
            | Commands::ApplyMask { input, .. }
            | Commands::BinarizeByLightness { input, .. } => input,
        }
    }

    pub fn output(&self) -> &PathBuf {
        match self {
            Commands::Resize { output, .. }
            | Commands::ApplyMask { output, .. }
            | Commands::BinarizeByLightness { output, .. } => output,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Commands::Resize {
                factor_x,
                factor_y,
                factor_xy,
                interp,
                ..
            } => Operation::Resize {
                factors: ResizeFactors {
                    factor_x: *factor_x,
                    factor_y: *factor_y,
                    factor_xy: *factor_xy,
                },
                interpolation: (*interp).into(),
            },
            Commands::ApplyMask { mask, .. } => Operation::ApplyMask { mask: mask.clone() },
            Commands::BinarizeByLightness { threshold, .. } => {
                Operation::BinarizeByLightness { threshold: *threshold }
            }
        }
    }
}
