mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli, Commands};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    Axis, ChannelMode, Interpolation, Notice, Operation, PixelBuffer, PixelToolError,
    ProcessingReport, RawArray, ResizeFactors, Result, SampleData,
};
pub use processors::{
    convert, to_l, to_rgb, to_rgba, Binarizer, Encoder, Loader, MaskApplier, Resized, Resizer,
};
pub use utils::{format_file_size, image_format_to_string};

pub mod prelude {
    pub use crate::{
        Binarizer, ChannelMode, Encoder, ImageProcessor, Loader, MaskApplier, Operation,
        PixelBuffer, Resizer,
    };
}
