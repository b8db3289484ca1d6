// pixelmagic/src/processors/mod.rs
mod binarize;
pub mod convert;
mod encoder;
mod loader;
mod mask;
mod resizer;

pub use binarize::Binarizer;
pub use convert::{to_l, to_rgb, to_rgba};
pub use encoder::Encoder;
pub use loader::Loader;
pub use mask::MaskApplier;
pub use resizer::{Resized, Resizer};

pub mod prelude {
    pub use super::{Binarizer, Encoder, Loader, MaskApplier, Resizer};
}
