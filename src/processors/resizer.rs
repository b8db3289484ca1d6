// pixelmagic/src/processors/resizer.rs
use super::convert::{map_pixels, to_rgb, to_rgba};
use crate::core::{
    validate_factor, Axis, ChannelMode, Interpolation, Notice, PixelBuffer, PixelToolError,
    RawArray, Result,
};
use crate::utils::validate_dimensions;
use image::{imageops, imageops::FilterType, RgbaImage};

#[derive(Debug, Clone)]
pub struct Resized {
    pub buffer: PixelBuffer,
    pub notices: Vec<Notice>,
}

pub struct Resizer {
    interpolation: Interpolation,
}

impl Resizer {
    pub fn new(interpolation: Interpolation) -> Self {
        Self { interpolation }
    }

    pub fn resize_raw(&self, raw: RawArray, factor_x: f64, factor_y: f64) -> Result<Resized> {
        let RawArray { shape, data } = raw;
        let samples = data.into_u8()?;
        let input = PixelBuffer::new(RawArray::from_u8(shape, samples))?;
        self.resize(&input, factor_x, factor_y)
    }

    pub fn resize(&self, input: &PixelBuffer, factor_x: f64, factor_y: f64) -> Result<Resized> {
        validate_factor("x", factor_x)?;
        validate_factor("y", factor_y)?;
        let original_mode = ChannelMode::from_channels(input.channels())?;

        let mut notices = Vec::new();
        let width = scale_dimension(Axis::Width, input.width(), factor_x, &mut notices)?;
        let height = scale_dimension(Axis::Height, input.height(), factor_y, &mut notices)?;

        // Also lets the resize pass double as a plain format conversion.
        if factor_x == 1.0 && factor_y == 1.0 {
            log::debug!("Resize factors are 1, skipping interpolation");
            return Ok(Resized {
                buffer: input.clone(),
                notices,
            });
        }

        log::debug!(
            "Resizing {} image from {}x{} to {}x{} ({:?})",
            original_mode,
            input.width(),
            input.height(),
            width,
            height,
            self.interpolation
        );

        validate_dimensions(width, height, 4)?;

        let working = to_rgba(input)?;
        let resized = if working.width() == 0 || working.height() == 0 {
            PixelBuffer::from_vec(height, width, 4, vec![0; height * width * 4])?
        } else {
            self.interpolate(working, width, height)?
        };

        Ok(Resized {
            buffer: demote(&resized, original_mode)?,
            notices,
        })
    }

    fn interpolate(&self, working: PixelBuffer, width: usize, height: usize) -> Result<PixelBuffer> {
        let (src_w, src_h) = (to_u32(working.width())?, to_u32(working.height())?);
        let (dst_w, dst_h) = (to_u32(width)?, to_u32(height)?);

        let source = RgbaImage::from_raw(src_w, src_h, working.into_samples()).ok_or_else(|| {
            PixelToolError::ProcessingError("working buffer does not match its dimensions".to_string())
        })?;

        let output = match self.get_filter_type() {
            Some(filter) => imageops::resize(&source, dst_w, dst_h, filter),
            None if dst_w <= src_w && dst_h <= src_h => imageops::thumbnail(&source, dst_w, dst_h),
            None => imageops::resize(&source, dst_w, dst_h, FilterType::Triangle),
        };

        PixelBuffer::from_vec(height, width, 4, output.into_raw())
    }

    // None selects area averaging.
    fn get_filter_type(&self) -> Option<FilterType> {
        match self.interpolation {
            Interpolation::Area => None,
            Interpolation::Cubic => Some(FilterType::CatmullRom),
            Interpolation::Linear => Some(FilterType::Triangle),
        }
    }
}

fn scale_dimension(axis: Axis, source: usize, factor: f64, notices: &mut Vec<Notice>) -> Result<usize> {
    let exact = source as f64 * factor;
    let rounded = exact.round_ties_even();

    if rounded < 1.0 && source > 0 {
        return Err(PixelToolError::InvalidParameter(format!(
            "the factor {} reduces the {} {} to zero pixels",
            factor, axis, source
        )));
    }
    if rounded > u32::MAX as f64 {
        return Err(PixelToolError::InvalidParameter(format!(
            "the factor {} makes the {} {} too large",
            factor, axis, source
        )));
    }

    let rounded = rounded as usize;
    if exact != rounded as f64 {
        notices.push(Notice::InexactScale {
            axis,
            factor,
            source,
            rounded,
        });
    }
    Ok(rounded)
}

fn to_u32(n: usize) -> Result<u32> {
    u32::try_from(n).map_err(|_| PixelToolError::InvalidParameter(format!("dimension {} is too large", n)))
}

fn demote(working: &PixelBuffer, mode: ChannelMode) -> Result<PixelBuffer> {
    match mode {
        ChannelMode::L => map_pixels(working, 1, |src, dst| dst[0] = src[0]),
        ChannelMode::Rgb => to_rgb(working),
        ChannelMode::Rgba => Ok(working.clone()),
    }
}
