// pixelmagic/src/core/pixels.rs
use super::{PixelToolError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    L,
    Rgb,
    Rgba,
}

impl ChannelMode {
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(ChannelMode::L),
            3 => Ok(ChannelMode::Rgb),
            4 => Ok(ChannelMode::Rgba),
            n => Err(PixelToolError::UnsupportedChannelCount(n)),
        }
    }

    pub fn channels(self) -> usize {
        match self {
            ChannelMode::L => 1,
            ChannelMode::Rgb => 3,
            ChannelMode::Rgba => 4,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelMode::L => "L",
            ChannelMode::Rgb => "RGB",
            ChannelMode::Rgba => "RGBA",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl SampleData {
    pub fn len(&self) -> usize {
        match self {
            SampleData::U8(v) => v.len(),
            SampleData::U16(v) => v.len(),
            SampleData::I32(v) => v.len(),
            SampleData::F32(v) => v.len(),
            SampleData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SampleData::U8(_) => "uint8",
            SampleData::U16(_) => "uint16",
            SampleData::I32(_) => "int32",
            SampleData::F32(_) => "float32",
            SampleData::F64(_) => "float64",
        }
    }

    pub fn check_uint8_range(&self) -> Result<()> {
        let in_range = match self {
            SampleData::U8(_) => true,
            SampleData::U16(v) => v.iter().all(|&s| s <= 255),
            SampleData::I32(v) => v.iter().all(|&s| (0..=255).contains(&s)),
            SampleData::F32(v) => v.iter().all(|&s| is_uint8_value(f64::from(s))),
            SampleData::F64(v) => v.iter().all(|&s| is_uint8_value(s)),
        };

        if !in_range {
            return Err(PixelToolError::Validation(
                "only uint8 encoded samples (integers 0-255) are supported".to_string(),
            ));
        }
        Ok(())
    }

    pub fn into_u8(self) -> Result<Vec<u8>> {
        self.check_uint8_range()?;
        Ok(match self {
            SampleData::U8(v) => v,
            SampleData::U16(v) => v.into_iter().map(|s| s as u8).collect(),
            SampleData::I32(v) => v.into_iter().map(|s| s as u8).collect(),
            SampleData::F32(v) => v.into_iter().map(|s| s as u8).collect(),
            SampleData::F64(v) => v.into_iter().map(|s| s as u8).collect(),
        })
    }
}

fn is_uint8_value(s: f64) -> bool {
    s.is_finite() && s.trunc() == s && (0.0..=255.0).contains(&s)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawArray {
    pub shape: Vec<usize>,
    pub data: SampleData,
}

impl RawArray {
    pub fn new(shape: Vec<usize>, data: SampleData) -> Self {
        Self { shape, data }
    }

    pub fn from_u8(shape: Vec<usize>, data: Vec<u8>) -> Self {
        Self::new(shape, SampleData::U8(data))
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    samples: Vec<u8>,
    height: usize,
    width: usize,
    mode: ChannelMode,
}

impl PixelBuffer {
    pub fn new(raw: RawArray) -> Result<Self> {
        let RawArray { shape, data } = raw;

        let samples = match data {
            SampleData::U8(samples) => samples,
            other => {
                return Err(PixelToolError::Validation(format!(
                    "only uint8 samples are supported, got {}",
                    other.type_name()
                )))
            }
        };

        let (height, width, channels) = match shape.as_slice() {
            &[h, w] => (h, w, 1),
            &[h, w, c] => (h, w, c),
            dims => {
                return Err(PixelToolError::Validation(format!(
                    "expected a 2 or 3 dimensional array, got {} dimensions",
                    dims.len()
                )))
            }
        };

        let mode = ChannelMode::from_channels(channels).map_err(|_| {
            PixelToolError::Validation(format!(
                "unsupported channel count {} (only L, RGB and RGBA are supported)",
                channels
            ))
        })?;

        let expected = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| PixelToolError::Validation("array shape overflows".to_string()))?;
        if samples.len() != expected {
            return Err(PixelToolError::Validation(format!(
                "shape {:?} requires {} samples, got {}",
                shape,
                expected,
                samples.len()
            )));
        }

        Ok(Self {
            samples,
            height,
            width,
            mode,
        })
    }

    pub fn from_vec(height: usize, width: usize, channels: usize, samples: Vec<u8>) -> Result<Self> {
        Self::new(RawArray::from_u8(vec![height, width, channels], samples))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.mode.channels()
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels())
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let c = self.channels();
        let start = (row * self.width + col) * c;
        &self.samples[start..start + c]
    }

    pub fn sample(&self, row: usize, col: usize, channel: usize) -> u8 {
        self.pixel(row, col)[channel]
    }

    pub fn to_raw(&self) -> RawArray {
        RawArray::from_u8(
            vec![self.height, self.width, self.channels()],
            self.samples.clone(),
        )
    }

    pub fn set_pixels(&mut self, raw: RawArray) -> Result<()> {
        let replacement = PixelBuffer::new(raw)?;
        if replacement.mode != self.mode {
            return Err(PixelToolError::ModeMismatch {
                from: self.mode,
                to: replacement.mode,
            });
        }
        *self = replacement;
        Ok(())
    }
}
