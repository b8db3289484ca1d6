// pixelmagic/src/processors/convert.rs
use crate::core::{ChannelMode, PixelBuffer, Result};
use rayon::prelude::*;

const OPAQUE: u8 = 255;

pub(crate) fn map_pixels<F>(buf: &PixelBuffer, out_channels: usize, f: F) -> Result<PixelBuffer>
where
    F: Fn(&[u8], &mut [u8]) + Send + Sync,
{
    let mut out = vec![0u8; buf.height() * buf.width() * out_channels];
    out.par_chunks_exact_mut(out_channels)
        .zip(buf.samples().par_chunks_exact(buf.channels()))
        .for_each(|(dst, src)| f(src, dst));

    PixelBuffer::from_vec(buf.height(), buf.width(), out_channels, out)
}

fn mean_rgb(px: &[u8]) -> f64 {
    (f64::from(px[0]) + f64::from(px[1]) + f64::from(px[2])) / 3.0
}

// RGBA luminance is the RGB mean scaled by alpha / 255, truncated.
pub fn to_l(buf: &PixelBuffer) -> Result<PixelBuffer> {
    match buf.mode() {
        ChannelMode::L => Ok(buf.clone()),
        ChannelMode::Rgb => map_pixels(buf, 1, |src, dst| {
            dst[0] = mean_rgb(src) as u8;
        }),
        ChannelMode::Rgba => map_pixels(buf, 1, |src, dst| {
            let alpha = f64::from(src[3]) / 255.0;
            dst[0] = (mean_rgb(src) * alpha) as u8;
        }),
    }
}

pub fn to_rgb(buf: &PixelBuffer) -> Result<PixelBuffer> {
    match buf.mode() {
        ChannelMode::L => map_pixels(buf, 3, |src, dst| dst.fill(src[0])),
        ChannelMode::Rgb => Ok(buf.clone()),
        ChannelMode::Rgba => map_pixels(buf, 3, |src, dst| dst.copy_from_slice(&src[..3])),
    }
}

pub fn to_rgba(buf: &PixelBuffer) -> Result<PixelBuffer> {
    match buf.mode() {
        ChannelMode::L => map_pixels(buf, 4, |src, dst| {
            dst[..3].fill(src[0]);
            dst[3] = OPAQUE;
        }),
        ChannelMode::Rgb => map_pixels(buf, 4, |src, dst| {
            dst[..3].copy_from_slice(src);
            dst[3] = OPAQUE;
        }),
        ChannelMode::Rgba => Ok(buf.clone()),
    }
}

impl PixelBuffer {
    pub fn to_l(&self) -> Result<PixelBuffer> {
        to_l(self)
    }

    pub fn to_rgb(&self) -> Result<PixelBuffer> {
        to_rgb(self)
    }

    pub fn to_rgba(&self) -> Result<PixelBuffer> {
        to_rgba(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(samples: Vec<u8>) -> PixelBuffer {
        let n = samples.len() / 3;
        PixelBuffer::from_vec(1, n, 3, samples).unwrap()
    }

    #[test]
    fn test_same_mode_is_identity() {
        let l = PixelBuffer::from_vec(1, 2, 1, vec![3, 4]).unwrap();
        let rgb = rgb(vec![1, 2, 3]);
        let rgba = PixelBuffer::from_vec(1, 1, 4, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(to_l(&l).unwrap(), l);
        assert_eq!(to_rgb(&rgb).unwrap(), rgb);
        assert_eq!(to_rgba(&rgba).unwrap(), rgba);
    }

    #[test]
    fn test_l_broadcasts() {
        let l = PixelBuffer::from_vec(1, 2, 1, vec![10, 200]).unwrap();

        let out = to_rgb(&l).unwrap();
        assert_eq!(out.mode(), ChannelMode::Rgb);
        assert_eq!(out.samples(), &[10, 10, 10, 200, 200, 200]);

        let out = to_rgba(&l).unwrap();
        assert_eq!(out.mode(), ChannelMode::Rgba);
        assert_eq!(out.samples(), &[10, 10, 10, 255, 200, 200, 200, 255]);
    }

    #[test]
    fn test_rgb_to_rgba_appends_opaque_alpha() {
        let out = to_rgba(&rgb(vec![1, 2, 3])).unwrap();
        assert_eq!(out.samples(), &[1, 2, 3, 255]);
    }

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        let rgba = PixelBuffer::from_vec(1, 1, 4, vec![100, 150, 200, 0]).unwrap();
        let out = to_rgb(&rgba).unwrap();
        assert_eq!(out.samples(), &[100, 150, 200]);
    }

    #[test]
    fn test_rgb_luminance_truncates() {
        // (1 + 1 + 2) / 3 = 1.33, (255 + 255 + 254) / 3 = 254.67
        let out = to_l(&rgb(vec![1, 1, 2, 255, 255, 254])).unwrap();
        assert_eq!(out.mode(), ChannelMode::L);
        assert_eq!(out.samples(), &[1, 254]);
    }

    #[test]
    fn test_rgba_luminance_is_scaled_by_alpha() {
        let rgba = PixelBuffer::from_vec(1, 3, 4, vec![
            90, 90, 90, 255, //
            90, 90, 90, 0, //
            200, 100, 0, 128,
        ])
        .unwrap();
        let out = to_l(&rgba).unwrap();
        // 100 * 128 / 255 = 50.19
        assert_eq!(out.samples(), &[90, 0, 50]);
    }

    #[test]
    fn test_round_trip_through_l_is_lossless_only_for_gray() {
        let gray = rgb(vec![7, 7, 7, 250, 250, 250]);
        let back = to_rgb(&to_rgba(&to_l(&gray).unwrap()).unwrap()).unwrap();
        assert_eq!(back, gray);

        // Colour is collapsed to luminance.
        let colour = rgb(vec![30, 60, 90]);
        let back = to_rgb(&to_rgba(&to_l(&colour).unwrap()).unwrap()).unwrap();
        assert_eq!(back.samples(), &[60, 60, 60]);
    }

    #[test]
    fn test_round_trip_through_rgba_restores_rgb() {
        let original = rgb(vec![30, 60, 90, 0, 255, 1]);
        let back = to_rgb(&to_rgba(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_translucent_alpha_is_lossy() {
        let rgba = PixelBuffer::from_vec(1, 1, 4, vec![200, 200, 200, 51]).unwrap();
        let back = to_rgb(&to_rgba(&to_l(&rgba).unwrap()).unwrap()).unwrap();
        assert_eq!(back.samples(), &[40, 40, 40]);
    }

    #[test]
    fn test_buffer_methods_delegate() {
        let l = PixelBuffer::from_vec(1, 1, 1, vec![9]).unwrap();
        assert_eq!(l.to_rgba().unwrap().samples(), &[9, 9, 9, 255]);
        assert_eq!(l.to_rgb().unwrap().samples(), &[9, 9, 9]);
        assert_eq!(l.to_rgb().unwrap().to_l().unwrap(), l);
    }
}
