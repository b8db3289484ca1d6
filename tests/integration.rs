#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use pixelmagic::{
        ChannelMode, ImageProcessor, Interpolation, Loader, Notice, Operation, PixelToolError,
        ResizeFactors,
    };

    fn resize_op(factors: ResizeFactors) -> Operation {
        Operation::Resize {
            factors,
            interpolation: Interpolation::Linear,
        }
    }

    #[test]
    fn test_resize_image() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("test.png");
        RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]))
            .save(input_path.path())
            .unwrap();

        let output_path = temp_dir.child("output.png");

        let processor = ImageProcessor::new(resize_op(ResizeFactors::per_axis(2.0, 2.0)));
        let report = processor.process(input_path.path(), output_path.path()).unwrap();

        assert!(output_path.path().exists());
        assert_eq!(report.source_dimensions, (3, 3));
        assert_eq!(report.output_dimensions, (6, 6));
        assert_eq!(report.output_mode, ChannelMode::Rgb);
        assert!(report.notices.is_empty());

        let written = Loader::new().load(output_path.path()).unwrap();
        assert_eq!(written.shape(), (6, 6, 3));
        assert!(written.samples().chunks(3).all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_resize_as_format_conversion() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("gray.bmp");
        let output_path = temp_dir.child("gray.png");
        let mut img = GrayImage::new(2, 2);
        img.put_pixel(1, 0, Luma([99]));
        img.save(input_path.path()).unwrap();

        let processor = ImageProcessor::new(resize_op(ResizeFactors::uniform(1.0)));
        processor.process(input_path.path(), output_path.path()).unwrap();

        let before = Loader::new().load(input_path.path()).unwrap();
        let after = Loader::new().load(output_path.path()).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn test_resize_reports_rounding() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("in.png");
        let output_path = temp_dir.child("out.png");
        RgbaImage::from_pixel(5, 4, Rgba([1, 2, 3, 4]))
            .save(input_path.path())
            .unwrap();

        let processor = ImageProcessor::new(resize_op(ResizeFactors::per_axis(1.5, 2.0)));
        let report = processor.process(input_path.path(), output_path.path()).unwrap();

        assert_eq!(report.output_dimensions, (8, 8));
        assert_eq!(report.output_mode, ChannelMode::Rgba);
        assert_eq!(report.notices.len(), 1);
        assert!(matches!(report.notices[0], Notice::InexactScale { rounded: 8, .. }));
    }

    #[test]
    fn test_incomplete_factors() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("in.png");
        RgbImage::new(2, 2).save(input_path.path()).unwrap();

        let factors = ResizeFactors {
            factor_x: Some(2.0),
            ..Default::default()
        };
        let err = ImageProcessor::new(resize_op(factors))
            .process(input_path.path(), temp_dir.child("out.png").path())
            .unwrap_err();
        assert!(matches!(err, PixelToolError::IncompleteFactors(_)));
    }

    #[test]
    fn test_apply_mask() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("in.png");
        let mask_path = temp_dir.child("mask.png");
        let output_path = temp_dir.child("out.png");

        RgbImage::from_pixel(2, 2, Rgb([40, 50, 60]))
            .save(input_path.path())
            .unwrap();
        let mut mask = GrayImage::new(2, 2);
        mask.put_pixel(1, 0, Luma([255]));
        mask.put_pixel(0, 1, Luma([255]));
        mask.save(mask_path.path()).unwrap();

        let processor = ImageProcessor::new(Operation::ApplyMask {
            mask: mask_path.path().to_path_buf(),
        });
        processor.process(input_path.path(), output_path.path()).unwrap();

        let out = Loader::new().load(output_path.path()).unwrap();
        assert_eq!(out.mode(), ChannelMode::Rgb);
        assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(out.pixel(0, 1), &[40, 50, 60]);
        assert_eq!(out.pixel(1, 0), &[40, 50, 60]);
        assert_eq!(out.pixel(1, 1), &[0, 0, 0]);
    }

    #[test]
    fn test_apply_mask_dimension_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("in.png");
        let mask_path = temp_dir.child("mask.png");
        RgbImage::new(2, 2).save(input_path.path()).unwrap();
        GrayImage::new(3, 2).save(mask_path.path()).unwrap();

        let processor = ImageProcessor::new(Operation::ApplyMask {
            mask: mask_path.path().to_path_buf(),
        });
        let err = processor
            .process(input_path.path(), temp_dir.child("out.png").path())
            .unwrap_err();
        assert!(matches!(err, PixelToolError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_binarize_by_lightness() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.child("in.png");
        let output_path = temp_dir.child("out.png");

        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([100, 100, 100]));
        img.put_pixel(1, 0, Rgb([99, 99, 100]));
        img.save(input_path.path()).unwrap();

        let processor = ImageProcessor::new(Operation::BinarizeByLightness { threshold: 100.0 });
        let report = processor.process(input_path.path(), output_path.path()).unwrap();
        assert_eq!(report.output_mode, ChannelMode::L);

        let out = Loader::new().load(output_path.path()).unwrap();
        assert_eq!(out.samples(), &[255, 0]);
    }

    #[test]
    fn test_invalid_file() {
        let processor = ImageProcessor::new(Operation::BinarizeByLightness { threshold: 1.0 });

        let result = processor.process("nonexistent.png", "output.png");

        assert!(result.is_err());
    }
}
