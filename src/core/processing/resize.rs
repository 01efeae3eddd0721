use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{ResizeOptions, Resizer};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{Raster, ResampleFilter};

/// Resample `raster` to exactly `target_width` x `target_height`.
pub fn resize_raster(
    raster: &Raster,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<Raster> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::ZeroSize {
            width: target_width,
            height: target_height,
        });
    }

    if raster.dimensions() == (target_width, target_height) {
        debug!(
            width = target_width,
            height = target_height,
            "Image already at target size, skipping resize"
        );
        return Ok(raster.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{} ({})",
        raster.width, raster.height, target_width, target_height, filter
    );

    let pixel_type = raster.layout.pixel_type();
    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();

    let src_image = ImageRef::new(raster.width, raster.height, &raster.data, pixel_type)?;
    let mut dst_image = Image::new(target_width, target_height, pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(Raster::new(
        target_width,
        target_height,
        raster.layout,
        dst_image.into_vec(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelLayout;

    fn create_test_raster(width: u32, height: u32, layout: PixelLayout) -> Raster {
        let len = width as usize * height as usize * layout.channels();
        Raster::new(width, height, layout, vec![128; len])
    }

    #[test]
    fn test_resize_downscale_rgb() {
        let raster = create_test_raster(800, 600, PixelLayout::Rgb);
        let result = resize_raster(&raster, 400, 300, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(result.dimensions(), (400, 300));
        assert_eq!(result.data.len(), 400 * 300 * 3);
        assert_eq!(result.layout, PixelLayout::Rgb);
    }

    #[test]
    fn test_resize_downscale_rgba() {
        let raster = create_test_raster(64, 32, PixelLayout::Rgba);
        let result = resize_raster(&raster, 16, 8, ResampleFilter::CatmullRom).unwrap();
        assert_eq!(result.dimensions(), (16, 8));
        assert_eq!(result.data.len(), 16 * 8 * 4);
    }

    #[test]
    fn test_resize_uniform_stays_uniform() {
        let raster = create_test_raster(50, 50, PixelLayout::Rgb);
        let result = resize_raster(&raster, 10, 10, ResampleFilter::Bilinear).unwrap();
        assert!(result.data.iter().all(|&v| (127..=129).contains(&v)));
    }

    #[test]
    fn test_resize_same_size_is_identity() {
        let raster = create_test_raster(10, 7, PixelLayout::Rgb);
        let result = resize_raster(&raster, 10, 7, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(result, raster);
    }

    #[test]
    fn test_resize_zero_target_rejected() {
        let raster = create_test_raster(10, 10, PixelLayout::Rgb);
        assert!(matches!(
            resize_raster(&raster, 0, 5, ResampleFilter::Nearest),
            Err(Error::ZeroSize { .. })
        ));
    }
}
