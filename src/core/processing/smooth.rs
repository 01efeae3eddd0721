use tracing::debug;

use crate::types::Raster;

/// 3x3 SMOOTH kernel, row-major.
const SMOOTH_KERNEL: [u32; 9] = [1, 1, 1, 1, 5, 1, 1, 1, 1];
const SMOOTH_DIVISOR: u32 = 13;

/// Apply the SMOOTH kernel to every channel (alpha included).
///
/// The outermost ring of pixels is copied unchanged. Rasters narrower or
/// shorter than 3 pixels are returned as-is.
pub fn smooth(raster: &Raster) -> Raster {
    let width = raster.width as usize;
    let height = raster.height as usize;
    if width < 3 || height < 3 {
        debug!(width, height, "Image too small to smooth, skipping");
        return raster.clone();
    }

    let channels = raster.layout.channels();
    let stride = width * channels;
    let src = &raster.data;
    let mut out = src.clone();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for ch in 0..channels {
                let mut acc = 0u32;
                for ky in 0..3 {
                    let row = (y + ky - 1) * stride;
                    for kx in 0..3 {
                        let idx = row + (x + kx - 1) * channels + ch;
                        acc += u32::from(src[idx]) * SMOOTH_KERNEL[ky * 3 + kx];
                    }
                }
                out[y * stride + x * channels + ch] =
                    ((acc + SMOOTH_DIVISOR / 2) / SMOOTH_DIVISOR) as u8;
            }
        }
    }

    Raster::new(raster.width, raster.height, raster.layout, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelLayout;

    fn gray_rgb(width: u32, height: u32, values: &[u8]) -> Raster {
        let data = values.iter().flat_map(|&v| [v, v, v]).collect();
        Raster::new(width, height, PixelLayout::Rgb, data)
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let raster = gray_rgb(5, 4, &[90; 20]);
        assert_eq!(smooth(&raster), raster);
    }

    #[test]
    fn test_center_spike_spreads() {
        #[rustfmt::skip]
        let raster = gray_rgb(3, 3, &[
            0, 0, 0,
            0, 255, 0,
            0, 0, 0,
        ]);
        let result = smooth(&raster);
        // 255 * 5 / 13 = 98.08
        assert_eq!(&result.data[4 * 3..4 * 3 + 3], &[98, 98, 98]);
        // Border ring untouched
        assert_eq!(result.data[0], 0);
        assert_eq!(result.data[8 * 3], 0);
    }

    #[test]
    fn test_neighbor_weight() {
        let mut values = [0u8; 25];
        values[12] = 255;
        let result = smooth(&gray_rgb(5, 5, &values));
        // Pixel (1,1) sees the spike with weight 1: 255 / 13 = 19.6
        assert_eq!(result.data[(5 + 1) * 3], 20);
    }

    #[test]
    fn test_alpha_channel_filtered() {
        let mut data = vec![0u8; 3 * 3 * 4];
        data[4 * 4 + 3] = 255;
        let raster = Raster::new(3, 3, PixelLayout::Rgba, data);
        let result = smooth(&raster);
        assert_eq!(result.data[4 * 4 + 3], 98);
    }

    #[test]
    fn test_tiny_image_skipped() {
        let raster = gray_rgb(2, 5, &[10, 200, 10, 200, 10, 200, 10, 200, 10, 200]);
        assert_eq!(smooth(&raster), raster);
    }
}
