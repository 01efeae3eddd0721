use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::BoundingBox;

/// Upper bound on factor reductions before falling back to an exact fit.
const MAX_REDUCTION_STEPS: u32 = 10_000;

/// Size that fits `original` inside `bounds` while keeping its aspect ratio.
///
/// Images already inside the box are returned unchanged, so nothing is ever
/// upscaled. The free side is rounded to whichever of floor/ceil keeps the
/// aspect ratio closest to the source (ties go to floor), and is at least 1.
pub fn thumbnail_size(original: (u32, u32), bounds: BoundingBox) -> (u32, u32) {
    let (width, height) = original;
    if width == 0 || height == 0 {
        return original;
    }
    if bounds.width >= width && bounds.height >= height {
        return original;
    }

    let aspect = f64::from(width) / f64::from(height);
    let box_w = f64::from(bounds.width);
    let box_h = f64::from(bounds.height);

    if box_w / box_h >= aspect {
        let new_width = round_aspect(box_h * aspect, |n| (aspect - n / box_h).abs());
        (new_width, bounds.height)
    } else {
        let new_height = round_aspect(box_w / aspect, |n| {
            if n == 0.0 { 0.0 } else { (aspect - box_w / n).abs() }
        });
        (bounds.width, new_height)
    }
}

fn round_aspect(value: f64, aspect_error: impl Fn(f64) -> f64) -> u32 {
    let (lo, hi) = (value.floor(), value.ceil());
    let best = if aspect_error(hi) < aspect_error(lo) { hi } else { lo };
    (best as u32).max(1)
}

/// Scale `original` by `scale_factor`, lowering the factor by `step` until
/// both sides are at or under `max_dimension`.
///
/// The reduction is a running float sum of `step`, so the factors match an
/// accumulating loop bit for bit (`0.1 + 0.1 + 0.1 != 0.3`).
/// Sides are truncated toward zero. When the factor would reach zero (or
/// after `MAX_REDUCTION_STEPS`) the exact fitting factor
/// `max_dimension / long_side` is used instead. Both sides are at least 1.
pub fn scaled_size(
    original: (u32, u32),
    scale_factor: f64,
    max_dimension: u32,
    step: f64,
) -> Result<(u32, u32)> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Err(Error::invalid("scale_factor", scale_factor));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::invalid("step", step));
    }
    if max_dimension == 0 {
        return Err(Error::ZeroSize {
            width: max_dimension,
            height: max_dimension,
        });
    }

    let (width, height) = original;
    let candidate = |factor: f64| {
        (
            (f64::from(width) * factor) as u32,
            (f64::from(height) * factor) as u32,
        )
    };
    let fits = |(w, h): (u32, u32)| w <= max_dimension && h <= max_dimension;

    let mut size = candidate(scale_factor);
    let mut reduction = step;
    let mut reductions = 0u32;
    while !fits(size) {
        reductions += 1;
        let factor = scale_factor - reduction;
        if factor <= 0.0 || reductions > MAX_REDUCTION_STEPS {
            let fit = f64::from(max_dimension) / f64::from(width.max(height));
            warn!(
                scale_factor,
                fit, "Scale factor exhausted before fitting, using exact fit"
            );
            let (w, h) = candidate(fit);
            size = (w.min(max_dimension), h.min(max_dimension));
            break;
        }
        size = candidate(factor);
        reduction += step;
        debug!(
            factor,
            new_width = size.0,
            new_height = size.1,
            "Reduced scale factor"
        );
    }

    Ok((size.0.max(1), size.1.max(1)))
}
