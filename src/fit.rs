// ABOUTME: Image fitting for the deckgen library
// ABOUTME: Scales an image down to fit the canvas and centers it

use crate::config::CanvasConfig;
use crate::elements::Rect;

/// Pixel density used to relate image pixels to canvas inches.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Fit an image of `width` x `height` pixels on the canvas.
///
/// Images are only ever shrunk, never enlarged, and keep their aspect
/// ratio. Offsets are clamped at zero.
pub fn fit_image(width: u32, height: u32, canvas: &CanvasConfig) -> Rect {
    let (width, height) = (f64::from(width), f64::from(height));

    let width_ratio = canvas.width * PIXELS_PER_INCH / width;
    let height_ratio = canvas.height * PIXELS_PER_INCH / height;
    let scale = width_ratio.min(height_ratio).min(1.0);

    let fitted_width = width * scale / PIXELS_PER_INCH;
    let fitted_height = height * scale / PIXELS_PER_INCH;

    Rect::new(
        ((canvas.width - fitted_width) / 2.0).max(0.0),
        ((canvas.height - fitted_height) / 2.0).max(0.0),
        fitted_width,
        fitted_height,
    )
}
