//! Band-disc masking.
//!
//! The binarized raster is cut into horizontal stripes of `t` rows separated
//! by gaps of `t` rows. Each stripe keeps the part of the source that lies
//! inside a centered disc; everything else is white. The width kept for a
//! stripe is taken from the distance of one representative row (`y + t / 2`)
//! to the disc center and then applied to every row of the stripe, which is
//! what gives the effect its blocky banded outline.

use crate::{
    DEFAULT_STRIPE_THICKNESS, Effect, StripeDiscError, StripeDiscResult, WHITE, ensure_dimensions,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma};
use std::ops::Range;

/// Center and radius of the masking disc for a raster size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscGeometry {
    pub cx: u32,
    pub cy: u32,
    pub radius: f64,
}

impl DiscGeometry {
    /// Shrink applied to the largest inscribed radius so bands never reach the edge
    pub const RADIUS_SCALE: f64 = 0.95;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cx: width / 2,
            cy: height / 2,
            radius: f64::from(width.min(height) / 2) * Self::RADIUS_SCALE,
        }
    }

    /// Half of the chord at vertical distance `dv` from the center, or `None`
    /// when that distance is not strictly inside the disc.
    pub fn half_width(&self, dv: u64) -> Option<u32> {
        let dv = dv as f64;
        if dv >= self.radius {
            return None;
        }

        Some((self.radius * self.radius - dv * dv).sqrt().floor() as u32)
    }
}

/// The region one active stripe copies from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeSpan {
    pub rows: Range<u32>,
    pub cols: Range<u32>,
}

impl StripeSpan {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.rows.contains(&y) && self.cols.contains(&x)
    }
}

/// Band-disc masker configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BandDiscConfig {
    #[derivative(Default(value = "DEFAULT_STRIPE_THICKNESS"))]
    stripe_thickness: i32,
}

impl BandDiscConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stripe_thickness(&self) -> i32 {
        self.stripe_thickness
    }

    /// Stripe thickness as a row count, rejecting non-positive values
    pub fn validate(&self) -> StripeDiscResult<u32> {
        u32::try_from(self.stripe_thickness)
            .ok()
            .filter(|&t| t >= 1)
            .ok_or_else(|| {
                StripeDiscError::InvalidParameter(format!(
                    "stripe thickness must be >= 1, got {}",
                    self.stripe_thickness
                ))
            })
    }

    /// Copy regions of every stripe that intersects the disc, top to bottom
    pub fn stripe_spans(&self, width: u32, height: u32) -> StripeDiscResult<Vec<StripeSpan>> {
        ensure_dimensions(width, height)?;
        let thickness = u64::from(self.validate()?);
        let geometry = DiscGeometry::new(width, height);
        let period = (thickness * 2) as usize;

        let spans = (0..u64::from(height))
            .step_by(period)
            .filter_map(|y| {
                let representative = y + thickness / 2;
                let dv = representative.abs_diff(u64::from(geometry.cy));
                let hw = geometry.half_width(dv)?;

                let row_end = (y + thickness).min(u64::from(height));
                Some(StripeSpan {
                    rows: y as u32..row_end as u32,
                    cols: geometry.cx.saturating_sub(hw)..geometry.cx.saturating_add(hw).min(width),
                })
            })
            .collect::<Vec<_>>();

        log::debug!(
            "band disc {width}x{height}: center=({}, {}) radius={:.2} thickness={thickness} stripes={}",
            geometry.cx,
            geometry.cy,
            geometry.radius,
            spans.len()
        );

        Ok(spans)
    }
}

impl Effect for BandDiscConfig {
    type Input = GrayImage;
    type Output = GrayImage;

    fn apply(&self, image: &GrayImage) -> StripeDiscResult<GrayImage> {
        let (width, height) = image.dimensions();
        let spans = self.stripe_spans(width, height)?;

        let mut output = GrayImage::from_pixel(width, height, Luma([WHITE]));
        let source = image.as_raw();
        let target: &mut [u8] = &mut output;
        let stride = width as usize;

        for span in &spans {
            let (x0, x1) = (span.cols.start as usize, span.cols.end as usize);
            if x0 >= x1 {
                continue;
            }

            for y in span.rows.clone() {
                let row = y as usize * stride;
                target[row + x0..row + x1].copy_from_slice(&source[row + x0..row + x1]);
            }
        }

        Ok(output)
    }
}

/// Mask a binarized raster with stripes of `stripe_thickness` rows
pub fn band_disc(image: &GrayImage, stripe_thickness: i32) -> StripeDiscResult<GrayImage> {
    BandDiscConfig::new()
        .with_stripe_thickness(stripe_thickness)
        .apply(image)
}
