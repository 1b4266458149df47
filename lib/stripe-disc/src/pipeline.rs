use crate::{
    BandDiscConfig, BinarizeConfig, DEFAULT_STRIPE_THICKNESS, DEFAULT_THRESHOLD, Effect,
    GrayscaleConfig, GrayscaleMode, StripeDiscResult, ThresholdMode, ensure_dimensions,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, GrayImage, RgbImage};
use std::time::Instant;

/// Full grayscale -> binarize -> band-disc chain
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct StripeDiscConfig {
    #[derivative(Default(value = "GrayscaleMode::Luminance"))]
    grayscale: GrayscaleMode,

    #[derivative(Default(value = "ThresholdMode::Fixed(DEFAULT_THRESHOLD)"))]
    threshold: ThresholdMode,

    #[derivative(Default(value = "DEFAULT_STRIPE_THICKNESS"))]
    stripe_thickness: i32,
}

impl StripeDiscConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grayscale(&self) -> GrayscaleMode {
        self.grayscale
    }

    pub fn threshold(&self) -> ThresholdMode {
        self.threshold
    }

    pub fn stripe_thickness(&self) -> i32 {
        self.stripe_thickness
    }

    /// Decoded images of any pixel layout are flattened to RGB first
    pub fn apply_dynamic(&self, image: &DynamicImage) -> StripeDiscResult<GrayImage> {
        self.apply(&image.to_rgb8())
    }
}

impl Effect for StripeDiscConfig {
    type Input = RgbImage;
    type Output = GrayImage;

    fn apply(&self, image: &RgbImage) -> StripeDiscResult<GrayImage> {
        let (width, height) = image.dimensions();
        ensure_dimensions(width, height)?;

        let band_disc = BandDiscConfig::new().with_stripe_thickness(self.stripe_thickness);
        band_disc.validate()?;

        let start = Instant::now();
        let gray = GrayscaleConfig::new()
            .with_mode(self.grayscale)
            .apply(image)?;
        let binary = BinarizeConfig::new()
            .with_mode(self.threshold)
            .apply(&gray)?;
        let output = band_disc.apply(&binary)?;

        log::debug!(
            "stripe disc {width}x{height} ({:?}, {:?}, thickness {}) took {:.2?}",
            self.grayscale,
            self.threshold,
            self.stripe_thickness,
            start.elapsed()
        );

        Ok(output)
    }
}

/// Run the whole effect with the default grayscale weighting
pub fn transform(
    input: &RgbImage,
    threshold: i32,
    stripe_thickness: i32,
) -> StripeDiscResult<GrayImage> {
    StripeDiscConfig::new()
        .with_threshold(ThresholdMode::Fixed(threshold))
        .with_stripe_thickness(stripe_thickness)
        .apply(input)
}
