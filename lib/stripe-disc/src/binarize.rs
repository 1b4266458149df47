use crate::{BLACK, DEFAULT_THRESHOLD, Effect, StripeDiscResult, WHITE, ensure_dimensions};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma};
use imageproc::contrast::{ThresholdType, otsu_level, threshold};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Samples strictly greater than the cutoff become white
    Fixed(i32),
    /// Cutoff chosen from the image histogram
    Otsu,
}

/// Binarizer configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BinarizeConfig {
    #[derivative(Default(value = "ThresholdMode::Fixed(DEFAULT_THRESHOLD)"))]
    mode: ThresholdMode,
}

impl BinarizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed(threshold: i32) -> Self {
        Self {
            mode: ThresholdMode::Fixed(threshold),
        }
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    /// The cutoff that will be applied to `image`
    pub fn resolve_threshold(&self, image: &GrayImage) -> i32 {
        match self.mode {
            ThresholdMode::Fixed(value) => value,
            ThresholdMode::Otsu => i32::from(otsu_level(image)),
        }
    }
}

impl Effect for BinarizeConfig {
    type Input = GrayImage;
    type Output = GrayImage;

    fn apply(&self, image: &GrayImage) -> StripeDiscResult<GrayImage> {
        let (width, height) = image.dimensions();
        ensure_dimensions(width, height)?;

        let cutoff = self.resolve_threshold(image);
        log::debug!("binarize {width}x{height} with threshold {cutoff}");

        // Outside the sample range every pixel lands on the same side
        let binary = match u8::try_from(cutoff) {
            Ok(level) if level < u8::MAX => threshold(image, level, ThresholdType::Binary),
            Ok(_) => GrayImage::from_pixel(width, height, Luma([BLACK])),
            Err(_) if cutoff < 0 => GrayImage::from_pixel(width, height, Luma([WHITE])),
            Err(_) => GrayImage::from_pixel(width, height, Luma([BLACK])),
        };

        Ok(binary)
    }
}

/// Threshold `image` at a fixed cutoff
pub fn binarize(image: &GrayImage, threshold: i32) -> StripeDiscResult<GrayImage> {
    BinarizeConfig::fixed(threshold).apply(image)
}
