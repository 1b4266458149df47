use crate::{Effect, StripeDiscResult, ensure_dimensions};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use photon_rs::{PhotonImage, monochrome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayscaleMode {
    /// ITU-R 601-2 luma: (299 R + 587 G + 114 B) / 1000, rounded
    Luminance,
    Average,
    Rec709,
}

/// Grayscale reducer configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GrayscaleConfig {
    #[derivative(Default(value = "GrayscaleMode::Luminance"))]
    mode: GrayscaleMode,
}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GrayscaleMode {
        self.mode
    }
}

impl Effect for GrayscaleConfig {
    type Input = RgbImage;
    type Output = GrayImage;

    fn apply(&self, image: &RgbImage) -> StripeDiscResult<GrayImage> {
        let (width, height) = image.dimensions();
        ensure_dimensions(width, height)?;

        let gray = match self.mode {
            GrayscaleMode::Luminance => luminance(image),
            GrayscaleMode::Average => average(image),
            GrayscaleMode::Rec709 => image::imageops::grayscale(image),
        };

        Ok(gray)
    }
}

/// Reduce with the default luminance weighting
pub fn grayscale(image: &RgbImage) -> StripeDiscResult<GrayImage> {
    GrayscaleConfig::new().apply(image)
}

fn luminance(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut gray = GrayImage::new(width, height);

    for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
        let [r, g, b] = src.0.map(u32::from);
        let luma = (299 * r + 587 * g + 114 * b + 500) / 1000;
        *dst = Luma([luma as u8]);
    }

    gray
}

fn average(image: &RgbImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let rgba = DynamicImage::ImageRgb8(image.clone()).into_rgba8();
    let mut photon_img = PhotonImage::new(rgba.into_raw(), width, height);
    monochrome::grayscale(&mut photon_img);

    // photon writes the mean into all three colour channels
    let raw = photon_img.get_raw_pixels();
    let samples = raw.chunks_exact(4).map(|px| px[0]).collect::<Vec<u8>>();
    GrayImage::from_raw(width, height, samples)
        .unwrap_or_else(|| GrayImage::new(width, height))
}
