pub mod band_disc;
pub mod binarize;
pub mod grayscale;
pub mod io;
pub mod pipeline;

pub use band_disc::{BandDiscConfig, DiscGeometry, StripeSpan, band_disc};
pub use binarize::{BinarizeConfig, ThresholdMode, binarize};
pub use grayscale::{GrayscaleConfig, GrayscaleMode, grayscale};
pub use pipeline::{StripeDiscConfig, transform};

/// Background value of every output raster.
pub const WHITE: u8 = 255;
pub const BLACK: u8 = 0;

pub const DEFAULT_THRESHOLD: i32 = 128;
pub const DEFAULT_STRIPE_THICKNESS: i32 = 5;

pub type StripeDiscResult<T> = Result<T, StripeDiscError>;

#[derive(thiserror::Error, Debug)]
pub enum StripeDiscError {
    #[error("Invalid dimension: {width}x{height} raster has no pixels")]
    InvalidDimension { width: u32, height: u32 },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A single raster stage. Stages never mutate their input.
pub trait Effect {
    type Input;
    type Output;

    fn apply(&self, image: &Self::Input) -> StripeDiscResult<Self::Output>;
}

pub(crate) fn ensure_dimensions(width: u32, height: u32) -> StripeDiscResult<()> {
    if width == 0 || height == 0 {
        return Err(StripeDiscError::InvalidDimension { width, height });
    }

    Ok(())
}
