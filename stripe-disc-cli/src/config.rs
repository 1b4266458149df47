use anyhow::{Context, Result};
use clap::ValueEnum;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use stripe_disc::{
    DEFAULT_STRIPE_THICKNESS, DEFAULT_THRESHOLD, GrayscaleMode, StripeDiscConfig, ThresholdMode,
};

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Grayscale {
    Luminance,
    Average,
    Rec709,
}

impl From<Grayscale> for GrayscaleMode {
    fn from(value: Grayscale) -> Self {
        match value {
            Grayscale::Luminance => GrayscaleMode::Luminance,
            Grayscale::Average => GrayscaleMode::Average,
            Grayscale::Rec709 => GrayscaleMode::Rec709,
        }
    }
}

/// Effect settings, as stored in an optional TOML file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Settings {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    pub threshold: i32,

    #[derivative(Default(value = "DEFAULT_STRIPE_THICKNESS"))]
    pub stripe_thickness: i32,

    #[derivative(Default(value = "Grayscale::Luminance"))]
    pub grayscale: Grayscale,

    pub otsu: bool,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {} failed", path.display()))?;

        toml::from_str::<Settings>(&text)
            .with_context(|| format!("parse config {} failed", path.display()))
    }

    pub fn effect(&self) -> StripeDiscConfig {
        let threshold = if self.otsu {
            ThresholdMode::Otsu
        } else {
            ThresholdMode::Fixed(self.threshold)
        };

        StripeDiscConfig::new()
            .with_grayscale(self.grayscale.into())
            .with_threshold(threshold)
            .with_stripe_thickness(self.stripe_thickness)
    }
}
