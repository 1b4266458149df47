//! Stripe disc demo
//! Renders the effect for a few stripe thicknesses and thresholds

use std::path::Path;
use stripe_disc::{Effect, StripeDiscConfig, ThresholdMode, io};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Run `cargo run -p stripe-disc --example create_test_image` first
    let img = io::load_image("data/test.png")?.to_rgb8();

    for thickness in [1, 3, 5, 10, 20] {
        for threshold in [64, 128, 192] {
            let effect = StripeDiscConfig::new()
                .with_threshold(ThresholdMode::Fixed(threshold))
                .with_stripe_thickness(thickness);
            let output = effect.apply(&img)?;

            let filename = format!("stripe_disc_t{thickness}_th{threshold}.png");
            io::save_png(&output, output_dir.join(&filename))?;
            println!("✓ Generated {filename}");
        }
    }

    let otsu = StripeDiscConfig::new().with_threshold(ThresholdMode::Otsu);
    io::save_png(&otsu.apply(&img)?, output_dir.join("stripe_disc_otsu.png"))?;
    println!("✓ Generated stripe_disc_otsu.png");

    println!("\n✓ All stripe disc effects applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
