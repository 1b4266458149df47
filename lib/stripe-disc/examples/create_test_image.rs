use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("data")?;

    // 800x600 gradient with a dark ring around the center
    let (width, height) = (800u32, 600u32);
    let mut img = RgbImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - width as f32 / 2.0;
        let dy = y as f32 - height as f32 / 2.0;
        let dist = (dx * dx + dy * dy).sqrt();

        if (150.0..200.0).contains(&dist) {
            *pixel = Rgb([30, 20, 60]);
        } else {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            *pixel = Rgb([r, g, b]);
        }
    }

    img.save("data/test.png")?;
    println!("Created data/test.png");

    Ok(())
}
