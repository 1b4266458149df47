use crate::StripeDiscResult;
use image::{DynamicImage, GrayImage, ImageFormat, ImageReader};
use std::{io::Cursor, path::Path};

/// Decode a PNG or JPEG file; the format is sniffed from the content
pub fn load_image(path: impl AsRef<Path>) -> StripeDiscResult<DynamicImage> {
    let path = path.as_ref();
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

pub fn encode_png(image: &GrayImage) -> StripeDiscResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

pub fn save_png(image: &GrayImage, path: impl AsRef<Path>) -> StripeDiscResult<()> {
    let path = path.as_ref();
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StripeDiscError;
    use image::Luma;

    #[test]
    fn test_encode_png_signature() {
        let image = GrayImage::from_pixel(4, 3, Luma([255]));
        let bytes = encode_png(&image).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image("no/such/file.png");
        assert!(matches!(result, Err(StripeDiscError::Io(_))));
    }

    #[test]
    fn test_save_and_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.png");
        let image = GrayImage::from_fn(5, 5, |x, y| Luma([if (x + y) % 2 == 0 { 0 } else { 255 }]));

        save_png(&image, &path)?;
        let loaded = load_image(&path)?.to_luma8();

        assert_eq!(loaded, image);
        Ok(())
    }
}
