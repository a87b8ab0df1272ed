use std::io::Cursor;

use super::*;

#[test]
fn decode_image_png_dimensions_and_pixels() {
    let img = image::RgbaImage::from_raw(1, 1, vec![248u8, 180, 217, 255]).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get_pixel(0, 0).0, [248, 180, 217, 255]);
}

#[test]
fn decode_failure_signals_sample_unavailable() {
    let err = decode_image(b"not an image").unwrap_err();
    assert!(matches!(err, AquaglowError::SampleUnavailable(_)));
}
