use super::*;
use crate::foundation::{color::Rgb, error::AquaglowError, math::Rng64};

fn solid_image(w: u32, h: u32, rgb: [u8; 3]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(w, h, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[test]
fn samples_requested_count_from_image_colors() {
    let img = solid_image(8, 4, [10, 20, 30]);
    let mut raster = ScratchRaster::new();
    let mut rng = Rng64::new(11);

    let samples = raster.sample_pixels(&img, 150, &mut rng).unwrap();
    assert_eq!(samples.len(), 150);
    for s in samples {
        assert_eq!(s, Rgb::new(10, 20, 30));
    }
}

#[test]
fn samples_cover_multiple_pixel_values() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 0, image::Rgba([255, 255, 255, 255]));
    let mut raster = ScratchRaster::new();
    let mut rng = Rng64::new(3);

    let samples = raster.sample_pixels(&img, 200, &mut rng).unwrap();
    assert!(samples.contains(&Rgb::new(0, 0, 0)));
    assert!(samples.contains(&Rgb::WHITE));
}

#[test]
fn zero_dimension_signals_sample_unavailable() {
    let img = image::RgbaImage::new(0, 0);
    let mut raster = ScratchRaster::new();
    let mut rng = Rng64::new(1);

    let err = raster.sample_pixels(&img, 150, &mut rng).unwrap_err();
    assert!(matches!(err, AquaglowError::SampleUnavailable(_)));
}

#[test]
fn scratch_is_resized_per_call() {
    let mut raster = ScratchRaster::new();
    let mut rng = Rng64::new(2);

    raster
        .sample_pixels(&solid_image(5, 7, [1, 2, 3]), 10, &mut rng)
        .unwrap();
    assert_eq!(raster.dimensions(), (5, 7));

    raster
        .sample_pixels(&solid_image(3, 2, [4, 5, 6]), 10, &mut rng)
        .unwrap();
    assert_eq!(raster.dimensions(), (3, 2));
}
