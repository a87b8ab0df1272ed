use super::*;
use crate::{engine::config::EngineConfig, foundation::color::Rgb};

fn solid_image(rgb: [u8; 3]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(16, 16, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[test]
fn k_means_is_deterministic_for_fixed_samples() {
    let samples: Vec<Rgb> = (0..150u32)
        .map(|i| {
            Rgb::new(
                (i * 7 % 256) as u8,
                (i * 13 % 256) as u8,
                (i * 29 % 256) as u8,
            )
        })
        .collect();
    assert_eq!(k_means(&samples, 10, 10), k_means(&samples, 10, 10));
}

#[test]
fn k_means_returns_exactly_k_centers() {
    let samples: Vec<Rgb> = (0..150u32)
        .map(|i| Rgb::new((i % 256) as u8, (i * 3 % 256) as u8, (i * 11 % 256) as u8))
        .collect();
    for k in [1, 2, 5, 10, 32] {
        assert_eq!(k_means(&samples, k, 10).len(), k);
    }
}

#[test]
fn empty_clusters_retain_their_previous_center() {
    // All samples identical: every pixel lands in cluster 0, clusters 1 and 2
    // stay empty and must keep their initial (identical) centers.
    let samples = vec![Rgb::new(50, 60, 70); 20];
    let centers = k_means(&samples, 3, 10);
    assert_eq!(centers, vec![Rgb::new(50, 60, 70); 3]);
}

#[test]
fn unsampleable_image_yields_the_fixed_fallback_palette() {
    let mut extractor = PaletteExtractor::new(&EngineConfig::default());
    let empty = image::RgbaImage::new(0, 0);

    let palette = extractor.extract(&empty);
    assert_eq!(palette.len(), 8);
    for (color, hex) in palette.iter().zip(FALLBACK_HEX) {
        assert_eq!(color.hex, hex);
        assert_eq!(color.rgb, Rgb::from_hex(hex).unwrap());
    }
    // Identical on every failing extraction, regardless of configured k.
    assert_eq!(extractor.extract(&empty), fallback_palette());
}

#[test]
fn single_color_image_with_k_one_extracts_that_color() {
    let config = EngineConfig {
        cluster_count: 1,
        ..EngineConfig::default()
    };
    let mut extractor = PaletteExtractor::new(&config);

    let palette = extractor.extract(&solid_image([248, 180, 217]));
    assert_eq!(palette.len(), 1);
    assert_eq!(palette[0].hex, "#f8b4d9");
    assert_eq!(palette[0].rgb, Rgb::new(248, 180, 217));
}

#[test]
fn extraction_produces_cluster_count_colors() {
    let mut extractor = PaletteExtractor::new(&EngineConfig::default());
    let palette = extractor.extract(&solid_image([100, 150, 200]));
    assert_eq!(palette.len(), 10);
    // A solid image collapses every center onto the single sampled color.
    for color in &palette {
        assert_eq!(color.rgb, Rgb::new(100, 150, 200));
    }
}

#[test]
fn palette_color_pairs_rgb_with_derived_hex() {
    let color = PaletteColor::from_rgb(Rgb::new(52, 211, 153));
    assert_eq!(color.hex, "#34d399");
}
