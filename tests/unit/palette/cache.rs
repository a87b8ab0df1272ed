use super::*;
use crate::{foundation::color::Rgb, palette::extract::PaletteColor};

fn palette_of(rgb: Rgb) -> Palette {
    vec![PaletteColor::from_rgb(rgb)]
}

#[test]
fn unregistered_item_is_unknown() {
    let cache = PaletteCache::new();
    assert!(matches!(cache.lookup(ItemId(1)), PaletteLookup::Unknown));
}

#[test]
fn registered_item_is_pending_with_its_fallback() {
    let mut cache = PaletteCache::new();
    cache.register(ItemId(1), Rgb::new(250, 240, 245));

    match cache.lookup(ItemId(1)) {
        PaletteLookup::Pending { fallback } => assert_eq!(fallback, Rgb::new(250, 240, 245)),
        other => panic!("expected pending, got {other:?}"),
    }
    assert!(!cache.is_ready(ItemId(1)));
}

#[test]
fn store_transitions_pending_to_ready() {
    let mut cache = PaletteCache::new();
    cache.register(ItemId(7), Rgb::WHITE);
    assert!(cache.store(ItemId(7), palette_of(Rgb::new(1, 2, 3))));

    match cache.lookup(ItemId(7)) {
        PaletteLookup::Ready(palette) => assert_eq!(palette[0].rgb, Rgb::new(1, 2, 3)),
        other => panic!("expected ready, got {other:?}"),
    }
    assert!(cache.is_ready(ItemId(7)));
}

#[test]
fn store_is_at_most_once_per_item() {
    let mut cache = PaletteCache::new();
    cache.register(ItemId(2), Rgb::WHITE);
    assert!(cache.store(ItemId(2), palette_of(Rgb::new(9, 9, 9))));
    assert!(!cache.store(ItemId(2), palette_of(Rgb::new(0, 0, 0))));

    match cache.lookup(ItemId(2)) {
        PaletteLookup::Ready(palette) => assert_eq!(palette[0].rgb, Rgb::new(9, 9, 9)),
        other => panic!("expected ready, got {other:?}"),
    }
}

#[test]
fn register_refreshes_fallback_only_while_pending() {
    let mut cache = PaletteCache::new();
    cache.register(ItemId(4), Rgb::new(1, 1, 1));
    cache.register(ItemId(4), Rgb::new(2, 2, 2));

    match cache.lookup(ItemId(4)) {
        PaletteLookup::Pending { fallback } => assert_eq!(fallback, Rgb::new(2, 2, 2)),
        other => panic!("expected pending, got {other:?}"),
    }

    cache.store(ItemId(4), palette_of(Rgb::new(8, 8, 8)));
    cache.register(ItemId(4), Rgb::new(3, 3, 3));
    match cache.lookup(ItemId(4)) {
        PaletteLookup::Ready(palette) => assert_eq!(palette[0].rgb, Rgb::new(8, 8, 8)),
        other => panic!("expected ready, got {other:?}"),
    }
}

#[test]
fn store_before_register_inserts_with_white_fallback() {
    // A late-arriving extraction for an item nobody registered still
    // populates the cache for future hovers.
    let mut cache = PaletteCache::new();
    assert!(cache.store(ItemId(3), palette_of(Rgb::new(4, 5, 6))));
    assert!(cache.is_ready(ItemId(3)));

    // Registering afterwards must not discard the stored palette.
    cache.register(ItemId(3), Rgb::new(10, 10, 10));
    assert!(cache.is_ready(ItemId(3)));
}
