use std::collections::HashMap;

use crate::{
    foundation::color::Rgb,
    palette::extract::Palette,
};

/// Stable identity of a gallery item.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u64);

/// Extraction progress for one item. "Not yet extracted" is a first-class
/// state, not a missing-entry null check. Reads surface it through
/// [`PaletteLookup`].
#[derive(Clone, Debug)]
pub(crate) enum PaletteState {
    /// Extraction has not completed; hover must fall back to a static color.
    Pending,
    /// Extraction completed; palette is read synchronously on hover.
    Ready(Palette),
}

/// Result of a synchronous cache read on hover.
#[derive(Clone, Debug)]
pub enum PaletteLookup<'a> {
    /// Palette available; seed the bubble field from it.
    Ready(&'a Palette),
    /// Extraction in flight; paint the item's static fallback color instead.
    Pending {
        /// Per-item configured static color.
        fallback: Rgb,
    },
    /// Item was never registered.
    Unknown,
}

#[derive(Debug)]
struct CacheEntry {
    state: PaletteState,
    fallback: Rgb,
}

/// Maps each gallery item to its extracted palette.
///
/// Populated at most once per item when the item's image finishes loading,
/// decoupled from hover: a hover strictly before, during, or after extraction
/// reads a consistent state, and a late-arriving palette only affects future
/// hovers.
#[derive(Debug, Default)]
pub struct PaletteCache {
    entries: HashMap<ItemId, CacheEntry>,
}

impl PaletteCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item with its static fallback color, marking extraction
    /// pending. Registering again while pending refreshes the fallback;
    /// re-registering an item with a stored palette is a no-op.
    pub fn register(&mut self, item: ItemId, fallback: Rgb) {
        let entry = self.entries.entry(item).or_insert(CacheEntry {
            state: PaletteState::Pending,
            fallback,
        });
        if matches!(entry.state, PaletteState::Pending) {
            entry.fallback = fallback;
        }
    }

    /// Store an extracted palette for `item`.
    ///
    /// Returns `false` (ignoring the palette) when the item already holds
    /// one: population happens exactly once. Unregistered items are inserted
    /// with a white fallback.
    pub fn store(&mut self, item: ItemId, palette: Palette) -> bool {
        let entry = self.entries.entry(item).or_insert(CacheEntry {
            state: PaletteState::Pending,
            fallback: Rgb::WHITE,
        });
        match entry.state {
            PaletteState::Ready(_) => {
                tracing::debug!(item = item.0, "palette already stored, ignoring");
                false
            }
            PaletteState::Pending => {
                entry.state = PaletteState::Ready(palette);
                true
            }
        }
    }

    /// Synchronous read on hover.
    pub fn lookup(&self, item: ItemId) -> PaletteLookup<'_> {
        match self.entries.get(&item) {
            Some(entry) => match &entry.state {
                PaletteState::Ready(palette) => PaletteLookup::Ready(palette),
                PaletteState::Pending => PaletteLookup::Pending {
                    fallback: entry.fallback,
                },
            },
            None => PaletteLookup::Unknown,
        }
    }

    /// True when `item` holds an extracted palette.
    pub fn is_ready(&self, item: ItemId) -> bool {
        matches!(
            self.entries.get(&item),
            Some(CacheEntry {
                state: PaletteState::Ready(_),
                ..
            })
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/cache.rs"]
mod tests;
