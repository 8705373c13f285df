use crate::raster::Raster;

use super::{Layer, Mark};

/// Paint position of a mark: by layer, then by insertion order.
///
/// Field order matters; the derived `Ord` compares `layer` first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}

/// A single overlay item: sort key + mark.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkItem {
    pub key: SortKey,
    pub mark: Mark,
}

/// Recorded overlay marks for one repaint.
///
/// Marks may be pushed in any order; [`paint`](Self::paint) always applies
/// them back-to-front by layer, so a ring pushed before the highlight still
/// ends up on top of it.
#[derive(Debug, Default)]
pub struct MarkList {
    items: Vec<MarkItem>,
    next_order: u32,
}

impl MarkList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded marks. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[MarkItem] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, layer: Layer, mark: Mark) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(MarkItem { key: SortKey::new(layer, order), mark });
    }

    /// Number of marks recorded on `layer`.
    pub fn count(&self, layer: Layer) -> usize {
        self.items.iter().filter(|i| i.key.layer == layer).count()
    }

    /// Iterates items back-to-front.
    pub fn iter_in_paint_order(&self) -> impl Iterator<Item = &MarkItem> {
        let mut sorted: Vec<&MarkItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| item.key);
        sorted.into_iter()
    }

    /// Rasterizes every mark into `raster` in paint order.
    pub fn paint(&self, raster: &mut Raster) {
        for item in self.iter_in_paint_order() {
            item.mark.paint(raster);
        }
    }
}
