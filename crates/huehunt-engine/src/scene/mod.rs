//! Overlay mark stream.
//!
//! Responsibilities:
//! - store overlay marks (highlight blocks, rings) independent of rasterization
//! - provide deterministic paint order (layer, then insertion order)
//! - rasterize marks into a [`Raster`](crate::raster::Raster)

mod layer;
mod list;
mod mark;

pub use layer::Layer;
pub use list::{MarkItem, MarkList, SortKey};
pub use mark::Mark;
