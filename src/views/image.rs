//! Upload of `RasterImage`s to the renderer.

use std::sync::Arc;

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::{self, Blob};
use floem_renderer::Renderer;

use crate::raster::RasterImage;

/// A raster converted to a peniko image, with the hash the renderer uses
/// to cache its texture.
pub(crate) struct CachedImage {
    img: peniko::Image,
    hash: Vec<u8>,
}

impl CachedImage {
    /// `None` for empty rasters.
    pub(crate) fn from_raster(raster: &RasterImage) -> Option<Self> {
        if raster.is_empty() {
            return None;
        }
        let blob = Blob::new(Arc::new(raster.pixels().to_vec()));
        let img = peniko::Image::new(
            blob.clone(),
            peniko::Format::Rgba8,
            raster.width(),
            raster.height(),
        );
        Some(Self {
            img,
            hash: blob.id().to_le_bytes().to_vec(),
        })
    }

    pub(crate) fn paint(&self, cx: &mut PaintCx, rect: Rect) {
        cx.draw_img(
            floem_renderer::Img {
                img: self.img.clone(),
                hash: &self.hash,
            },
            rect,
        );
    }
}
