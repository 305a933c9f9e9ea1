use crate::core::Vec2;
use crate::domain::ContentRect;

use super::GeometrySource;

/// Latest document-space snapshot plus a reusable viewport-space buffer
#[derive(Clone, Debug, Default)]
pub struct ContentRects {
    document: Vec<ContentRect>,
    // Scratch, rebuilt every frame from `document`
    viewport: Vec<ContentRect>,
}

impl ContentRects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a fresh measurement
    pub fn refresh(&mut self, source: &dyn GeometrySource) {
        self.replace(source.content_rects());
    }

    pub fn replace(&mut self, rects: Vec<ContentRect>) {
        self.document = rects;
    }

    pub fn document(&self) -> &[ContentRect] {
        &self.document
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Convert the snapshot into viewport space for the given scroll offset
    pub fn to_viewport(&mut self, scroll: Vec2) -> &[ContentRect] {
        self.viewport.clear();
        self.viewport
            .extend(self.document.iter().map(|r| r.to_viewport(scroll)));
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::geometry::StaticGeometry;

    #[test]
    fn refresh_replaces_whole_set() {
        let mut rects = ContentRects::new();
        rects.replace(vec![ContentRect::new(0.0, 0.0, 1.0, 1.0); 3]);
        assert_eq!(rects.len(), 3);

        rects.refresh(&StaticGeometry::new(vec![ContentRect::new(5.0, 5.0, 2.0, 2.0)]));
        assert_eq!(rects.document(), &[ContentRect::new(5.0, 5.0, 2.0, 2.0)]);

        rects.refresh(&StaticGeometry::empty());
        assert!(rects.is_empty());
    }

    #[test]
    fn viewport_view_tracks_scroll() {
        let mut rects = ContentRects::new();
        rects.replace(vec![ContentRect::new(0.0, 900.0, 10.0, 10.0)]);

        let at_top = rects.to_viewport(Vec2::zero())[0];
        assert_eq!(at_top.y, 900.0);

        let scrolled = rects.to_viewport(Vec2::new(0.0, 500.0))[0];
        assert_eq!(scrolled.y, 400.0);
        // Document snapshot untouched
        assert_eq!(rects.document()[0].y, 900.0);
    }
}
