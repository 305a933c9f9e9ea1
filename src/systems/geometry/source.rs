use crate::domain::ContentRect;

/// Anything that can report the document-space boxes of tracked content
pub trait GeometrySource {
    fn content_rects(&self) -> Vec<ContentRect>;
}

/// Host-supplied geometry (tests, or pages that measure on the JS side)
#[derive(Clone, Debug, Default)]
pub struct StaticGeometry {
    rects: Vec<ContentRect>,
}

impl StaticGeometry {
    pub fn new(rects: Vec<ContentRect>) -> Self {
        Self { rects }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a flat `[x, y, w, h, x, y, w, h, ...]` array.
    /// A trailing partial group is ignored.
    pub fn from_flat(values: &[f32]) -> Self {
        let rects = values
            .chunks_exact(4)
            .map(|c| ContentRect::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self { rects }
    }
}

impl GeometrySource for StaticGeometry {
    fn content_rects(&self) -> Vec<ContentRect> {
        self.rects.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flat_groups_by_four() {
        let geo = StaticGeometry::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let rects = geo.content_rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[1], ContentRect::new(5.0, 6.0, 7.0, 8.0));
    }
}
