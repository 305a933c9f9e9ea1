/// Which side of a content rectangle a particle came through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
}

impl Face {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Face::Top | Face::Bottom)
    }
}

/// The one content correction applied this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentHit {
    /// Index into the viewport-space rect slice
    pub rect_index: usize,
    pub face: Face,
}

/// Viewport edge events for one particle update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryEvents {
    pub wall: bool,
    pub floor: bool,
    /// Left through the top (or went non-finite) and was moved back in
    pub recycled: bool,
}

/// Result of a full per-frame update for a single particle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub content: Option<ContentHit>,
    pub bounds: BoundaryEvents,
}
