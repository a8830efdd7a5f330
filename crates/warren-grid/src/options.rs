//! Per-grid configuration.

/// Configuration carried by a grid.
///
/// `weave` and `room_size` change generation behavior; `linewidth` and
/// `inset` are pass-through visual metadata for renderers and never affect
/// the graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOptions {
    /// Allow passages to tunnel under perpendicular passages via
    /// synthesized link cells.
    pub weave: bool,
    /// Regions at or below this size become fully-connected rooms under
    /// fractal partition.
    pub room_size: usize,
    /// Stroke width hint for renderers.
    pub linewidth: Option<f64>,
    /// Cell inset hint for renderers.
    pub inset: Option<f64>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            weave: false,
            room_size: 1,
            linewidth: None,
            inset: None,
        }
    }
}

impl GridOptions {
    /// Default options with weaving enabled.
    pub fn weaving() -> Self {
        Self {
            weave: true,
            ..Self::default()
        }
    }

    /// Default options with the given fractal room size.
    pub fn with_room_size(room_size: usize) -> Self {
        Self {
            room_size,
            ..Self::default()
        }
    }
}
