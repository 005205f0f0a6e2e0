use crate::geom::Rect;

/// Identifier of a connected display (`CGDirectDisplayID` on macOS).
pub type DisplayId = u32;

/// One connected screen.
///
/// The set of displays can change between calls (hot-plug), so values are
/// never cached across operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    /// Platform display identifier.
    pub id: DisplayId,
    /// Bounds in the same global coordinate space as window frames.
    pub frame: Rect,
    /// Human-readable name, e.g. "Built-in Retina Display".
    pub name: String,
}

impl Display {
    /// Construct a display.
    pub fn new(id: DisplayId, frame: Rect, name: impl Into<String>) -> Self {
        Self {
            id,
            frame,
            name: name.into(),
        }
    }
}
