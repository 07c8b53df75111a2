use serde::{Deserialize, Serialize};

/// Bounding rectangle of the clock face in host (client) coordinates.
///
/// Field names match a DOM `getBoundingClientRect()` result so the JSON a
/// browser host produces deserializes directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoundingRect {
    /// Rectangle at `(left, top)` with the given size; derived edges filled in.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left,
            y: top,
            width,
            height,
            top,
            right: left + width,
            bottom: top + height,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|value| value.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Converts a client-space point into coordinates relative to the top-left corner.
    #[must_use]
    pub fn to_local(self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeMode {
    #[default]
    Am,
    Pm,
}

impl TimeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Am => Self::Pm,
            Self::Pm => Self::Am,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}
