use crate::core::BoundingRect;
use crate::error::PickerResult;

/// Host-side query for the clock face's bounding rectangle.
///
/// Browser hosts typically forward `getBoundingClientRect()`; native hosts
/// return their widget allocation in window coordinates.
pub trait ClockGeometryProvider {
    fn bounding_rect(&mut self) -> PickerResult<BoundingRect>;
}

impl<F> ClockGeometryProvider for F
where
    F: FnMut() -> PickerResult<BoundingRect>,
{
    fn bounding_rect(&mut self) -> PickerResult<BoundingRect> {
        self()
    }
}

/// Provider answering with a rectangle known up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGeometry(pub BoundingRect);

impl ClockGeometryProvider for FixedGeometry {
    fn bounding_rect(&mut self) -> PickerResult<BoundingRect> {
        Ok(self.0)
    }
}
