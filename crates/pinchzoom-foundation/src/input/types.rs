use pinchzoom_ui_graphics::Point;

/// Identifies one finger for the lifetime of its touch.
pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the touch stream away; every pointer is gone.
    Cancel,
}

/// A single touch sample, positioned in the zoom container's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic timestamp of the sample.
    pub uptime_millis: u64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_millis: u64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_millis,
        }
    }

    pub fn down(id: PointerId, position: Point, uptime_millis: u64) -> Self {
        Self::new(id, PointerEventKind::Down, position, uptime_millis)
    }

    pub fn moved(id: PointerId, position: Point, uptime_millis: u64) -> Self {
        Self::new(id, PointerEventKind::Move, position, uptime_millis)
    }

    pub fn up(id: PointerId, position: Point, uptime_millis: u64) -> Self {
        Self::new(id, PointerEventKind::Up, position, uptime_millis)
    }

    pub fn cancel(id: PointerId, position: Point, uptime_millis: u64) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, uptime_millis)
    }
}
