use pinchzoom_ui_graphics::Point;
use smallvec::SmallVec;

use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Pointers currently in contact, in the order they went down.
#[derive(Clone, Debug, Default)]
pub struct ActivePointers {
    pointers: SmallVec<[(PointerId, Point); 4]>,
}

impl ActivePointers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => match self.position_mut(event.id) {
                Some(position) => *position = event.position,
                None => self.pointers.push((event.id, event.position)),
            },
            PointerEventKind::Move => {
                if let Some(position) = self.position_mut(event.id) {
                    *position = event.position;
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.pointers.retain(|(id, _)| *id != event.id);
            }
        }
    }

    fn position_mut(&mut self, id: PointerId) -> Option<&mut Point> {
        self.pointers
            .iter_mut()
            .find(|(pointer, _)| *pointer == id)
            .map(|(_, position)| position)
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    pub fn centroid(&self) -> Option<Point> {
        if self.pointers.is_empty() {
            return None;
        }
        let count = self.pointers.len() as f32;
        let sum = self
            .pointers
            .iter()
            .fold(Point::ZERO, |acc, (_, position)| acc + *position);
        Some(Point::new(sum.x / count, sum.y / count))
    }

    /// Distance between the first two pointers.
    pub fn span(&self) -> Option<f32> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some(a.distance_to(*b)),
            _ => None,
        }
    }

    /// Midpoint between the first two pointers.
    pub fn focal(&self) -> Option<Point> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some(a.midpoint(*b)),
            _ => None,
        }
    }
}
