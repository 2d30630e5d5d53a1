use super::*;
use crate::gestures::{GestureEvent, GestureKind, PanUpdate};
use crate::input::PointerEvent;
use pinchzoom_ui_graphics::Point;

fn feed(detector: &mut ZoomGestureDetector, events: &[PointerEvent]) -> Vec<GestureEvent> {
    events
        .iter()
        .flat_map(|event| detector.on_pointer_event(*event))
        .collect()
}

fn kinds(events: &[GestureEvent]) -> Vec<GestureKind> {
    events.iter().map(GestureEvent::kind).collect()
}

#[test]
fn spreading_two_fingers_starts_pinch_at_midpoint() {
    let mut detector = ZoomGestureDetector::new();
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(150.0, 150.0), 0),
            PointerEvent::down(2, Point::new(250.0, 150.0), 5),
            PointerEvent::moved(1, Point::new(100.0, 150.0), 20),
            PointerEvent::moved(2, Point::new(300.0, 150.0), 20),
        ],
    );

    assert_eq!(events.first(), Some(&GestureEvent::PinchStart));
    let last_update = events
        .iter()
        .rev()
        .find_map(|event| match event {
            GestureEvent::PinchUpdate(update) => Some(*update),
            _ => None,
        })
        .expect("pinch update emitted");
    assert_eq!(last_update.number_of_pointers, 2);
    assert!((last_update.scale - 2.0).abs() < 1e-5);
    assert_eq!(last_update.focal, Point::new(200.0, 150.0));
    assert!(detector.is_pinching());
    assert!(!events.contains(&GestureEvent::PanStart));
}

#[test]
fn pinch_scale_counts_travel_inside_the_slop() {
    let mut detector = ZoomGestureDetector::new();
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::down(2, Point::new(200.0, 100.0), 0),
            PointerEvent::moved(2, Point::new(205.0, 100.0), 8),
            PointerEvent::moved(2, Point::new(220.0, 100.0), 16),
        ],
    );

    let first_update = events
        .iter()
        .find_map(|event| match event {
            GestureEvent::PinchUpdate(update) => Some(*update),
            _ => None,
        })
        .expect("pinch update emitted");
    assert!((first_update.scale - 1.2).abs() < 1e-5);
}

#[test]
fn lifting_a_finger_ends_pinch() {
    let mut detector = ZoomGestureDetector::new();
    feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::down(2, Point::new(200.0, 100.0), 0),
            PointerEvent::moved(2, Point::new(260.0, 100.0), 16),
        ],
    );
    assert!(detector.is_pinching());

    let events = feed(&mut detector, &[PointerEvent::up(2, Point::new(260.0, 100.0), 32)]);
    assert_eq!(events, vec![GestureEvent::PinchEnd]);
    assert!(!detector.is_pinching());
}

#[test]
fn unzoomed_pan_waits_for_vertical_offset() {
    let mut detector = ZoomGestureDetector::new();
    let horizontal = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::moved(1, Point::new(180.0, 105.0), 16),
        ],
    );
    assert!(horizontal.is_empty(), "horizontal swipe belongs to the pager");

    let vertical = feed(&mut detector, &[PointerEvent::moved(1, Point::new(180.0, 130.0), 32)]);
    assert_eq!(
        vertical,
        vec![
            GestureEvent::PanStart,
            GestureEvent::PanUpdate(PanUpdate {
                translation: Point::new(80.0, 30.0),
                number_of_pointers: 1,
            }),
        ]
    );

    let end = feed(&mut detector, &[PointerEvent::up(1, Point::new(180.0, 130.0), 48)]);
    assert_eq!(end, vec![GestureEvent::PanEnd]);
}

#[test]
fn zoomed_pan_activates_past_touch_slop() {
    let mut detector = ZoomGestureDetector::new();
    detector.set_zoomed(true);
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::moved(1, Point::new(112.0, 100.0), 16),
        ],
    );
    assert_eq!(kinds(&events), vec![GestureKind::Pan, GestureKind::Pan]);
    assert!(detector.is_panning());
}

#[test]
fn adding_a_finger_does_not_jump_pan_translation() {
    let mut detector = ZoomGestureDetector::new();
    detector.set_zoomed(true);
    feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::moved(1, Point::new(130.0, 100.0), 16),
            PointerEvent::down(2, Point::new(300.0, 300.0), 20),
        ],
    );
    let events = feed(&mut detector, &[PointerEvent::moved(2, Point::new(310.0, 300.0), 32)]);
    // Centroid moved by 5px since the second finger landed.
    assert_eq!(
        events.last(),
        Some(&GestureEvent::PanUpdate(PanUpdate {
            translation: Point::new(35.0, 0.0),
            number_of_pointers: 2,
        }))
    );
}

#[test]
fn two_quick_taps_emit_double_tap() {
    let mut detector = ZoomGestureDetector::new();
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(120.0, 140.0), 0),
            PointerEvent::up(1, Point::new(120.0, 140.0), 80),
            PointerEvent::down(2, Point::new(124.0, 138.0), 200),
            PointerEvent::up(2, Point::new(124.0, 138.0), 260),
        ],
    );
    assert_eq!(events, vec![GestureEvent::DoubleTap(Point::new(124.0, 138.0))]);
}

#[test]
fn slow_second_tap_starts_over() {
    let mut detector = ZoomGestureDetector::new();
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(120.0, 140.0), 0),
            PointerEvent::up(1, Point::new(120.0, 140.0), 80),
            PointerEvent::down(1, Point::new(120.0, 140.0), 900),
            PointerEvent::up(1, Point::new(120.0, 140.0), 950),
        ],
    );
    assert!(events.is_empty());

    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(120.0, 140.0), 1100),
            PointerEvent::up(1, Point::new(120.0, 140.0), 1150),
        ],
    );
    assert_eq!(events, vec![GestureEvent::DoubleTap(Point::new(120.0, 140.0))]);
}

#[test]
fn second_finger_cancels_tap_sequence() {
    let mut detector = ZoomGestureDetector::new();
    let events = feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(120.0, 140.0), 0),
            PointerEvent::up(1, Point::new(120.0, 140.0), 80),
            PointerEvent::down(1, Point::new(120.0, 140.0), 150),
            PointerEvent::down(2, Point::new(180.0, 140.0), 160),
            PointerEvent::up(2, Point::new(180.0, 140.0), 190),
            PointerEvent::up(1, Point::new(120.0, 140.0), 200),
        ],
    );
    assert!(!events
        .iter()
        .any(|event| event.kind() == GestureKind::DoubleTap));
}

#[test]
fn disabling_ends_active_gestures_and_ignores_input() {
    let mut detector = ZoomGestureDetector::new();
    detector.set_zoomed(true);
    feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::moved(1, Point::new(140.0, 100.0), 16),
        ],
    );
    assert!(detector.is_panning());

    let ended = detector.set_enabled(false);
    assert_eq!(ended.as_slice(), &[GestureEvent::PanEnd]);
    assert_eq!(detector.active_pointer_count(), 0);

    let ignored = feed(&mut detector, &[PointerEvent::moved(1, Point::new(200.0, 100.0), 32)]);
    assert!(ignored.is_empty());
}

#[test]
fn cancel_event_ends_everything() {
    let mut detector = ZoomGestureDetector::new();
    feed(
        &mut detector,
        &[
            PointerEvent::down(1, Point::new(100.0, 100.0), 0),
            PointerEvent::down(2, Point::new(200.0, 100.0), 0),
            PointerEvent::moved(2, Point::new(300.0, 100.0), 16),
        ],
    );
    let events = feed(
        &mut detector,
        &[PointerEvent::cancel(1, Point::new(100.0, 100.0), 32)],
    );
    assert!(events.contains(&GestureEvent::PinchEnd));
    assert_eq!(detector.active_pointer_count(), 0);
}

#[test]
fn queued_events_are_processed_in_order() {
    let mut detector = ZoomGestureDetector::new();
    detector.push(PointerEvent::down(1, Point::new(50.0, 50.0), 0));
    detector.push(PointerEvent::up(1, Point::new(50.0, 50.0), 40));
    detector.push(PointerEvent::down(1, Point::new(52.0, 50.0), 120));
    detector.push(PointerEvent::up(1, Point::new(52.0, 50.0), 160));
    assert_eq!(detector.pending_event_count(), 4);

    let events = detector.process_pending();
    assert_eq!(detector.pending_event_count(), 0);
    assert_eq!(events.as_slice(), &[GestureEvent::DoubleTap(Point::new(52.0, 50.0))]);
}
