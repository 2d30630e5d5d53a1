use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinchzoom_core::FRAME_INTERVAL_NANOS;
use pinchzoom_engine::{
    GestureEvent, PanUpdate, PinchToZoomEngine, PinchUpdate, Point, Size, ZoomConfig,
};
use pinchzoom_foundation::{PointerEvent, ZoomGestureDetector};

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 1920.0,
};
const UPDATE_SAMPLES: &[usize] = &[60, 600];

fn engine() -> PinchToZoomEngine {
    let mut engine = match PinchToZoomEngine::new(ZoomConfig::default()) {
        Ok(engine) => engine,
        Err(err) => panic!("default config rejected: {err}"),
    };
    engine.set_viewport(VIEWPORT);
    engine
}

fn pinch_events(updates: usize) -> Vec<GestureEvent> {
    let mut events = Vec::with_capacity(updates + 2);
    events.push(GestureEvent::PinchStart);
    for step in 0..updates {
        let progress = step as f32 / updates as f32;
        events.push(GestureEvent::PinchUpdate(PinchUpdate {
            number_of_pointers: 2,
            scale: 1.0 + 5.0 * progress,
            focal: Point::new(400.0 + 80.0 * progress, 900.0),
        }));
    }
    events.push(GestureEvent::PinchEnd);
    events
}

fn pan_events(updates: usize) -> Vec<GestureEvent> {
    let mut events = Vec::with_capacity(updates + 2);
    events.push(GestureEvent::PanStart);
    for step in 0..updates {
        events.push(GestureEvent::PanUpdate(PanUpdate::new(
            step as f32 * 1.5,
            step as f32 * -2.0,
        )));
    }
    events.push(GestureEvent::PanEnd);
    events
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_reducer");
    for &updates in UPDATE_SAMPLES {
        let events = pinch_events(updates);
        group.bench_with_input(BenchmarkId::from_parameter(updates), &events, |b, events| {
            b.iter(|| {
                let mut engine = engine();
                engine.handle_all(events.iter().copied());
                black_box(engine.take_notifications());
            });
        });
    }
    group.finish();
}

fn bench_zoomed_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomed_pan_reducer");
    for &updates in UPDATE_SAMPLES {
        let events = pan_events(updates);
        group.bench_with_input(BenchmarkId::from_parameter(updates), &events, |b, events| {
            let mut zoomed = engine();
            zoomed.handle_all(pinch_events(8));
            b.iter(|| {
                zoomed.handle_all(events.iter().copied());
                black_box(zoomed.take_notifications());
            });
        });
    }
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("double_tap_settle", |b| {
        b.iter(|| {
            let mut engine = engine();
            engine.double_tap(Point::ZERO);
            let mut time = 0;
            while engine.is_animating() {
                time += FRAME_INTERVAL_NANOS;
                engine.advance_frame(time);
            }
            black_box(engine.transform());
        });
    });
}

fn bench_detector(c: &mut Criterion) {
    c.bench_function("detector_two_finger_pinch", |b| {
        b.iter(|| {
            let mut detector = ZoomGestureDetector::new();
            let mut produced = 0;
            produced += detector
                .on_pointer_event(PointerEvent::down(1, Point::new(400.0, 900.0), 0))
                .len();
            produced += detector
                .on_pointer_event(PointerEvent::down(2, Point::new(600.0, 900.0), 4))
                .len();
            for step in 1..=120u64 {
                let spread = step as f32 * 2.0;
                produced += detector
                    .on_pointer_event(PointerEvent::moved(
                        2,
                        Point::new(600.0 + spread, 900.0),
                        4 + step * 8,
                    ))
                    .len();
            }
            black_box(produced);
        });
    });
}

criterion_group!(
    reducer,
    bench_pinch,
    bench_zoomed_pan,
    bench_settle,
    bench_detector
);
criterion_main!(reducer);
