use super::*;
use pinchzoom_ui_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;

fn status(scale: f32) -> ZoomStatus {
    ZoomStatus {
        scale,
        translation: Point::ZERO,
    }
}

#[test]
fn dispatch_routes_each_notification() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut callbacks = ZoomCallbacks::new()
        .on_layout({
            let log = log.clone();
            move |size| log.borrow_mut().push(format!("layout {}x{}", size.width, size.height))
        })
        .on_scale_change({
            let log = log.clone();
            move || log.borrow_mut().push("change".to_string())
        })
        .on_scale_reset({
            let log = log.clone();
            move || log.borrow_mut().push("reset".to_string())
        })
        .on_status_change({
            let log = log.clone();
            move |status| log.borrow_mut().push(format!("status {}", status.scale))
        })
        .on_dismiss({
            let log = log.clone();
            move || log.borrow_mut().push("dismiss".to_string())
        })
        .on_haptic_feedback({
            let log = log.clone();
            move |style| log.borrow_mut().push(format!("haptic {style:?}"))
        });

    callbacks.dispatch_all([
        ZoomNotification::Layout(Size::new(300.0, 200.0)),
        ZoomNotification::ScaleChange,
        ZoomNotification::StatusChange(status(2.0)),
        ZoomNotification::HapticFeedback(ImpactStyle::Light),
        ZoomNotification::ScaleReset,
        ZoomNotification::Dismiss,
    ]);

    assert_eq!(
        *log.borrow(),
        vec![
            "layout 300x200",
            "change",
            "status 2",
            "haptic Light",
            "reset",
            "dismiss",
        ]
    );
}

#[test]
fn missing_handlers_are_no_ops() {
    let mut callbacks = ZoomCallbacks::new();
    callbacks.dispatch(ZoomNotification::Dismiss);
    callbacks.dispatch(ZoomNotification::StatusChange(status(1.0)));
    callbacks.dispatch(ZoomNotification::Layout(Size::ZERO));
}

#[test]
fn status_reaches_handler_then_listeners_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut callbacks = ZoomCallbacks::new().on_status_change({
        let seen = seen.clone();
        move |_| seen.borrow_mut().push("handler")
    });
    callbacks.register_status_listener({
        let seen = seen.clone();
        move |_| seen.borrow_mut().push("first")
    });
    callbacks.register_status_listener({
        let seen = seen.clone();
        move |_| seen.borrow_mut().push("second")
    });

    callbacks.dispatch(ZoomNotification::StatusChange(status(1.5)));
    assert_eq!(*seen.borrow(), vec!["handler", "first", "second"]);
}

#[test]
fn removed_listener_stops_receiving() {
    let calls = Rc::new(RefCell::new(0));
    let mut callbacks = ZoomCallbacks::new();
    let id = callbacks.register_status_listener({
        let calls = calls.clone();
        move |_| *calls.borrow_mut() += 1
    });

    callbacks.dispatch(ZoomNotification::StatusChange(status(2.0)));
    assert!(callbacks.remove_status_listener(id));
    assert!(!callbacks.remove_status_listener(id));
    callbacks.dispatch(ZoomNotification::StatusChange(status(3.0)));

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(callbacks.status_listener_count(), 0);
}

#[test]
fn listener_ids_are_unique() {
    let mut callbacks = ZoomCallbacks::new();
    let a = callbacks.register_status_listener(|_| {});
    let b = callbacks.register_status_listener(|_| {});
    assert_ne!(a, b);
}
