//! Tests for pointer subscriptions and click-outside dismissal

use super::*;

fn root() -> Rect {
    Rect::new(10, 5, 40, 8)
}

#[test]
fn test_subscribe_and_dispatch() {
    let events = PointerEvents::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let _subscription = events.subscribe(move |position| sink.borrow_mut().push(position));
    events.dispatch(Position::new(3, 4));

    assert_eq!(*seen.borrow(), vec![Position::new(3, 4)]);
}

#[test]
fn test_dropping_subscription_releases_listener() {
    let events = PointerEvents::new();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);

    let subscription = events.subscribe(move |_| counter.set(counter.get() + 1));
    assert_eq!(events.listener_count(), 1);

    drop(subscription);
    assert_eq!(events.listener_count(), 0);

    events.dispatch(Position::new(0, 0));
    assert_eq!(hits.get(), 0);
}

#[test]
fn test_subscription_outliving_source_is_harmless() {
    let events = PointerEvents::new();
    let subscription = events.subscribe(|_| {});
    drop(events);
    drop(subscription);
}

#[test]
fn test_only_dropped_listener_is_removed() {
    let events = PointerEvents::new();
    let first = events.subscribe(|_| {});
    let _second = events.subscribe(|_| {});

    drop(first);

    assert_eq!(events.listener_count(), 1);
}

#[test]
fn test_outside_press_hides_list() {
    let events = PointerEvents::new();
    let visible = Rc::new(Cell::new(true));
    let _controller = DismissalController::attach(&events, Rc::new(Cell::new(root())), Rc::clone(&visible));

    events.dispatch(Position::new(0, 0));

    assert!(!visible.get());
}

#[test]
fn test_inside_press_keeps_list() {
    let events = PointerEvents::new();
    let visible = Rc::new(Cell::new(true));
    let _controller = DismissalController::attach(&events, Rc::new(Cell::new(root())), Rc::clone(&visible));

    events.dispatch(Position::new(12, 6));

    assert!(visible.get());
}

#[test]
fn test_root_area_updates_are_seen() {
    let events = PointerEvents::new();
    let visible = Rc::new(Cell::new(true));
    let area = Rc::new(Cell::new(Rect::new(0, 0, 5, 5)));
    let _controller = DismissalController::attach(&events, Rc::clone(&area), Rc::clone(&visible));

    area.set(root());
    events.dispatch(Position::new(12, 6));

    assert!(visible.get());
}

#[test]
fn test_detached_controller_ignores_presses() {
    let events = PointerEvents::new();
    let visible = Rc::new(Cell::new(true));
    let controller = DismissalController::attach(&events, Rc::new(Cell::new(root())), Rc::clone(&visible));

    drop(controller);
    events.dispatch(Position::new(0, 0));

    assert!(visible.get());
    assert_eq!(events.listener_count(), 0);
}
