use deskfolio::window::{Bounds, DragResize, GeometryLimits, Point, Size};

fn window_at(x: i32, y: i32) -> DragResize {
    DragResize::new(Point::new(x, y), Size::new(300, 200), GeometryLimits::default())
}

#[test]
fn drag_then_release_then_resize_in_sequence() {
    let bounds = Bounds::from_size(0, 0, 1000, 700);
    let mut w = window_at(100, 100);

    w.begin_drag(Point::new(150, 110));
    w.pointer_move(Point::new(450, 310), Some(bounds));
    w.pointer_up();
    assert_eq!(w.position(), Point::new(400, 300));
    assert!(!w.active());

    w.begin_resize(Point::new(700, 500));
    w.pointer_move(Point::new(780, 560), Some(bounds));
    w.pointer_up();
    assert_eq!(w.size(), Size::new(380, 260));
    // position untouched by the resize
    assert_eq!(w.position(), Point::new(400, 300));
}

#[test]
fn one_press_arms_exactly_one_session() {
    let mut w = window_at(100, 100);
    w.begin_drag(Point::new(120, 105));
    assert!(w.dragging());
    assert!(!w.resizing());
    w.pointer_up();

    w.begin_resize(Point::new(400, 300));
    assert!(w.resizing());
    assert!(!w.dragging());
}

#[test]
fn dragging_an_oversized_window_pins_to_the_far_edge() {
    // window wider than the container
    let bounds = Bounds::from_size(0, 0, 200, 600);
    let mut w = window_at(0, 0);
    w.begin_drag(Point::new(10, 10));
    w.pointer_move(Point::new(500, 10), Some(bounds));
    // floor-then-cap: left edge ends up past the container's right edge
    // minus the window width, which is negative here, so x pins to -100
    assert_eq!(w.position().x, -100);
}

#[test]
fn resize_respects_minimums_and_container_in_one_gesture() {
    let bounds = Bounds::from_size(0, 0, 800, 600);
    let mut w = window_at(100, 100);
    w.begin_resize(Point::new(400, 300));

    // shrink far below the minimums
    w.pointer_move(Point::new(0, 0), Some(bounds));
    assert_eq!(w.size(), Size::new(250, 150));

    // then grow past the container in the same session
    w.pointer_move(Point::new(2000, 2000), Some(bounds));
    assert_eq!(w.size(), Size::new(700, 500));
}

#[test]
fn container_shrinking_mid_drag_reclamps_on_the_next_move() {
    let mut w = window_at(500, 300);
    w.begin_drag(Point::new(510, 310));
    w.pointer_move(Point::new(710, 410), Some(Bounds::from_size(0, 0, 1200, 800)));
    assert_eq!(w.position(), Point::new(700, 400));

    // the host re-measures and hands in a smaller container
    w.pointer_move(Point::new(710, 410), Some(Bounds::from_size(0, 0, 800, 500)));
    assert_eq!(w.position(), Point::new(500, 300));
}
