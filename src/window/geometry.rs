//! Pointer-driven move/resize state for a single floating window.
//!
//! The engine is a pure state machine: the host feeds it pointer presses,
//! movements and releases together with the latest container measurement,
//! and reads back the clamped position and size. Drag and resize are
//! mutually exclusive per pointer session (one press arms at most one of
//! them); `pointer_up` clears both unconditionally.

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Measured rectangle of the surface windows are clamped into. Refreshed by
/// the host on every frame; the engine only reads the latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Minimum window dimensions enforced while resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryLimits {
    pub min_width: i32,
    pub min_height: i32,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    // pointer minus window position at press time
    offset: Point,
}

#[derive(Debug, Clone, Copy)]
struct ResizeState {
    start_pointer: Point,
    start_size: Size,
}

/// Move/resize controller for one window instance.
#[derive(Debug, Clone)]
pub struct DragResize {
    position: Point,
    size: Size,
    limits: GeometryLimits,
    drag: Option<DragState>,
    resize: Option<ResizeState>,
}

impl DragResize {
    pub fn new(position: Point, size: Size, limits: GeometryLimits) -> Self {
        Self {
            position,
            size,
            limits,
            drag: None,
            resize: None,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Size used for rendering: the stored size capped per-axis by an
    /// optional configured maximum. The stored size is left untouched.
    pub fn displayed_size(&self, max: Option<Size>) -> Size {
        match max {
            Some(max) => Size {
                width: self.size.width.min(max.width),
                height: self.size.height.min(max.height),
            },
            None => self.size,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn resizing(&self) -> bool {
        self.resize.is_some()
    }

    /// True while a pointer session (drag or resize) is in progress.
    pub fn active(&self) -> bool {
        self.drag.is_some() || self.resize.is_some()
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag = Some(DragState {
            offset: Point {
                x: pointer.x - self.position.x,
                y: pointer.y - self.position.y,
            },
        });
    }

    pub fn begin_resize(&mut self, pointer: Point) {
        self.resize = Some(ResizeState {
            start_pointer: pointer,
            start_size: self.size,
        });
    }

    /// Continuous pointer movement while a session is active. Without a
    /// measured container the raw computed values pass through unclamped.
    pub fn pointer_move(&mut self, pointer: Point, bounds: Option<Bounds>) {
        if let Some(drag) = self.drag {
            let mut x = pointer.x - drag.offset.x;
            let mut y = pointer.y - drag.offset.y;
            if let Some(bounds) = bounds {
                // Floor first, cap second: an oversized window pins to the
                // container's far edge rather than its near edge.
                x = x.max(bounds.left).min(bounds.right - self.size.width);
                y = y.max(bounds.top).min(bounds.bottom - self.size.height);
            }
            self.position = Point { x, y };
        }

        if let Some(resize) = self.resize {
            let requested_width = resize.start_size.width + (pointer.x - resize.start_pointer.x);
            let requested_height = resize.start_size.height + (pointer.y - resize.start_pointer.y);
            let mut width = requested_width.max(self.limits.min_width);
            let mut height = requested_height.max(self.limits.min_height);
            if let Some(bounds) = bounds {
                // Capped against the pre-resize position; drag and resize
                // never run in the same pointer session.
                width = width.min(bounds.right - self.position.x);
                height = height.min(bounds.bottom - self.position.y);
            }
            self.size = Size { width, height };
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
        self.resize = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_window() -> DragResize {
        DragResize::new(
            Point::new(100, 100),
            Size::new(200, 150),
            GeometryLimits::default(),
        )
    }

    #[test]
    fn drag_clamps_to_container_edges() {
        let mut w = reference_window();
        let bounds = Bounds::from_size(0, 0, 800, 600);
        w.begin_drag(Point::new(110, 110));
        // raw target is (-50, 700)
        w.pointer_move(Point::new(-40, 710), Some(bounds));
        assert_eq!(w.position(), Point::new(0, 450));
    }

    #[test]
    fn drag_without_bounds_passes_raw_values_through() {
        let mut w = reference_window();
        w.begin_drag(Point::new(100, 100));
        w.pointer_move(Point::new(-300, -300), None);
        assert_eq!(w.position(), Point::new(-300, -300));
    }

    #[test]
    fn resize_floors_at_minimum_dimensions() {
        let mut w = reference_window();
        w.begin_resize(Point::new(300, 250));
        // requested 100x50
        w.pointer_move(Point::new(200, 150), Some(Bounds::from_size(0, 0, 800, 600)));
        assert_eq!(w.size(), Size::new(250, 150));
    }

    #[test]
    fn resize_caps_against_container_from_current_position() {
        let mut w = DragResize::new(
            Point::new(700, 0),
            Size::new(200, 150),
            GeometryLimits::default(),
        );
        let bounds = Bounds::from_size(0, 0, 800, 600);
        w.begin_resize(Point::new(900, 150));
        // requested width 300; only 100 columns remain right of x=700
        w.pointer_move(Point::new(1000, 150), Some(bounds));
        assert_eq!(w.size().width, 100);
    }

    #[test]
    fn release_clears_both_sessions() {
        let mut w = reference_window();
        w.begin_drag(Point::new(100, 100));
        assert!(w.dragging());
        w.pointer_up();
        assert!(!w.active());

        w.begin_resize(Point::new(300, 250));
        assert!(w.resizing());
        w.pointer_up();
        assert!(!w.active());
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut w = reference_window();
        let before = w.position();
        w.pointer_move(Point::new(500, 500), None);
        assert_eq!(w.position(), before);
    }

    #[test]
    fn displayed_size_respects_configured_maximum() {
        let w = DragResize::new(
            Point::default(),
            Size::new(520, 420),
            GeometryLimits::default(),
        );
        let shown = w.displayed_size(Some(Size::new(400, 500)));
        assert_eq!(shown, Size::new(400, 420));
        assert_eq!(w.size(), Size::new(520, 420));
    }
}
