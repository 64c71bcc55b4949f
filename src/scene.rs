//! Scene: The rects of one frame, painted together and hit-tested together.
//!
//! The scene owns the rendered rects and turns raw pointer events into the
//! per-rect callbacks. Terminals only report positions, so enter and leave
//! are synthesized by remembering which rect was last under the pointer.
//!
//! Later rects are drawn on top of earlier ones, and hit-testing prefers the
//! topmost rect.

use crate::buffer::Buffer;
use crate::event::{PointerEvent, PointerKind};
use crate::style::Theme;
use crate::widget::{LabeledRect, RectProps, Widget};

/// An ordered set of rendered rects plus hover state.
pub struct Scene<D> {
    theme: Theme,
    rects: Vec<LabeledRect<D>>,
    hovered: Option<usize>,
}

impl<D> Scene<D> {
    /// Create an empty scene rendering with `theme`.
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            rects: Vec::new(),
            hovered: None,
        }
    }

    /// The theme rects are rendered with.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render `props` and add the rect on top. Returns its index.
    pub fn push(&mut self, props: RectProps<D>) -> usize {
        self.rects.push(LabeledRect::render(props, &self.theme));
        self.rects.len() - 1
    }

    /// Number of rects.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if the scene has no rects.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Get a rect by index.
    pub fn get(&self, index: usize) -> Option<&LabeledRect<D>> {
        self.rects.get(index)
    }

    /// Iterate over rects, bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &LabeledRect<D>> {
        self.rects.iter()
    }

    /// Drop every rect and forget the hover state.
    ///
    /// No leave event is sent; the rects receiving it no longer exist.
    pub fn clear(&mut self) {
        log::debug!("clearing scene of {} rects", self.rects.len());
        self.rects.clear();
        self.hovered = None;
    }

    /// Paint every rect, bottom first.
    pub fn paint(&self, buffer: &mut Buffer) {
        for rect in &self.rects {
            rect.paint(buffer);
        }
    }

    /// Index of the topmost rect covering (x, y).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.rects
            .iter()
            .rposition(|rect| rect.area().is_some_and(|area| area.contains(x, y)))
    }

    /// Index of the rect currently under the pointer.
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Hover text of the rect currently under the pointer.
    pub fn hovered_tooltip(&self) -> Option<&str> {
        self.hovered
            .and_then(|i| self.rects.get(i))
            .and_then(LabeledRect::title)
    }

    /// Route a pointer event to the rects.
    ///
    /// Button presses click the rect under the pointer. Motion sends leave
    /// to the previously hovered rect and enter to the new one when they
    /// differ, then move to the rect under the pointer. Other events are
    /// ignored.
    ///
    /// Returns `true` if a rect received the event.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        let target = self.hit_test(event.x, event.y);

        match event.kind {
            PointerKind::Down(_) => {
                let Some(index) = target else {
                    return false;
                };
                log::trace!("click on rect {index}");
                self.rects[index].click(event);
                true
            }
            PointerKind::Moved | PointerKind::Drag(_) => {
                if target != self.hovered {
                    if let Some(previous) = self.hovered {
                        log::trace!("pointer left rect {previous}");
                        self.rects[previous].mouse_leave(event);
                    }
                    if let Some(next) = target {
                        log::trace!("pointer entered rect {next}");
                        self.rects[next].mouse_enter(event);
                    }
                    self.hovered = target;
                }
                let Some(index) = target else {
                    return false;
                };
                self.rects[index].mouse_move(event);
                true
            }
            PointerKind::Up(_) | PointerKind::Scroll(_) => false,
        }
    }
}

impl<D> Default for Scene<D> {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl<D> std::fmt::Debug for Scene<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("rects", &self.rects.len())
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MouseButton;
    use crate::style::Rgb;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn traced(log: &Log, name: &'static str, x: i32, y: i32, width: u16) -> RectProps<&'static str> {
        let (enter, leave, mv, click) = (
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
            Rc::clone(log),
        );
        RectProps::new(name, name)
            .at(x, y)
            .size(width, 2)
            .container_width(40)
            .on_mouse_enter(move |_, d| enter.borrow_mut().push(format!("enter {d}")))
            .on_mouse_leave(move |_, d| leave.borrow_mut().push(format!("leave {d}")))
            .on_mouse_move(move |_, d| mv.borrow_mut().push(format!("move {d}")))
            .on_click(move |_| click.borrow_mut().push(format!("click {name}")))
    }

    fn moved(x: u16, y: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Moved, x, y)
    }

    fn scene(log: &Log) -> Scene<&'static str> {
        let mut scene = Scene::default();
        // root spans row 0, its two children share row 2
        scene.push(traced(log, "root", 0, 0, 21));
        scene.push(traced(log, "left", 0, 2, 11));
        scene.push(traced(log, "right", 10, 2, 11));
        scene
    }

    #[test]
    fn test_hit_test_uses_adjusted_area() {
        let log = Log::default();
        let scene = scene(&log);

        assert_eq!(scene.hit_test(0, 0), Some(0));
        assert_eq!(scene.hit_test(19, 0), Some(0));
        // the border gap: width 21 leaves columns 0..20
        assert_eq!(scene.hit_test(20, 0), None);
        // height 2 leaves a single row
        assert_eq!(scene.hit_test(0, 1), None);
        assert_eq!(scene.hit_test(9, 2), Some(1));
        assert_eq!(scene.hit_test(10, 2), Some(2));
    }

    #[test]
    fn test_enter_move_leave_sequence() {
        let log = Log::default();
        let mut scene = scene(&log);

        assert!(scene.dispatch(&moved(3, 0)));
        assert!(scene.dispatch(&moved(4, 0)));
        assert!(scene.dispatch(&moved(12, 2)));
        assert!(!scene.dispatch(&moved(30, 5)));

        assert_eq!(
            *log.borrow(),
            vec![
                "enter root",
                "move root",
                "move root",
                "leave root",
                "enter right",
                "move right",
                "leave right",
            ]
        );
        assert_eq!(scene.hovered(), None);
    }

    #[test]
    fn test_drag_synthesizes_enter_and_leave() {
        let log = Log::default();
        let mut scene = scene(&log);
        let drag = |x, y| PointerEvent::new(PointerKind::Drag(MouseButton::Left), x, y);

        assert!(scene.dispatch(&drag(2, 2)));
        assert_eq!(scene.hovered(), Some(1));
        assert!(scene.dispatch(&drag(14, 2)));
        assert_eq!(scene.hovered(), Some(2));

        assert_eq!(
            *log.borrow(),
            vec!["enter left", "move left", "leave left", "enter right", "move right"]
        );
    }

    #[test]
    fn test_click_targets_topmost() {
        let log = Log::default();
        let mut scene = scene(&log);

        let down = PointerEvent::new(PointerKind::Down(MouseButton::Left), 10, 2);
        assert!(scene.dispatch(&down));
        let miss = PointerEvent::new(PointerKind::Down(MouseButton::Left), 39, 9);
        assert!(!scene.dispatch(&miss));
        let up = PointerEvent::new(PointerKind::Up(MouseButton::Left), 10, 2);
        assert!(!scene.dispatch(&up));

        assert_eq!(*log.borrow(), vec!["click right"]);
    }

    #[test]
    fn test_hovered_tooltip_follows_pointer() {
        let mut scene = Scene::default();
        scene.push(RectProps::new("a", ()).size(10, 2).tooltip("a: 10 samples"));
        scene.push(
            RectProps::new("b", ())
                .at(0, 1)
                .size(10, 2)
                .disable_default_tooltips(true),
        );

        assert_eq!(scene.hovered_tooltip(), None);
        scene.dispatch(&moved(2, 0));
        assert_eq!(scene.hovered_tooltip(), Some("a: 10 samples"));
        scene.dispatch(&moved(2, 1));
        assert_eq!(scene.hovered(), Some(1));
        assert_eq!(scene.hovered_tooltip(), None);
    }

    #[test]
    fn test_clear_resets_hover() {
        let log = Log::default();
        let mut scene = scene(&log);
        scene.dispatch(&moved(1, 0));
        scene.clear();

        assert!(scene.is_empty());
        assert_eq!(scene.hovered(), None);
        assert_eq!(*log.borrow(), vec!["enter root", "move root"]);
    }

    #[test]
    fn test_paint_orders_bottom_first() {
        let mut scene: Scene<()> = Scene::new(Theme::default().with_min_width_to_display_text(100));
        let (under, over) = (Rgb::new(10, 10, 10), Rgb::new(200, 200, 200));
        scene.push(RectProps::new("under", ()).size(6, 2).colors(under, Rgb::WHITE));
        scene.push(RectProps::new("over", ()).at(2, 0).size(6, 2).colors(over, Rgb::WHITE));

        let mut buffer = Buffer::new(8, 1, Rgb::BLACK).unwrap();
        scene.paint(&mut buffer);

        assert_eq!(buffer.get(1, 0).unwrap().bg(), under);
        assert_eq!(buffer.get(2, 0).unwrap().bg(), over);
        assert_eq!(buffer.get(6, 0).unwrap().bg(), over);
        assert_eq!(buffer.get(7, 0).unwrap().bg(), Rgb::BLACK);
    }
}
