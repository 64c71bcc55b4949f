//! End-to-end checks of rect rendering, painting and event routing.

use flamecell::{
    Buffer, Filter, FrameWriter, LabeledRect, MouseButton, PointerEvent, PointerKind, RectProps,
    Rgb, Scene, Theme, TooltipBar, Widget,
};
use std::cell::RefCell;
use std::rc::Rc;

fn theme() -> Theme {
    Theme::default().with_min_width_to_display_text(20)
}

fn rect(x: i32, width: u16, container_width: u16) -> LabeledRect<()> {
    LabeledRect::render(
        RectProps::new("Y", ())
            .at(x, 3)
            .size(width, 20)
            .container_width(container_width),
        &theme(),
    )
}

#[test]
fn test_scenario_negative_x() {
    let r = rect(-10, 50, 100);
    assert_eq!((r.x(), r.y(), r.width(), r.height()), (0, 3, 39, 19));
}

#[test]
fn test_scenario_container_cap() {
    let r = rect(5, 200, 100);
    assert_eq!((r.x(), r.width(), r.height()), (5, 99, 19));
}

#[test]
fn test_scenario_narrow_rect_hides_label() {
    let r = rect(0, 10, 100);
    assert_eq!(r.width(), 9);
    assert_eq!(r.text(), "");
}

#[test]
fn test_scenario_disabled_tooltips() {
    let r = LabeledRect::render(
        RectProps::new("Y", ()).tooltip("X").disable_default_tooltips(true),
        &theme(),
    );
    assert_eq!(r.title(), None);
}

#[test]
fn test_scenario_tooltip_falls_back_to_label() {
    let r = LabeledRect::render(RectProps::new("Y", ()), &theme());
    assert_eq!(r.title(), Some("Y"));
}

#[test]
fn test_geometry_properties_over_a_grid() {
    for x in [-40, -5, -1, 0, 1, 7, 60] {
        for width in [0u16, 1, 9, 21, 50, 120] {
            for container_width in [0u16, 1, 20, 100] {
                let r = rect(x, width, container_width);
                let shifted = if x < 0 { i32::from(width) + x } else { i32::from(width) };

                assert_eq!(r.x(), x.max(0));
                assert_eq!(r.height(), 19);
                assert_eq!(r.width(), shifted.min(i32::from(container_width)) - 1);
                assert!(r.width() <= i32::from(container_width) - 1);
                assert_eq!(r.text().is_empty(), r.width() < 20);
            }
        }
    }
}

#[test]
fn test_dimmed_flame_graph_paints_filtered_colors() {
    let bg = Rgb::parse("#e6550d").unwrap();
    let mut scene: Scene<u8> = Scene::new(Theme::default());
    scene.push(
        RectProps::new("parent", 1)
            .size(30, 2)
            .container_width(30)
            .colors(bg, Rgb::BLACK)
            .dimmed(true),
    );
    scene.push(
        RectProps::new("child", 2)
            .at(0, 1)
            .size(30, 2)
            .container_width(30)
            .colors(bg, Rgb::BLACK),
    );

    let mut buffer = Buffer::new(30, 3, Rgb::BLACK).unwrap();
    scene.paint(&mut buffer);

    assert_eq!(buffer.get(0, 0).unwrap().bg(), Filter::DIM.apply(bg));
    assert_eq!(buffer.get(0, 1).unwrap().bg(), bg);
    assert_eq!(buffer.row_text(0).trim_end(), " parent");
    assert_eq!(buffer.row_text(1).trim_end(), " child");

    let mut writer = FrameWriter::default();
    writer.write_frame(&buffer);
    assert!(!writer.as_bytes().is_empty());
}

#[test]
fn test_hover_drives_tooltip_bar() {
    let entered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&entered);

    let mut scene = Scene::new(Theme::default());
    scene.push(
        RectProps::new("alloc", 11u32)
            .size(16, 2)
            .tooltip("alloc (11 samples, 4.2%)")
            .on_mouse_enter(move |ev, id| sink.borrow_mut().push((ev.x, *id))),
    );

    let hover = PointerEvent::new(PointerKind::Moved, 3, 0);
    assert!(scene.dispatch(&hover));

    let mut bar = TooltipBar::new(flamecell::Rect::new(0, 2, 30, 1), scene.theme());
    bar.set_text(scene.hovered_tooltip());
    let mut buffer = Buffer::new(30, 3, Rgb::BLACK).unwrap();
    scene.paint(&mut buffer);
    bar.paint(&mut buffer);

    assert_eq!(*entered.borrow(), vec![(3, 11)]);
    assert_eq!(buffer.row_text(2).trim_end(), "alloc (11 samples, 4.2%)");

    let click = PointerEvent::new(PointerKind::Down(MouseButton::Left), 3, 0);
    assert!(scene.dispatch(&click));
}
