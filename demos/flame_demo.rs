//! Flame Demo: An interactive flame graph in the terminal.
//!
//! Demonstrates:
//! - Building a `Scene` of `LabeledRect`s from a call tree
//! - Hover tooltips shown in a `TooltipBar`
//! - Click-to-zoom, with ancestors of the zoomed frame dimmed
//!
//! Press `q` or `Esc` to exit.

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use flamecell::{
    Buffer, FrameWriter, PointerEvent, Rect, RectProps, Rgb, Scene, Theme, TooltipBar, Widget,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;

struct Frame {
    name: &'static str,
    samples: u32,
    parent: Option<usize>,
}

/// A flattened call tree, parents always before children.
fn call_tree() -> Vec<Frame> {
    let raw: [(&str, u32, Option<usize>); 9] = [
        ("main", 100, None),
        ("parse_args", 8, Some(0)),
        ("run", 90, Some(0)),
        ("load_profile", 30, Some(2)),
        ("read_to_string", 22, Some(3)),
        ("render", 55, Some(2)),
        ("layout", 20, Some(5)),
        ("paint", 31, Some(5)),
        ("write_frame", 12, Some(7)),
    ];
    raw.into_iter()
        .map(|(name, samples, parent)| Frame {
            name,
            samples,
            parent,
        })
        .collect()
}

fn is_ancestor(tree: &[Frame], ancestor: usize, mut node: usize) -> bool {
    while let Some(parent) = tree[node].parent {
        if parent == ancestor {
            return true;
        }
        node = parent;
    }
    false
}

fn color_for(name: &str) -> Rgb {
    let hash = name.bytes().fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    #[allow(clippy::cast_possible_truncation)]
    Rgb::new(205 + (hash % 50) as u8, (hash % 180) as u8, 30)
}

/// Lay the tree out with `focus` filling the full width.
#[allow(clippy::cast_possible_truncation)]
fn build_scene(tree: &[Frame], focus: usize, width: u16, selected: &Rc<Cell<Option<usize>>>) -> Scene<usize> {
    let mut scene = Scene::new(Theme::default());
    let mut offsets = vec![0i64; tree.len()];
    let mut depths = vec![0i32; tree.len()];
    let scale = f64::from(width) / f64::from(tree[focus].samples);

    for (id, frame) in tree.iter().enumerate() {
        let (x, size) = if id == focus || is_ancestor(tree, id, focus) {
            (0, width)
        } else if is_ancestor(tree, focus, id) {
            let parent = frame.parent.unwrap_or(focus);
            let x = offsets[parent];
            offsets[parent] += (f64::from(frame.samples) * scale) as i64;
            (x, (f64::from(frame.samples) * scale) as u16)
        } else {
            continue;
        };
        offsets[id] = x;
        depths[id] = frame.parent.map_or(0, |p| depths[p] + 1);

        let click = Rc::clone(selected);
        scene.push(
            RectProps::new(frame.name, id)
                .at(x as i32, depths[id] * 2)
                .size(size, 2)
                .container_width(width)
                .colors(color_for(frame.name), Rgb::BLACK)
                .tooltip(format!("{} ({} samples)", frame.name, frame.samples))
                .dimmed(id != focus && is_ancestor(tree, id, focus))
                .on_click(move |_| click.set(Some(id))),
        );
    }
    scene
}

fn draw(scene: &Scene<usize>, width: u16, height: u16) -> io::Result<()> {
    let theme = scene.theme();
    let mut buffer = Buffer::new(width, height, theme.empty_bg)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    scene.paint(&mut buffer);

    let mut bar = TooltipBar::new(Rect::new(0, height - 1, width, 1), theme);
    bar.set_text(scene.hovered_tooltip());
    bar.paint(&mut buffer);

    let mut writer = FrameWriter::with_capacity(usize::from(width) * usize::from(height) * 24);
    writer.write_frame(&buffer);
    writer.flush_to(&mut io::stdout())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let tree = call_tree();
    let selected = Rc::new(Cell::new(None));
    let (mut width, mut height) = terminal::size()?;
    let mut focus = 0;
    let mut scene = build_scene(&tree, focus, width, &selected);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    let result = (|| -> io::Result<()> {
        draw(&scene, width, height)?;
        loop {
            let event = event::read()?;
            match &event {
                Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => break,
                Event::Resize(w, h) => {
                    (width, height) = (*w, *h);
                    scene = build_scene(&tree, focus, width, &selected);
                }
                _ => {
                    if let Some(pointer) = PointerEvent::from_terminal(&event) {
                        scene.dispatch(&pointer);
                    }
                }
            }
            if let Some(id) = selected.take() {
                focus = id;
                scene = build_scene(&tree, focus, width, &selected);
            }
            draw(&scene, width, height)?;
        }
        Ok(())
    })();

    execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
