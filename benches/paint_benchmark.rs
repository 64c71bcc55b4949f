//! Paint benchmark: Render and paint a dense flame graph.
//!
//! Target: a full 200x50 frame in well under one frame budget (16ms)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flamecell::{Buffer, FrameWriter, RectProps, Rgb, Scene, Theme};

const WIDTH: u16 = 200;
const HEIGHT: u16 = 50;

/// One rect per (depth, slot), halving widths at each level like a
/// balanced call tree.
fn build_scene() -> Scene<(u16, u16)> {
    let mut scene = Scene::new(Theme::default());
    for depth in 0..HEIGHT / 2 {
        let slots = 1u16 << depth.min(7);
        let width = WIDTH / slots;
        for slot in 0..slots {
            let shade = u8::try_from((depth * 9) % 256).unwrap_or(0);
            scene.push(
                RectProps::new(format!("fn_{depth}_{slot}"), (depth, slot))
                    .at(i32::from(slot * width) - 3, i32::from(depth * 2))
                    .size(width, 2)
                    .container_width(WIDTH)
                    .colors(Rgb::new(230, shade, 13), Rgb::BLACK)
                    .dimmed(depth < 3),
            );
        }
    }
    scene
}

fn render_scene(c: &mut Criterion) {
    c.bench_function("render_scene", |b| b.iter(|| black_box(build_scene())));
}

fn paint_scene(c: &mut Criterion) {
    let scene = build_scene();
    let mut buffer = Buffer::new(WIDTH, HEIGHT, Rgb::BLACK).unwrap();

    c.bench_function("paint_scene", |b| {
        b.iter(|| {
            buffer.clear(Rgb::BLACK);
            scene.paint(black_box(&mut buffer));
        });
    });
}

fn write_frame(c: &mut Criterion) {
    let scene = build_scene();
    let mut buffer = Buffer::new(WIDTH, HEIGHT, Rgb::BLACK).unwrap();
    scene.paint(&mut buffer);
    let mut writer = FrameWriter::with_capacity(64 * 1024);

    c.bench_function("write_frame", |b| {
        b.iter(|| {
            writer.clear();
            writer.write_frame(black_box(&buffer));
        });
    });
}

criterion_group!(benches, render_scene, paint_scene, write_frame);
criterion_main!(benches);
