use criterion::{black_box, criterion_group, criterion_main, Criterion};

use driftfield::{graphics::Canvas, FieldParams, ParticleField};

fn bench_frame(c: &mut Criterion) {
    let mut field = ParticleField::with_seed(800.0, 600.0, FieldParams::default(), Some(1));
    let mut canvas = Canvas::new(800, 600);

    c.bench_function("step", |b| b.iter(|| black_box(&mut field).step()));

    c.bench_function("step_and_draw", |b| {
        b.iter(|| {
            field.step();
            field.draw(black_box(&mut canvas));
        })
    });

    let mut dest = vec![0u32; 800 * 600];
    c.bench_function("present", |b| {
        b.iter(|| canvas.present_to(black_box(&mut dest), 800, 0xFF_0F_17_2A, 0.3))
    });
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
