use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termdonut::{FrameBuffer, Renderer, RendererConfig};

fn render_frame(c: &mut Criterion) {
    let renderer = Renderer::new(RendererConfig::default());
    let mut frame = FrameBuffer::new(80, 22);
    let mut ax = 0.0f64;
    let mut ay = 0.0f64;

    c.bench_function("render/frame", |b| {
        b.iter(|| {
            renderer.render(black_box(ax), black_box(ay), &mut frame);
            ax += 0.1;
            ay -= 0.2 / 3.0;
            black_box(frame.hash64());
        })
    });
}

criterion_group!(benches, render_frame);
criterion_main!(benches);
