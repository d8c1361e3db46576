use criterion::{Criterion, criterion_group, criterion_main};
use mandown_engine::{IndentSpec, MemorySurface, PulldownParser, RenderSession, wrap_write};
mod common;

fn bench_wrap_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");
    group.sample_size(10);

    let text = common::generate_paragraph_text(200);
    group.bench_function("wrap_write_indented", |b| {
        b.iter(|| {
            let mut surface = MemorySurface::new(1, 80).unwrap();
            wrap_write(&mut surface, std::hint::black_box(&text), IndentSpec::TAB);
            std::hint::black_box(surface);
        });
    });

    group.finish();
}

fn bench_render_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let session = RenderSession::new(PulldownParser::new());
    group.bench_function("render_markdown", |b| {
        b.iter(|| {
            let view = session
                .run(std::hint::black_box(content.as_bytes()), 80)
                .unwrap();
            std::hint::black_box(view);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_wrap_write, bench_render_session);
criterion_main!(benches);
