use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycaster::core::GameState;
use tui_raycaster::engine::{FrameRenderer, Screen};
use tui_raycaster::term::{compose, FrameBuffer, PixelCanvas, Rgb};
use tui_raycaster::types::{Button, InputSnapshot};

fn bench_single_cast(c: &mut Criterion) {
    let state = GameState::default();

    c.bench_function("cast_one_ray", |b| {
        b.iter(|| black_box(state.cast_from_player(black_box(0.3))))
    });
}

fn bench_state_update(c: &mut Criterion) {
    let mut state = GameState::default();
    let input = InputSnapshot::holding(&[Button::TurnRight, Button::Forward]);

    c.bench_function("state_update", |b| {
        b.iter(|| black_box(state.update(black_box(&input))))
    });
}

fn bench_frame_plan(c: &mut Criterion) {
    let state = GameState::default();
    let mut renderer = FrameRenderer::new(Screen::badge());

    c.bench_function("frame_plan_80_columns", |b| {
        b.iter(|| {
            black_box(renderer.plan(&state).len());
        })
    });
}

fn bench_frame_render(c: &mut Criterion) {
    let state = GameState::default();
    let screen = Screen::badge();
    let mut renderer = FrameRenderer::new(screen);
    let mut canvas = PixelCanvas::new(screen.width, screen.height);

    c.bench_function("frame_render_to_canvas", |b| {
        b.iter(|| {
            canvas.clear(Rgb::default());
            renderer.render(&state, &mut canvas);
        })
    });
}

fn bench_compose(c: &mut Criterion) {
    let state = GameState::default();
    let screen = Screen::fit(200, 100);
    let mut renderer = FrameRenderer::new(screen);
    let mut canvas = PixelCanvas::new(screen.width, screen.height);
    renderer.render(&state, &mut canvas);
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("half_block_compose_200x50", |b| {
        b.iter(|| compose(black_box(&canvas), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_single_cast,
    bench_state_update,
    bench_frame_plan,
    bench_frame_render,
    bench_compose
);
criterion_main!(benches);
