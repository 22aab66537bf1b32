//! Criterion benchmarks for the hot dispatch paths.
//!
//! Every benchmark drives the dispatcher through a no-op sink, so the
//! numbers measure classification and state-machine cost, not delivery.
//!
//! Run with:
//! ```bash
//! cargo bench --package streampad-core --bench dispatch_bench
//! ```

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use streampad_core::{
    AndroidKeyTranslator, ContactTrace, ControllerCollaborator, GestureSink, GrabToggleScheduler,
    InputDispatcher, KeyEvent, Modifiers, MotionEvent, MouseButton, PointerSample,
    RemoteInputSink, StreamScale,
};

// ── No-op collaborators ───────────────────────────────────────────────────────

struct NullSink;

impl RemoteInputSink for NullSink {
    fn send_mouse_move(&self, _dx: i16, _dy: i16) {}
    fn send_mouse_button(&self, _button: MouseButton, _pressed: bool) {}
    fn send_mouse_scroll(&self, _clicks: i8) {}
    fn send_key(&self, _code: u16, _pressed: bool, _modifiers: Modifiers) {}
    fn send_touch_down(&self, _slot: u8, _x: i32, _y: i32) {}
    fn send_touch_move(&self, _slot: u8, _x: i32, _y: i32) {}
    fn send_touch_up(&self, _slot: u8, _x: i32, _y: i32) {}
}

struct NullController;

impl ControllerCollaborator for NullController {
    fn handle_button(&self, _event: &KeyEvent) -> bool {
        false
    }
    fn handle_motion(&self, _event: &MotionEvent) -> bool {
        false
    }
}

struct NullGestures;

impl GestureSink for NullGestures {
    fn request_on_screen_keyboard(&self) {}
}

struct NullScheduler;

impl GrabToggleScheduler for NullScheduler {
    fn schedule_toggle(&self, _delay: std::time::Duration) {}
}

fn make_dispatcher() -> InputDispatcher {
    InputDispatcher::new(
        StreamScale::new(1280, 720, 1920, 1080).expect("valid dimensions"),
        Arc::new(NullSink),
        Arc::new(NullController),
        Arc::new(AndroidKeyTranslator),
        Arc::new(NullGestures),
        Arc::new(NullScheduler),
    )
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_mouse_move(c: &mut Criterion) {
    let mut dispatcher = make_dispatcher();
    dispatcher.handle_motion(&MotionEvent::mouse_move(0, 0));
    let mut x = 0;

    c.bench_function("mouse_move_sample", |b| {
        b.iter(|| {
            x += 1;
            dispatcher.handle_motion(black_box(&MotionEvent::mouse_move(x, x / 2)))
        })
    });
}

fn bench_mouse_move_with_history(c: &mut Criterion) {
    let mut dispatcher = make_dispatcher();
    dispatcher.handle_motion(&MotionEvent::mouse_move(0, 0));
    let mut x = 0;

    c.bench_function("mouse_move_batched_history", |b| {
        b.iter(|| {
            x += 4;
            let event = MotionEvent::mouse_move_with_history(
                vec![
                    PointerSample::new(x - 3, 0),
                    PointerSample::new(x - 2, 0),
                    PointerSample::new(x - 1, 0),
                ],
                x,
                0,
            );
            dispatcher.handle_motion(black_box(&event))
        })
    });
}

fn bench_touch_move_replay(c: &mut Criterion) {
    let mut dispatcher = make_dispatcher();
    dispatcher.handle_motion(&MotionEvent::touch_down(0, &[(0, 0)]));
    dispatcher.handle_motion(&MotionEvent::touch_down(1, &[(0, 0), (500, 500)]));
    let mut x = 0;

    c.bench_function("touch_move_two_contacts", |b| {
        b.iter(|| {
            x += 2;
            let event = MotionEvent::touch_move(vec![
                ContactTrace::with_history(vec![PointerSample::new(x - 1, x - 1)], x, x),
                ContactTrace::with_history(
                    vec![PointerSample::new(500 + x - 1, 500)],
                    500 + x,
                    500,
                ),
            ]);
            dispatcher.handle_motion(black_box(&event))
        })
    });
}

fn bench_key_translation(c: &mut Criterion) {
    let mut dispatcher = make_dispatcher();
    const KEYCODE_A: u16 = 29;

    c.bench_function("key_down_up_pair", |b| {
        b.iter(|| {
            dispatcher.handle_key(black_box(&KeyEvent::down(KEYCODE_A)));
            dispatcher.handle_key(black_box(&KeyEvent::up(KEYCODE_A)))
        })
    });
}

criterion_group!(
    benches,
    bench_mouse_move,
    bench_mouse_move_with_history,
    bench_touch_move_replay,
    bench_key_translation
);
criterion_main!(benches);
