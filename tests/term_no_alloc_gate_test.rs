use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_2048::types::Direction;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn render_and_diff_encode_are_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut prev = FrameBuffer::new(viewport.width, viewport.height);
    let mut next = FrameBuffer::new(viewport.width, viewport.height);
    // A full frame of styled cells is the worst case for a diff.
    let mut out: Vec<u8> = Vec::with_capacity(1 << 20);

    let mut gs: GameState = GameState::new(1);
    let mut snap = GameSnapshot::default();

    // Warm-up.
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut prev);
    gs.apply_move(Direction::Left);
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut next);
    encode_diff_into(&prev, &next, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for i in 0..200u32 {
            std::mem::swap(&mut prev, &mut next);
            gs.apply_move(Direction::ALL[(i % 4) as usize]);
            if gs.game_over() {
                gs.restart();
            }
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut next);

            out.clear();
            encode_diff_into(&prev, &next, &mut out).unwrap();
        }
    });

    assert_eq!(allocs, 0);
}
