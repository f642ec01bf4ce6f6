//! Browser-side teardown test: a cancelled render task must never tick
//! again, no matter how many frames elapse.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use voice_orb::frame::RenderTask;

wasm_bindgen_test_configure!(run_in_browser);

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let window = web_sys::window().expect("test runs in a browser");
        window
            .request_animation_frame(&resolve)
            .expect("requestAnimationFrame");
    });
    JsFuture::from(promise).await.expect("frame promise");
}

#[wasm_bindgen_test]
async fn cancelled_task_stops_ticking() {
    let ticks = Rc::new(Cell::new(0u32));
    let counting = ticks.clone();
    let task = RenderTask::spawn(move || counting.set(counting.get() + 1));
    assert!(task.is_active());

    next_frame().await;
    next_frame().await;
    next_frame().await;
    assert!(ticks.get() > 0, "task never ticked");

    task.cancel();
    assert!(!task.is_active());
    let after_cancel = ticks.get();

    next_frame().await;
    next_frame().await;
    assert_eq!(ticks.get(), after_cancel, "task ticked after cancel");
}

#[wasm_bindgen_test]
async fn dropping_the_handle_cancels_the_loop() {
    let ticks = Rc::new(Cell::new(0u32));
    let counting = ticks.clone();
    {
        let _task = RenderTask::spawn(move || counting.set(counting.get() + 1));
        next_frame().await;
    }
    let after_drop = ticks.get();
    next_frame().await;
    next_frame().await;
    assert_eq!(ticks.get(), after_drop, "task ticked after drop");
}

#[wasm_bindgen_test]
fn cancel_is_idempotent() {
    let task = RenderTask::spawn(|| {});
    task.cancel();
    task.cancel();
    assert!(!task.is_active());
}
