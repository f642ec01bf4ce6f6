use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::LevelFeed;
use crate::core::VisualConfig;
use crate::render;

/// A perpetually self-rescheduling requestAnimationFrame loop with an
/// owner. `spawn` schedules the first frame and returns the handle;
/// `cancel` (or dropping the handle) revokes the pending frame and
/// releases the callback, after which no further work runs.
pub struct RenderTask {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RenderTask {
    pub fn spawn(mut work: impl FnMut() + 'static) -> RenderTask {
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_for_tick = raf_id.clone();
        let tick_for_tick = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // A queued callback can still fire once after cancellation.
            if raf_for_tick.get().is_none() {
                return;
            }
            work();
            if raf_for_tick.get().is_none() {
                return;
            }
            raf_for_tick.set(request_frame(&tick_for_tick));
        }) as Box<dyn FnMut()>));
        raf_id.set(request_frame(&tick));
        RenderTask { raf_id, tick }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks the Rc cycle its captures form.
        self.tick.borrow_mut().take();
    }

    pub fn is_active(&self) -> bool {
        self.raf_id.get().is_some()
    }
}

impl Drop for RenderTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let cb = tick.borrow();
    let cb = cb.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// One mounted orb: a painter bound to the canvas plus the frame loop
/// driving it. Built on mount, stopped and replaced whenever the
/// variant, size or background changes.
pub struct OrbInstance {
    task: RenderTask,
}

impl OrbInstance {
    pub fn start(
        canvas: &web::HtmlCanvasElement,
        config: &VisualConfig,
        feed: Rc<LevelFeed>,
    ) -> Result<OrbInstance, ()> {
        let mut orb = render::Orb::create(canvas, config)?;
        let task = RenderTask::spawn(move || {
            let sample = feed.latest();
            orb.draw(sample.level);
        });
        Ok(OrbInstance { task })
    }

    pub fn stop(&self) {
        self.task.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.task.is_active()
    }
}
