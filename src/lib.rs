#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod audio;
pub mod core;
pub mod dom;
pub mod frame;
pub mod overlay;
pub mod panel;
pub mod render;

use crate::audio::LevelFeed;
use crate::core::config::LOGO_SIZE_RATIO;
use crate::core::{ColorFilters, RenderState, Variant, VisualConfig};
use crate::frame::OrbInstance;

/// Page-level state: the canvas, the shared level feed, the live config
/// and whichever orb is currently mounted. The panel pushes changes in
/// through the setters; the renderer never reads the DOM.
pub struct Shell {
    canvas: web::HtmlCanvasElement,
    feed: Rc<LevelFeed>,
    config: RefCell<VisualConfig>,
    orb: RefCell<Option<OrbInstance>>,
}

impl Shell {
    pub fn config(&self) -> VisualConfig {
        self.config.borrow().clone()
    }

    pub fn set_variant(&self, variant: Variant) {
        if self.config.borrow().variant == variant {
            return;
        }
        self.config.borrow_mut().variant = variant;
        self.remount();
    }

    pub fn set_size(&self, px: u32) {
        if self.config.borrow().size_px == px {
            return;
        }
        self.config.borrow_mut().size_px = px;
        self.remount();
    }

    pub fn set_background(&self, hex: &str) {
        if self.config.borrow().background == hex {
            return;
        }
        self.config.borrow_mut().background = hex.to_string();
        self.remount();
    }

    // Logo and status flip DOM visibility only; the orb keeps running.
    pub fn toggle_logo(&self) {
        {
            let mut config = self.config.borrow_mut();
            config.show_logo = !config.show_logo;
        }
        self.apply_chrome();
    }

    pub fn toggle_status(&self) {
        {
            let mut config = self.config.borrow_mut();
            config.show_status = !config.show_status;
        }
        self.apply_chrome();
    }

    // Filters are a CSS post-process; no remount.
    pub fn set_filters(&self, filters: ColorFilters) {
        self.config.borrow_mut().filters = filters.clamped();
        self.apply_filter();
    }

    pub fn update_filters(&self, update: impl FnOnce(&mut ColorFilters)) {
        {
            let mut config = self.config.borrow_mut();
            update(&mut config.filters);
            config.filters = config.filters.clamped();
        }
        self.apply_filter();
    }

    /// Tear down the current orb and mount a fresh one for the current
    /// config. The old frame loop must be cancelled before the surface is
    /// resized under it.
    pub fn remount(&self) {
        if let Some(orb) = self.orb.borrow_mut().take() {
            orb.stop();
        }
        self.apply_chrome();
        match OrbInstance::start(&self.canvas, &self.config.borrow(), self.feed.clone()) {
            Ok(orb) => *self.orb.borrow_mut() = Some(orb),
            Err(()) => log::error!("orb mount failed; page stays static"),
        }
    }

    fn apply_chrome(&self) {
        let Some(document) = dom::window_document() else {
            return;
        };
        let (background, logo_visible, logo_px, status_visible) = {
            let config = self.config.borrow();
            (
                config.background.clone(),
                config.variant.is_branded() && config.show_logo,
                config.size_px as f64 * LOGO_SIZE_RATIO as f64,
                self.feed.is_live() && config.show_status,
            )
        };
        overlay::set_page_background(&document, &background);
        if logo_visible {
            overlay::resize_logo(&document, logo_px);
            overlay::show(&document, overlay::LOGO);
        } else {
            overlay::hide(&document, overlay::LOGO);
        }
        if status_visible {
            overlay::show(&document, overlay::STATUS_LINE);
        } else {
            overlay::hide(&document, overlay::STATUS_LINE);
        }
        self.apply_filter();
    }

    fn apply_filter(&self) {
        let config = self.config.borrow();
        let css = if config.variant.is_branded() {
            "none".to_string()
        } else {
            config.filters.css()
        };
        _ = self.canvas.style().set_property("filter", &css);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("voice-orb starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("orb-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #orb-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let feed = LevelFeed::new();
    let shell = Rc::new(Shell {
        canvas: canvas.clone(),
        feed: feed.clone(),
        config: RefCell::new(VisualConfig::default()),
        orb: RefCell::new(None),
    });
    shell.remount();

    // Status line follows every published sample; the start button goes
    // away the moment the microphone is live.
    let shell_for_status = shell.clone();
    feed.subscribe(move |sample| {
        let Some(document) = dom::window_document() else {
            return;
        };
        if sample.state == RenderState::Idle {
            return;
        }
        overlay::hide(&document, overlay::START_BUTTON);
        if shell_for_status.config().show_status {
            dom::set_text(&document, overlay::STATUS_LINE, sample.state.status_label());
            overlay::show(&document, overlay::STATUS_LINE);
        } else {
            overlay::hide(&document, overlay::STATUS_LINE);
        }
    });

    panel::wire(panel::PanelWiring {
        document: document.clone(),
        shell: shell.clone(),
    });
    wire_microphone_start(&document, &canvas, feed);
    Ok(())
}

/// The start button and a click on the canvas both begin microphone
/// acquisition; once the feed is live further clicks are no-ops.
fn wire_microphone_start(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    feed: Rc<LevelFeed>,
) {
    let feed_for_button = feed.clone();
    dom::add_click_listener(document, overlay::START_BUTTON, move || {
        request_microphone(feed_for_button.clone());
    });

    let feed_for_canvas = feed;
    let closure = Closure::wrap(Box::new(move || {
        request_microphone(feed_for_canvas.clone());
    }) as Box<dyn FnMut()>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_microphone(feed: Rc<LevelFeed>) {
    if feed.is_live() {
        return;
    }
    // One permission request in flight at a time; a denial clears the
    // flag so the user can click again.
    static PENDING: AtomicBool = AtomicBool::new(false);
    if PENDING.swap(true, Ordering::SeqCst) {
        return;
    }
    spawn_local(async move {
        if let Err(e) = audio::start_microphone(feed).await {
            log::error!("microphone unavailable: {:?}", e);
        }
        PENDING.store(false, Ordering::SeqCst);
    });
}
