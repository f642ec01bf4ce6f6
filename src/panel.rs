use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::config::{self, ColorFilters, Variant};
use crate::core::VisualConfig;
use crate::dom;
use crate::overlay;
use crate::Shell;

/// Everything the control panel needs; handed to `wire` once at startup.
pub struct PanelWiring {
    pub document: web::Document,
    pub shell: Rc<Shell>,
}

/// Hook up every panel control to the shell. The panel never reads the
/// renderer; it only pushes configuration and mirrors it back into the
/// controls.
pub fn wire(w: PanelWiring) {
    wire_variant_buttons(&w);
    wire_size_slider(&w);
    wire_background_swatches(&w);
    wire_toggles(&w);
    wire_filters(&w);
    wire_presets(&w);
    wire_panel_toggle(&w);
    wire_panel_toggle_h(&w.document);
    sync_controls(&w.document, &w.shell.config());
}

fn wire_variant_buttons(w: &PanelWiring) {
    for variant in Variant::ALL {
        let shell = w.shell.clone();
        let doc = w.document.clone();
        dom::add_click_listener(&w.document, &variant_button_id(variant), move || {
            shell.set_variant(variant);
            sync_controls(&doc, &shell.config());
        });
    }
}

fn wire_size_slider(w: &PanelWiring) {
    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_input_listener(&w.document, "size-slider", move |value| {
        if let Ok(px) = value.parse::<u32>() {
            shell.set_size(config::clamp_size(px));
            dom::set_text(&doc, "size-label", &size_label(shell.config().size_px));
        }
    });
}

fn wire_background_swatches(w: &PanelWiring) {
    for (i, &(_, hex)) in config::BG_PALETTE.iter().enumerate() {
        let shell = w.shell.clone();
        let doc = w.document.clone();
        dom::add_click_listener(&w.document, &swatch_id(i), move || {
            shell.set_background(hex);
            sync_controls(&doc, &shell.config());
        });
    }
}

fn wire_toggles(w: &PanelWiring) {
    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "logo-toggle", move || {
        shell.toggle_logo();
        sync_controls(&doc, &shell.config());
    });

    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "status-toggle", move || {
        shell.toggle_status();
        sync_controls(&doc, &shell.config());
    });
}

// (slider id, label id) per filter, in panel order.
const FILTER_CONTROLS: [(&str, &str); 6] = [
    ("filter-grayscale", "label-grayscale"),
    ("filter-hue-rotate", "label-hue-rotate"),
    ("filter-brightness", "label-brightness"),
    ("filter-contrast", "label-contrast"),
    ("filter-saturate", "label-saturate"),
    ("filter-invert", "label-invert"),
];

fn wire_filters(w: &PanelWiring) {
    wire_filter(w, "filter-grayscale", |f, v| f.grayscale = v);
    wire_filter(w, "filter-hue-rotate", |f, v| f.hue_rotate = v);
    wire_filter(w, "filter-brightness", |f, v| f.brightness = v);
    wire_filter(w, "filter-contrast", |f, v| f.contrast = v);
    wire_filter(w, "filter-saturate", |f, v| f.saturate = v);
    wire_filter(w, "filter-invert", |f, v| f.invert = v);
}

fn wire_filter(
    w: &PanelWiring,
    slider_id: &str,
    apply: impl Fn(&mut ColorFilters, u32) + 'static,
) {
    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_input_listener(&w.document, slider_id, move |value| {
        if let Ok(v) = value.parse::<u32>() {
            shell.update_filters(|f| apply(f, v));
            sync_filter_labels(&doc, &shell.config().filters);
        }
    });
}

fn wire_presets(w: &PanelWiring) {
    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "preset-reset", move || {
        shell.set_filters(ColorFilters::NEUTRAL);
        sync_filter_controls(&doc, &shell.config().filters);
    });

    let shell = w.shell.clone();
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "preset-bw", move || {
        shell.set_filters(ColorFilters::BLACK_WHITE);
        sync_filter_controls(&doc, &shell.config().filters);
    });
}

fn wire_panel_toggle(w: &PanelWiring) {
    let doc = w.document.clone();
    dom::add_click_listener(&w.document, "panel-toggle", move || toggle_panel(&doc));
}

/// `h` collapses the panel too.
fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "h" || key == "H" {
                toggle_panel(&doc);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn toggle_panel(document: &web::Document) {
    overlay::toggle(document, overlay::PANEL);
    let label = if overlay::is_hidden(document, overlay::PANEL) {
        "Show Controls"
    } else {
        "Hide Controls"
    };
    dom::set_text(document, "panel-toggle", label);
}

/// Mirror the whole config back into the controls: active highlights,
/// labels, slider positions and which rows apply to the variant.
pub fn sync_controls(document: &web::Document, config: &VisualConfig) {
    for variant in Variant::ALL {
        dom::set_class(
            document,
            &variant_button_id(variant),
            "active",
            variant == config.variant,
        );
    }
    for (i, &(_, hex)) in config::BG_PALETTE.iter().enumerate() {
        dom::set_class(document, &swatch_id(i), "active", hex == config.background);
    }
    dom::set_text(document, "size-label", &size_label(config.size_px));
    dom::set_class(document, "logo-toggle", "on", config.show_logo);
    dom::set_class(document, "status-toggle", "on", config.show_status);

    // The logo row applies to the branded orb only; the status toggle and
    // filter column to the sphere variants only.
    if config.variant.is_branded() {
        overlay::show(document, "logo-row");
        overlay::hide(document, "status-row");
        overlay::hide(document, "filter-column");
    } else {
        overlay::hide(document, "logo-row");
        overlay::show(document, "status-row");
        overlay::show(document, "filter-column");
    }

    sync_filter_controls(document, &config.filters);
}

fn sync_filter_controls(document: &web::Document, filters: &ColorFilters) {
    let values = filter_values(filters);
    for ((slider_id, _), value) in FILTER_CONTROLS.iter().zip(values) {
        dom::set_slider_value(document, slider_id, value);
    }
    sync_filter_labels(document, filters);
}

fn sync_filter_labels(document: &web::Document, filters: &ColorFilters) {
    dom::set_text(
        document,
        "label-grayscale",
        &format!("Grayscale: {}%", filters.grayscale),
    );
    dom::set_text(
        document,
        "label-hue-rotate",
        &format!("Hue Rotate: {}\u{b0}", filters.hue_rotate),
    );
    dom::set_text(
        document,
        "label-brightness",
        &format!("Brightness: {}%", filters.brightness),
    );
    dom::set_text(
        document,
        "label-contrast",
        &format!("Contrast: {}%", filters.contrast),
    );
    dom::set_text(
        document,
        "label-saturate",
        &format!("Saturate: {}%", filters.saturate),
    );
    dom::set_text(
        document,
        "label-invert",
        &format!("Invert: {}%", filters.invert),
    );
}

fn filter_values(filters: &ColorFilters) -> [u32; 6] {
    [
        filters.grayscale,
        filters.hue_rotate,
        filters.brightness,
        filters.contrast,
        filters.saturate,
        filters.invert,
    ]
}

fn variant_button_id(variant: Variant) -> String {
    format!("variant-{}", variant.as_str())
}

fn swatch_id(i: usize) -> String {
    format!("bg-{i}")
}

fn size_label(px: u32) -> String {
    format!("Size: {px}px")
}
