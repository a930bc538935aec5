use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::behavior::{self, SectionSpan};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|doc| doc.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_anchor(target_id: &str) {
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(target_id)) else {
        return;
    };

    let viewport_top = target.get_bounding_client_rect().top();
    smooth_scroll_to(behavior::anchor_scroll_top(viewport_top, scroll_y()));
}

pub fn elements(selector: &str) -> Vec<HtmlElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };

    let mut found = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            found.push(element);
        }
    }
    found
}

pub fn section_spans() -> Vec<SectionSpan> {
    elements("section[id]")
        .into_iter()
        .map(|section| SectionSpan {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}
