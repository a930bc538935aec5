use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::behavior;
use crate::dom;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const TYPE_INTERVAL_MS: u32 = 100;
pub const HERO_TYPE_INTERVAL_MS: u32 = 50;

// One-shot latch: each target is unobserved on its first intersection and
// never re-hidden afterwards.
pub fn reveal_on_scroll(selector: &str) {
    let targets = dom::elements(selector);
    if targets.is_empty() {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let _ = target.class_list().add_1("fade-in");
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for target in &targets {
        let _ = target.style().set_property("opacity", "0");
        observer.observe(target);
    }

    // The observer and its callback live for the rest of the page.
    on_intersect.forget();
}

pub fn type_into(target: HtmlElement, interval_ms: u32) {
    let Some(full_text) = target.text_content() else {
        return;
    };
    if full_text.is_empty() {
        return;
    }

    target.set_text_content(Some(""));

    spawn_local(async move {
        for shown in behavior::reveal_prefixes(&full_text) {
            target.set_text_content(Some(shown));
            TimeoutFuture::new(interval_ms).await;
        }
    });
}
