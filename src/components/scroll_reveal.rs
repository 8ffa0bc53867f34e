//! One-shot scroll-reveal: each target gains the `is-visible` class the first
//! time it intersects the viewport and is then unobserved. CSS owns the
//! transition; scrolling back out never re-hides an element.

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const VISIBLE_CLASS: &str = "is-visible";

#[hook]
pub fn use_scroll_reveal(targets: Vec<NodeRef>) {
    use_effect_with_deps(
        move |_| {
            let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(0.1));
            options.set_root_margin("0px 0px -50px 0px");

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .ok();
            if let Some(observer) = observer.as_ref() {
                for target in &targets {
                    if let Some(element) = target.cast::<Element>() {
                        observer.observe(&element);
                    }
                }
            }

            // Keep the closure alive for the observer's lifetime
            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        },
        (),
    );
}
