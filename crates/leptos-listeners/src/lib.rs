//! Leptos Scoped Listeners
//!
//! Document event listeners and intersection observers whose lifetime is tied
//! to the component that created them. Dropping a subscription removes the
//! underlying browser listener; the hooks keep subscriptions in the owner's
//! arena so teardown releases them.

use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// A listener registered on `document`, removed on drop
pub struct DocumentListener {
    document: web_sys::Document,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DocumentListener {
    /// Register `handler` for `event` on the document.
    /// `None` outside a browser or if registration fails.
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            document,
            event,
            callback,
        })
    }
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Whether `event` originated inside `container`
fn event_inside(container: &web_sys::Node, event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}

/// Call `handler` on every pointer-down outside `target` while `active` holds.
///
/// The document listener exists only while `active` is true and is removed
/// when it turns false or the calling component is torn down.
pub fn on_pointer_down_outside<E, F>(target: NodeRef<E>, active: Signal<bool>, handler: F)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
    F: Fn() + 'static,
{
    let handler = Rc::new(handler);
    let subscription = StoredValue::new_local(None::<DocumentListener>);

    Effect::new(move |_| {
        let listener = if active.get() {
            let handler = Rc::clone(&handler);
            DocumentListener::new("mousedown", move |ev: web_sys::Event| {
                let Some(element) = target.get_untracked() else { return };
                if !event_inside(element.unchecked_ref(), &ev) {
                    handler();
                }
            })
        } else {
            None
        };
        subscription.set_value(listener);
    });
}

/// Intersection observer on one element, disconnected on drop
pub struct VisibilityObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Call `on_visible` whenever `element` enters the viewport with at least
    /// `threshold` of it showing. Browsers also report the initial state, so
    /// an already visible element fires right away.
    pub fn observe<F>(element: &web_sys::Element, threshold: f64, mut on_visible: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<web_sys::IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    on_visible();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_visible` when `target` scrolls fully into view while `enabled`
/// holds. The observer is rebuilt each time `enabled` turns true, so an
/// element that stayed on screen fires again.
pub fn on_visible<E, F>(target: NodeRef<E>, enabled: Signal<bool>, on_visible: F)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
    F: Fn() + 'static,
{
    let on_visible = Rc::new(on_visible);
    let subscription = StoredValue::new_local(None::<VisibilityObserver>);

    Effect::new(move |_| {
        let observer = match (target.get(), enabled.get()) {
            (Some(element), true) => {
                let on_visible = Rc::clone(&on_visible);
                VisibilityObserver::observe(element.unchecked_ref(), 1.0, move || on_visible())
            }
            _ => None,
        };
        subscription.set_value(observer);
    });
}
