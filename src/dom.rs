use crate::core::Viewport;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Optional anchor lookup; absence is logged, never an error.
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::debug!("[dom] #{} not present, skipping", id);
    }
    el
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    let el = document.query_selector(selector).ok().flatten();
    if el.is_none() {
        log::debug!("[dom] {} not present, skipping", selector);
    }
    el
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    el.dyn_ref::<web::HtmlElement>().map(|h| h.style())
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(s) = style(el) {
        _ = s.set_property(property, value);
    }
}

/// Inner window size, falling back to the root element's client box.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(0.0, 0.0);
    };
    let root = w.document().and_then(|d| d.document_element());
    let width = w
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|r| r.client_width() as f64))
        .unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .or_else(|| root.as_ref().map(|r| r.client_height() as f64))
        .unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = by_id(document, element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

/// Attaches a passive listener for the page's lifetime. The returned function
/// is the registered callback, kept so the listener can be detached later.
pub fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> js_sys::Function {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        &callback,
        &passive(),
    );
    closure.forget();
    callback
}

/// Registers an existing callback on one more event/target pair.
pub fn listen_with(target: &web::EventTarget, event: &str, callback: &js_sys::Function) {
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback,
        &passive(),
    );
}

#[inline]
pub fn unlisten(target: &web::EventTarget, event: &str, callback: &js_sys::Function) {
    _ = target.remove_event_listener_with_callback(event, callback);
}

#[inline]
fn millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}

/// Runs `f` once after `delay`.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once(f);
    _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        millis(delay),
    );
    cb.forget();
}

/// Repeating timer. The handle is returned for timers that clear themselves.
pub fn set_interval(period: Duration, f: impl FnMut() + 'static) -> Option<i32> {
    let w = web::window()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let handle = w
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            millis(period),
        )
        .ok();
    cb.forget();
    handle
}

#[inline]
pub fn clear_interval(handle: i32) {
    if let Some(w) = web::window() {
        w.clear_interval_with_handle(handle);
    }
}

/// Resolves after `delay`; used inside `spawn_local` tasks.
pub async fn sleep(delay: Duration) {
    let ms = millis(delay);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = JsFuture::from(promise).await;
}

pub fn inject_style(document: &web::Document, css: &str) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(el) = document.create_element("style") {
        el.set_text_content(Some(css));
        _ = head.append_child(&el);
    }
}
