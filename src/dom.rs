use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Look up an element by id and cast it to the expected concrete type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?;
    el.dyn_into::<T>()
        .map_err(|el| anyhow!("#{id}: unexpected element {:?}", el))
}

/// Attach a leaked event listener; the widget lives for the whole page.
#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn create_svg_element(document: &web::Document, name: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), name)
        .map_err(|e| anyhow!("create <{name}>: {e:?}"))
}
