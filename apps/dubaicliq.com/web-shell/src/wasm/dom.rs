use super::*;

pub(super) fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// First match for `selector` in the document.
pub(super) fn qs(document: &web_sys::Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// First match for `selector` under `root`.
pub(super) fn qs_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(super) fn qsa(document: &web_sys::Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub(super) fn qsa_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

pub(super) fn toggle_class(element: &Element, class: &str, force: bool) {
    let _ = element.class_list().toggle_with_force(class, force);
}

pub(super) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(super) fn set_bool_attribute(element: &Element, name: &str, value: bool) {
    let _ = element.set_attribute(name, if value { "true" } else { "false" });
}

pub(super) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub(super) fn clear_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().remove_property(property);
    }
}

pub(super) fn focus(element: &Element) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.focus();
    }
}

pub(super) fn text_content(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

pub(super) fn as_input(element: Element) -> Option<HtmlInputElement> {
    element.dyn_into::<HtmlInputElement>().ok()
}

pub(super) fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

pub(super) fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(url).is_err() {
        warn!(url, "failed to navigate");
    }
}

/// Registers `handler` for `event` on `target`. Closures live for the page
/// lifetime in the listener registry.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        warn!(event, "failed to register event listener");
        return;
    }
    LISTENERS.with(|listeners| listeners.borrow_mut().push(callback));
}

/// Like [`listen`] but marked passive, for scroll.
pub(super) fn listen_passive(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    if target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        warn!(event, "failed to register passive event listener");
        return;
    }
    LISTENERS.with(|listeners| listeners.borrow_mut().push(callback));
}

pub(super) fn request_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    if window
        .request_animation_frame(callback.unchecked_ref())
        .is_err()
    {
        warn!("failed to request animation frame");
    }
}
