use super::*;

use dubaicliq_client_core::navigation::{FocusTarget, NavigationEffect};

/// Returns `(mega menu present, drawer open/close present)`.
pub(super) fn install(document: &web_sys::Document) -> (bool, bool) {
    let Some(drawer) = qs(document, DRAWER_SELECTOR) else {
        return (false, false);
    };

    let toggles = qsa(document, MENU_TOGGLE_SELECTOR);
    let overlay = qs(document, DRAWER_OVERLAY_SELECTOR);
    let close_button = qs(document, DRAWER_CLOSE_SELECTOR);
    let chrome = match (toggles.is_empty(), overlay, close_button.as_ref()) {
        (false, Some(overlay), Some(_)) => Some(DrawerChrome { toggles, overlay }),
        _ => None,
    };

    let category_buttons = qsa_in(&drawer, DRAWER_CATEGORY_BUTTON_SELECTOR);
    let panels = qsa_in(&drawer, DRAWER_PANEL_SELECTOR);
    let categories = category_buttons
        .iter()
        .filter_map(|button| attribute(button, CATEGORY_ATTRIBUTE))
        .collect();
    let controller = DrawerController {
        mega_panel: qs_in(&drawer, MEGA_PANEL_SELECTOR),
        drawer: drawer.clone(),
        chrome,
        category_buttons: category_buttons.clone(),
        panels,
        state: NavigationState::new(categories),
    };
    render_categories(&controller);
    let chrome_present = controller.chrome.is_some();

    if let Some(chrome) = controller.chrome.as_ref() {
        for toggle in &chrome.toggles {
            listen(toggle, "click", |_event| dispatch(NavigationEvent::ToggleClicked));
        }
        if let Some(all_categories) = qs(document, ALL_CATEGORIES_BUTTON_SELECTOR) {
            listen(&all_categories, "click", |_event| {
                dispatch(NavigationEvent::AllCategoriesClicked)
            });
        }
        if let Some(close_button) = close_button.as_ref() {
            listen(close_button, "click", |_event| {
                dispatch(NavigationEvent::CloseClicked)
            });
        }
        listen(&chrome.overlay, "click", |_event| {
            dispatch(NavigationEvent::OverlayClicked)
        });
        listen(document, "keydown", |event| {
            let is_escape = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|event| event.key() == "Escape");
            if is_escape {
                dispatch(NavigationEvent::EscapePressed);
            }
        });
    }

    for button in &category_buttons {
        let key = attribute(button, CATEGORY_ATTRIBUTE).unwrap_or_default();
        let hover_key = key.clone();
        listen(button, "click", move |_event| {
            dispatch(NavigationEvent::CategoryClicked(key.clone()))
        });
        listen(button, "mouseenter", move |_event| {
            dispatch(NavigationEvent::CategoryHovered {
                key: hover_key.clone(),
                hover_capable: media_matches(HOVER_MEDIA_QUERY),
            })
        });
    }

    for link in qsa_in(&drawer, DRAWER_PANEL_LINK_SELECTOR) {
        listen(&link, "click", |_event| {
            dispatch(NavigationEvent::PanelLinkClicked)
        });
    }

    DRAWER.with(|slot| *slot.borrow_mut() = Some(controller));
    debug!(chrome_present, "drawer installed");
    (true, chrome_present)
}

pub(super) fn dispatch(event: NavigationEvent) {
    let focus_target = DRAWER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let controller = slot.as_mut()?;
        let changes_drawer = !matches!(
            event,
            NavigationEvent::CategoryClicked(_) | NavigationEvent::CategoryHovered { .. }
        );
        if changes_drawer && controller.chrome.is_none() {
            return None;
        }
        let effect = controller.state.handle(event);
        reflect(controller, &effect)
    });
    // Focus moves fire focus events synchronously; run them outside the borrow.
    if let Some(target) = focus_target {
        focus(&target);
    }
}

fn reflect(controller: &DrawerController, effect: &NavigationEffect) -> Option<Element> {
    let mut focus_target = None;
    if let Some(change) = effect.drawer.as_ref() {
        reflect_open(controller, change.open);
        if change.reset_panel {
            if let Some(mega_panel) = controller.mega_panel.as_ref() {
                mega_panel.set_scroll_top(0);
            }
        }
        focus_target = match change.focus.as_ref() {
            Some(FocusTarget::Category(_)) => controller.category_buttons.first().cloned(),
            Some(FocusTarget::PrimaryToggle) => controller
                .chrome
                .as_ref()
                .and_then(|chrome| chrome.toggles.first().cloned()),
            None => None,
        };
    }
    if effect.active_category_changed || effect.drawer.is_some() {
        render_categories(controller);
    }
    focus_target
}

fn reflect_open(controller: &DrawerController, open: bool) {
    let Some(chrome) = controller.chrome.as_ref() else {
        return;
    };
    if let Some(document) = document() {
        if let Some(root) = document.document_element() {
            toggle_class(&root, DRAWER_OPEN_CLASS, open);
        }
        if let Some(body) = document.body() {
            toggle_class(&body, NO_SCROLL_CLASS, open);
        }
    }
    for toggle in &chrome.toggles {
        toggle_class(toggle, TOGGLE_OPEN_CLASS, open);
        set_bool_attribute(toggle, "aria-expanded", open);
    }
    set_bool_attribute(&controller.drawer, "aria-hidden", !open);
    set_bool_attribute(&chrome.overlay, "aria-hidden", !open);
}

fn render_categories(controller: &DrawerController) {
    for button in &controller.category_buttons {
        let key = attribute(button, CATEGORY_ATTRIBUTE).unwrap_or_default();
        toggle_class(button, ACTIVE_CLASS, controller.state.is_active(&key));
    }
    for panel in &controller.panels {
        let key = attribute(panel, PANEL_ATTRIBUTE).unwrap_or_default();
        toggle_class(panel, ACTIVE_CLASS, controller.state.is_active(&key));
    }
}
