use super::*;

use dubaicliq_client_core::header::HeaderVisibility;

pub(super) fn install(document: &web_sys::Document) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(header) = qs(document, SITE_HEADER_SELECTOR) else {
        return false;
    };

    let (top_offset_px, jitter_px) = CONFIG.with(|config| {
        let config = config.borrow();
        (config.header_top_offset_px, config.header_jitter_px)
    });
    let initial_y = window.scroll_y().unwrap_or(0.0);
    HEADER.with(|slot| {
        *slot.borrow_mut() = Some(HeaderController {
            header,
            visibility: HeaderVisibility::with_thresholds(initial_y, top_offset_px, jitter_px),
        });
    });

    listen_passive(&window, "scroll", |_event| on_scroll());
    true
}

fn on_scroll() {
    let needs_frame = HEADER.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .is_some_and(|controller| controller.visibility.request_frame())
    });
    if needs_frame {
        request_frame(update_header);
    }
}

fn update_header() {
    let y = web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0);
    let drawer_open = document()
        .and_then(|document| document.document_element())
        .is_some_and(|root| has_class(&root, DRAWER_OPEN_CLASS));

    HEADER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        let height = controller
            .header
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |header| f64::from(header.offset_height()));
        let update = controller.visibility.update(y, drawer_open, height);
        toggle_class(&controller.header, HEADER_HIDDEN_CLASS, update.hidden);
        set_style(
            &controller.header,
            HEADER_HIDE_PROPERTY,
            &format!("{}px", update.hide_offset_px),
        );
    });
}
