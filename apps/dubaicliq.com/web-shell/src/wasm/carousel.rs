use super::*;

use dubaicliq_client_core::carousel::CarouselState;

use crate::wasm_state::BrowserIntervalScheduler;

pub(super) fn install(document: &web_sys::Document) -> bool {
    let Some(root) = qs(document, CAROUSEL_SELECTOR) else {
        return false;
    };
    let slides = qsa_in(&root, CAROUSEL_SLIDE_SELECTOR);
    let period_ms = CONFIG.with(|config| config.borrow().carousel_period_ms);
    let scheduler = BrowserIntervalScheduler {
        on_tick: || dispatch(CarouselEvent::Tick),
    };
    let reduced_motion = media_matches(REDUCED_MOTION_MEDIA_QUERY);
    let Some(state) = CarouselState::new(slides.len(), reduced_motion, period_ms, scheduler) else {
        debug!("carousel has no slides");
        return false;
    };

    let dots = qsa_in(&root, CAROUSEL_DOT_SELECTOR);
    let controller = CarouselController {
        track: qs_in(&root, CAROUSEL_TRACK_SELECTOR),
        slides,
        dots: dots.clone(),
        state,
    };
    CAROUSEL.with(|slot| *slot.borrow_mut() = Some(controller));

    if let Some(prev) = qs_in(&root, CAROUSEL_PREV_SELECTOR) {
        listen(&prev, "click", |_event| dispatch(CarouselEvent::PrevClicked));
    }
    if let Some(next) = qs_in(&root, CAROUSEL_NEXT_SELECTOR) {
        listen(&next, "click", |_event| dispatch(CarouselEvent::NextClicked));
    }
    for (index, dot) in dots.iter().enumerate() {
        listen(dot, "click", move |_event| {
            dispatch(CarouselEvent::DotClicked(index))
        });
    }
    listen(&root, "mouseenter", |_event| {
        dispatch(CarouselEvent::PointerEntered)
    });
    listen(&root, "mouseleave", |_event| dispatch(CarouselEvent::PointerLeft));
    listen(&root, "focusin", |_event| dispatch(CarouselEvent::FocusIn));
    listen(&root, "focusout", |_event| dispatch(CarouselEvent::FocusOut));

    CAROUSEL.with(|slot| {
        if let Some(controller) = slot.borrow_mut().as_mut() {
            controller.state.set_active(0);
            render(controller);
            controller.state.start();
        }
    });
    debug!(reduced_motion, period_ms, "carousel installed");
    true
}

pub(super) fn dispatch(event: CarouselEvent) {
    CAROUSEL.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        if controller.state.handle(event).is_some() {
            render(controller);
        }
    });
}

fn render(controller: &CarouselController) {
    let index = controller.state.index();
    if let Some(track) = controller.track.as_ref() {
        let offset = -(index as i64) * 100;
        set_style(track, "transform", &format!("translateX({offset}%)"));
    }
    for (slide_index, slide) in controller.slides.iter().enumerate() {
        toggle_class(slide, ACTIVE_CLASS, slide_index == index);
    }
    for (dot_index, dot) in controller.dots.iter().enumerate() {
        let active = dot_index == index;
        toggle_class(dot, ACTIVE_CLASS, active);
        set_bool_attribute(dot, "aria-selected", active);
    }
}
