use super::*;

use dubaicliq_client_core::Catalog;
use dubaicliq_client_core::catalog::ProductRecord;
use dubaicliq_client_core::filter::ALL_CATEGORIES;
use dubaicliq_client_core::routing::products_search_url;

/// Which owner the page's search form ended up with.
pub(super) struct SearchInstall {
    pub(super) catalog: bool,
    pub(super) home: bool,
    pub(super) routing: bool,
}

pub(super) fn install(document: &web_sys::Document) -> SearchInstall {
    let catalog = install_catalog_filter(document);
    let home = !catalog && install_home_search(document);
    let routing = !catalog && !home && install_search_routing(document);
    SearchInstall {
        catalog,
        home,
        routing,
    }
}

fn snapshot(card: &Element) -> CardSnapshot {
    CardSnapshot {
        category: attribute(card, CARD_CATEGORY_ATTRIBUTE).unwrap_or_default(),
        tags: attribute(card, CARD_TAGS_ATTRIBUTE).unwrap_or_default(),
        text: text_content(card),
    }
}

fn search_input(document: &web_sys::Document) -> Option<HtmlInputElement> {
    qs(document, SEARCH_INPUT_SELECTOR).and_then(as_input)
}

fn install_catalog_filter(document: &web_sys::Document) -> bool {
    let Some(grid) = qs(document, CATALOG_GRID_SELECTOR) else {
        return false;
    };
    let authored = qsa_in(&grid, CATALOG_CARD_SELECTOR);
    let (cards, snapshots) = if authored.is_empty() {
        render_bundled_cards(document, &grid)
    } else {
        let snapshots = authored.iter().map(snapshot).collect();
        (authored, snapshots)
    };
    if cards.is_empty() {
        return false;
    }

    let input = search_input(document);
    let pills = qsa(document, CATALOG_PILL_SELECTOR);
    let state = FilterState::from_search(&current_search());
    if let Some(input) = input.as_ref() {
        if !state.query.is_empty() {
            input.set_value(&state.query);
        }
    }
    let controller = CatalogController {
        cards,
        snapshots,
        pills: pills.clone(),
        hint: qs(document, SEARCH_HINT_SELECTOR),
        input,
        state,
    };
    set_active_pill(&controller.pills, &controller.state.category);
    apply_catalog(&controller);
    CATALOG.with(|slot| *slot.borrow_mut() = Some(controller));

    for pill in &pills {
        let category = attribute(pill, CARD_CATEGORY_ATTRIBUTE)
            .filter(|category| !category.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        listen(pill, "click", move |_event| select_category(&category));
    }
    if let Some(form) = qs(document, SEARCH_FORM_SELECTOR) {
        listen(&form, "submit", |event| {
            event.prevent_default();
            submit_catalog_search();
        });
    }
    true
}

fn select_category(category: &str) {
    CATALOG.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        set_active_pill(&controller.pills, category);
        let query = controller
            .input
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default();
        controller.state.set_category(category);
        controller.state.set_query(&query);
        apply_catalog(controller);
    });
}

fn submit_catalog_search() {
    CATALOG.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        let category = controller
            .pills
            .iter()
            .find(|pill| has_class(pill, ACTIVE_CLASS))
            .and_then(|pill| attribute(pill, CARD_CATEGORY_ATTRIBUTE))
            .filter(|category| !category.is_empty())
            .unwrap_or_else(|| ALL_CATEGORIES.to_string());
        let query = controller
            .input
            .as_ref()
            .map(HtmlInputElement::value)
            .unwrap_or_default();
        controller.state.set_category(&category);
        controller.state.set_query(&query);
        apply_catalog(controller);
    });
}

fn set_active_pill(pills: &[Element], category: &str) {
    for pill in pills {
        let active = attribute(pill, CARD_CATEGORY_ATTRIBUTE).as_deref() == Some(category);
        toggle_class(pill, ACTIVE_CLASS, active);
    }
}

fn apply_catalog(controller: &CatalogController) {
    let outcome = apply_filter(
        &controller.snapshots,
        FilterFacet::WithCategory,
        &controller.state,
    );
    show_matches(&controller.cards, &outcome.visible);
    if let Some(hint) = controller.hint.as_ref() {
        hint.set_text_content(Some(&outcome.hint));
    }
}

fn show_matches(cards: &[Element], visible: &[bool]) {
    for (card, visible) in cards.iter().zip(visible) {
        if *visible {
            clear_style(card, "display");
        } else {
            set_style(card, "display", "none");
        }
    }
}

/// Cards built from the bundled dataset filter on the record text itself, so
/// the page and `ProductRecord::rendered_text` agree.
fn render_bundled_cards(
    document: &web_sys::Document,
    grid: &Element,
) -> (Vec<Element>, Vec<CardSnapshot>) {
    let catalog = match Catalog::bundled() {
        Ok(catalog) => catalog,
        Err(error) => {
            warn!(%error, "bundled product dataset rejected");
            return (Vec::new(), Vec::new());
        }
    };
    let mut cards = Vec::with_capacity(catalog.len());
    let mut snapshots = Vec::with_capacity(catalog.len());
    for record in catalog.records() {
        match render_card(document, record) {
            Ok(card) => {
                if grid.append_child(&card).is_ok() {
                    cards.push(card);
                    snapshots.push(CardSnapshot::from_record(record));
                }
            }
            Err(error) => warn!(id = %record.id, %error, "failed to render product card"),
        }
    }
    debug!(count = cards.len(), "rendered catalog cards from dataset");
    (cards, snapshots)
}

fn render_card(document: &web_sys::Document, record: &ProductRecord) -> Result<Element, String> {
    let create = |tag: &str, class: &str, text: Option<&str>| {
        let element = document
            .create_element(tag)
            .map_err(|_| format!("failed to create {tag} element"))?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        if text.is_some() {
            element.set_text_content(text);
        }
        Ok::<_, String>(element)
    };
    let card = create("article", CATALOG_CARD_CLASS, None)?;
    let _ = card.set_attribute("data-id", &record.id);
    let _ = card.set_attribute(CARD_CATEGORY_ATTRIBUTE, &record.category);
    let _ = card.set_attribute(CARD_TAGS_ATTRIBUTE, &record.tags_attribute());

    if !record.image.is_empty() {
        let image = create("img", "", None)?;
        let _ = image.set_attribute("src", &record.image);
        let _ = image.set_attribute("alt", &record.name);
        let _ = image.set_attribute("loading", "lazy");
        let _ = card.append_child(&image);
    }

    // Same block order as `ProductRecord::card_blocks`.
    let _ = card.append_child(&create("h3", "card-title", Some(record.name.as_str()))?);
    let meta = record.meta_line();
    if !meta.is_empty() {
        let _ = card.append_child(&create("p", "card-meta", Some(meta.as_str()))?);
    }
    if !record.price.is_empty() {
        let _ = card.append_child(&create("p", "price", Some(record.price.as_str()))?);
    }
    if !record.bullets.is_empty() {
        let list = create("ul", "card-bullets", None)?;
        for bullet in &record.bullets {
            let _ = list.append_child(&create("li", "", Some(bullet.as_str()))?);
        }
        let _ = card.append_child(&list);
    }
    if !record.description.is_empty() {
        let description = create("p", "card-description", Some(record.description.as_str()))?;
        let _ = card.append_child(&description);
    }
    Ok(card)
}

fn install_home_search(document: &web_sys::Document) -> bool {
    let Some(results_root) = qs(document, HOME_RESULTS_SELECTOR) else {
        return false;
    };
    let Some(input) = search_input(document) else {
        return false;
    };
    let results = qsa_in(&results_root, HOME_RESULT_SELECTOR);
    if results.is_empty() {
        return false;
    }

    let controller = HomeSearchController {
        snapshots: results.iter().map(snapshot).collect(),
        results,
        results_root,
        hint: qs(document, SEARCH_HINT_SELECTOR),
        input: input.clone(),
        state: FilterState::default(),
    };
    HOME_SEARCH.with(|slot| *slot.borrow_mut() = Some(controller));

    listen(&input, "input", |_event| refilter_home(false));
    if let Some(form) = qs(document, SEARCH_FORM_SELECTOR) {
        listen(&form, "submit", |event| {
            event.prevent_default();
            refilter_home(true);
        });
    }
    true
}

fn refilter_home(scroll_to_results: bool) {
    HOME_SEARCH.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        let query = controller.input.value();
        controller.state.set_query(&query);
        let outcome = apply_filter(
            &controller.snapshots,
            FilterFacet::QueryOnly,
            &controller.state,
        );
        show_matches(&controller.results, &outcome.visible);
        if let Some(hint) = controller.hint.as_ref() {
            hint.set_text_content(Some(&outcome.hint));
        }
        if scroll_to_results {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            controller
                .results_root
                .scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
}

fn install_search_routing(document: &web_sys::Document) -> bool {
    let Some(form) = qs(document, SEARCH_FORM_SELECTOR) else {
        return false;
    };
    let Some(input) = search_input(document) else {
        return false;
    };
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let products_page = CONFIG.with(|config| config.borrow().products_page.clone());
        if let Some(url) = products_search_url(&products_page, &input.value()) {
            navigate_to(&url);
        }
    });
    true
}
