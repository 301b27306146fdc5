#![cfg(target_arch = "wasm32")]

use dubaicliq_client_core::Catalog;
use serde_json::Value as JsonValue;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use dubaicliq_web_shell::{
    carousel_go_to, install_site_behaviors, set_drawer_open, site_diagnostics_json,
};

wasm_bindgen_test_configure!(run_in_browser);

const NAV_AND_CAROUSEL_MARKUP: &str = r##"
<button class="menu-toggle" aria-expanded="false"></button>
<button class="all-categories-btn"></button>
<div class="drawer-overlay" aria-hidden="true"></div>
<aside class="side-drawer" aria-hidden="true">
  <button class="drawer-close"></button>
  <div class="mega-panel">
    <button class="drawer-cat-btn" data-category="displays"></button>
    <button class="drawer-cat-btn" data-category="audio"></button>
    <div class="drawer-panel" data-panel="displays"><a href="#displays">Displays</a></div>
    <div class="drawer-panel" data-panel="audio"><a href="#audio">Audio</a></div>
  </div>
</aside>
<div class="carousel">
  <div class="carousel-track">
    <div class="carousel-slide"></div>
    <div class="carousel-slide"></div>
    <div class="carousel-slide"></div>
  </div>
  <button class="dot"></button>
  <button class="dot"></button>
  <button class="dot"></button>
</div>
"##;

const CATALOG_MARKUP: &str = r#"
<form class="search-form"><input class="search-input" name="q"></form>
<p class="search-hint"></p>
<div class="catalog-grid"></div>
"#;

const CARD_BLOCK_SELECTOR: &str = ".card-title, .card-meta, .price, li, .card-description";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(markup: &str) {
    let document = document();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(markup);
    document.body().unwrap().append_child(&root).unwrap();
}

fn find(selector: &str) -> Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn is_active(selector: &str) -> bool {
    find(selector).class_list().contains("is-active")
}

fn find_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(|node| node.dyn_into::<Element>().unwrap())
        .collect()
}

fn display(element: &Element) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn diagnostics() -> JsonValue {
    serde_json::from_str(&site_diagnostics_json()).unwrap()
}

#[wasm_bindgen_test]
fn diagnostics_export_is_json_with_a_phase() {
    let snapshot = diagnostics();
    let phase = snapshot["phase"].as_str().unwrap();
    assert!(matches!(phase, "idle" | "booting" | "ready" | "error"));
    assert!(snapshot["active"].is_array());
    assert!(snapshot["skipped"].is_array());
}

#[wasm_bindgen_test]
fn drawer_export_leaves_diagnostics_unchanged() {
    let before = diagnostics();
    set_drawer_open(true);
    set_drawer_open(false);
    assert_eq!(diagnostics(), before);
}

#[wasm_bindgen_test]
fn carousel_export_leaves_diagnostics_unchanged() {
    let before = diagnostics();
    carousel_go_to(3);
    assert_eq!(diagnostics(), before);
}

#[wasm_bindgen_test]
fn drawer_and_carousel_state_is_reflected_into_markup() {
    mount(NAV_AND_CAROUSEL_MARKUP);
    install_site_behaviors().unwrap();
    let root = document().document_element().unwrap();
    let drawer = find(".side-drawer");
    let overlay = find(".drawer-overlay");
    let toggle = find(".menu-toggle");

    set_drawer_open(true);
    assert!(root.class_list().contains("drawer-open"));
    assert!(document().body().unwrap().class_list().contains("no-scroll"));
    assert_eq!(drawer.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(overlay.get_attribute("aria-hidden").as_deref(), Some("false"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(is_active(".drawer-cat-btn[data-category='displays']"));
    assert!(is_active(".drawer-panel[data-panel='displays']"));
    assert!(!is_active(".drawer-panel[data-panel='audio']"));

    set_drawer_open(false);
    assert!(!root.class_list().contains("drawer-open"));
    assert_eq!(drawer.get_attribute("aria-hidden").as_deref(), Some("true"));
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));

    carousel_go_to(2);
    let track = find(".carousel-track");
    let transform = track
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("transform")
        .unwrap();
    assert_eq!(transform, "translateX(-200%)");
    let dots = find_all(&find(".carousel"), ".dot");
    assert_eq!(dots[2].get_attribute("aria-selected").as_deref(), Some("true"));
    assert_eq!(dots[0].get_attribute("aria-selected").as_deref(), Some("false"));

    let diagnostics = diagnostics();
    let active = diagnostics["active"].as_array().unwrap();
    assert!(active.contains(&JsonValue::from("drawer")));
    assert!(active.contains(&JsonValue::from("carousel")));
}

#[wasm_bindgen_test]
fn rendered_catalog_cards_filter_on_their_visible_text() {
    mount(CATALOG_MARKUP);
    install_site_behaviors().unwrap();
    let catalog = Catalog::bundled().unwrap();
    let cards = find_all(&find(".catalog-grid"), ".catalog-card");
    assert_eq!(cards.len(), catalog.len());

    for (card, record) in cards.iter().zip(catalog.records()) {
        let shown: Vec<String> = find_all(card, CARD_BLOCK_SELECTOR)
            .iter()
            .map(|block| block.text_content().unwrap_or_default())
            .collect();
        assert_eq!(shown, record.card_blocks());
        assert_eq!(shown.join(" "), record.rendered_text());
    }

    // The category key is only visible through the meta line.
    let input = find(".search-input").dyn_into::<HtmlInputElement>().unwrap();
    input.set_value("videowalls");
    let submit = web_sys::Event::new("submit").unwrap();
    find(".search-form").dispatch_event(&submit).unwrap();

    let visible: Vec<String> = cards
        .iter()
        .filter(|card| display(card) != "none")
        .filter_map(|card| card.get_attribute("data-cat"))
        .collect();
    assert_eq!(visible, vec!["videowalls", "videowalls"]);
    assert_eq!(
        find(".search-hint").text_content().unwrap_or_default(),
        "2 results \u{2022} Search: \u{201c}videowalls\u{201d}"
    );
}
