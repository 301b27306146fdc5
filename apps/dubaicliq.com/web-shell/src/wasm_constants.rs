pub(crate) const CONFIG_GLOBAL: &str = "__DUBAICLIQ_CONFIG__";

pub(crate) const SITE_HEADER_SELECTOR: &str = ".site-header";
pub(crate) const HEADER_HIDDEN_CLASS: &str = "is-hidden";
pub(crate) const HEADER_HIDE_PROPERTY: &str = "--header-hide";

pub(crate) const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub(crate) const ALL_CATEGORIES_BUTTON_SELECTOR: &str = ".all-categories-btn";
pub(crate) const DRAWER_SELECTOR: &str = ".side-drawer";
pub(crate) const DRAWER_OVERLAY_SELECTOR: &str = ".drawer-overlay";
pub(crate) const DRAWER_CLOSE_SELECTOR: &str = ".drawer-close";
pub(crate) const DRAWER_CATEGORY_BUTTON_SELECTOR: &str = ".drawer-cat-btn";
pub(crate) const DRAWER_PANEL_SELECTOR: &str = ".drawer-panel";
pub(crate) const DRAWER_PANEL_LINK_SELECTOR: &str = ".drawer-panel a";
pub(crate) const MEGA_PANEL_SELECTOR: &str = ".mega-panel";
pub(crate) const DRAWER_OPEN_CLASS: &str = "drawer-open";
pub(crate) const NO_SCROLL_CLASS: &str = "no-scroll";
pub(crate) const TOGGLE_OPEN_CLASS: &str = "open";
pub(crate) const CATEGORY_ATTRIBUTE: &str = "data-category";
pub(crate) const PANEL_ATTRIBUTE: &str = "data-panel";

pub(crate) const CAROUSEL_SELECTOR: &str = ".carousel";
pub(crate) const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";
pub(crate) const CAROUSEL_SLIDE_SELECTOR: &str = ".carousel-slide";
pub(crate) const CAROUSEL_DOT_SELECTOR: &str = ".dot";
pub(crate) const CAROUSEL_PREV_SELECTOR: &str = ".carousel-btn.prev";
pub(crate) const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-btn.next";

pub(crate) const LEAD_FORM_SELECTOR: &str = "#lead-form";

pub(crate) const SEARCH_FORM_SELECTOR: &str = ".search-form";
pub(crate) const SEARCH_INPUT_SELECTOR: &str = ".search-input";
pub(crate) const SEARCH_HINT_SELECTOR: &str = ".search-hint";
pub(crate) const CATALOG_GRID_SELECTOR: &str = ".catalog-grid";
pub(crate) const CATALOG_CARD_SELECTOR: &str = ".catalog-card";
pub(crate) const CATALOG_CARD_CLASS: &str = "catalog-card";
pub(crate) const CATALOG_PILL_SELECTOR: &str = ".catalog-filters .pill";
pub(crate) const CARD_CATEGORY_ATTRIBUTE: &str = "data-cat";
pub(crate) const CARD_TAGS_ATTRIBUTE: &str = "data-tags";
pub(crate) const HOME_RESULTS_SELECTOR: &str = ".home-results";
pub(crate) const HOME_RESULT_SELECTOR: &str = ".home-result";

pub(crate) const SEND_WHATSAPP_SELECTOR: &str = "#send-whatsapp";
pub(crate) const SEND_EMAIL_SELECTOR: &str = "#send-email";
pub(crate) const LEAD_PREVIEW_SELECTOR: &str = "#lead-preview";

pub(crate) const ACTIVE_CLASS: &str = "is-active";
pub(crate) const HOVER_MEDIA_QUERY: &str = "(hover: hover)";
pub(crate) const REDUCED_MOTION_MEDIA_QUERY: &str = "(prefers-reduced-motion: reduce)";
