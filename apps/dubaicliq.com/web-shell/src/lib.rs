#[cfg(target_arch = "wasm32")]
mod wasm_constants;
#[cfg(target_arch = "wasm32")]
mod wasm_state;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use dubaicliq_client_core::carousel::CarouselEvent;
    use dubaicliq_client_core::diagnostics::SiteComponent;
    use dubaicliq_client_core::filter::{FilterFacet, FilterState, apply_filter};
    use dubaicliq_client_core::navigation::{NavigationEvent, NavigationState};
    use dubaicliq_client_core::{SiteConfig, SiteDiagnostics};
    use tracing::{debug, info, warn};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlElement, HtmlInputElement};
    use web_time::Instant;

    use crate::wasm_constants::*;
    use crate::wasm_state::{
        CardSnapshot, CarouselController, CatalogController, DrawerChrome, DrawerController,
        HeaderController, HomeSearchController,
    };

    mod carousel;
    mod catalog;
    mod dom;
    mod drawer;
    mod header;
    mod lead_form;
    mod lifecycle;
    mod logging;
    mod thank_you;

    use dom::*;
    use lifecycle::*;

    thread_local! {
        static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
        static DIAGNOSTICS: RefCell<SiteDiagnostics> = RefCell::new(SiteDiagnostics::default());
        static LISTENERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
        static DRAWER: RefCell<Option<DrawerController>> = const { RefCell::new(None) };
        static HEADER: RefCell<Option<HeaderController>> = const { RefCell::new(None) };
        static CAROUSEL: RefCell<Option<CarouselController>> = const { RefCell::new(None) };
        static CATALOG: RefCell<Option<CatalogController>> = const { RefCell::new(None) };
        static HOME_SEARCH: RefCell<Option<HomeSearchController>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = boot() {
            set_boot_error(&error);
        }
    }

    #[wasm_bindgen]
    pub fn site_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| state.borrow().to_json())
    }

    /// Scans the document again and installs behaviors for markup inserted
    /// after the initial boot.
    #[wasm_bindgen]
    pub fn install_site_behaviors() -> Result<(), JsValue> {
        boot().map_err(|error| {
            set_boot_error(&error);
            JsValue::from_str(&error)
        })
    }

    #[wasm_bindgen]
    pub fn set_drawer_open(open: bool) {
        drawer::dispatch(if open {
            NavigationEvent::AllCategoriesClicked
        } else {
            NavigationEvent::CloseClicked
        });
    }

    #[wasm_bindgen]
    pub fn carousel_go_to(index: u32) {
        carousel::dispatch(CarouselEvent::DotClicked(index as usize));
    }

    fn boot() -> Result<(), String> {
        let boot_started_at = Instant::now();
        let config_override = load_site_config();
        let filter_directive = CONFIG.with(|config| config.borrow().log_filter.clone());
        logging::install(&filter_directive);
        if let Err(error) = &config_override {
            warn!(%error, "ignoring invalid site config override");
        }

        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        let document = window
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        let page_path = current_pathname();
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.phase = "booting".to_string();
            state.page_path = page_path.clone();
            state.config_override = matches!(config_override, Ok(true));
        });

        record_component(SiteComponent::HomeScrollReset, install_home_scroll_reset());
        record_component(SiteComponent::HeaderVisibility, header::install(&document));
        let (drawer_present, chrome_present) = drawer::install(&document);
        record_component(SiteComponent::MegaMenu, drawer_present);
        record_component(SiteComponent::Drawer, chrome_present);
        record_component(SiteComponent::Carousel, carousel::install(&document));
        record_component(SiteComponent::LeadForm, lead_form::install(&document));
        let search = catalog::install(&document);
        record_component(SiteComponent::CatalogFilter, search.catalog);
        record_component(SiteComponent::HomeSearch, search.home);
        record_component(SiteComponent::SearchRouting, search.routing);
        record_component(SiteComponent::ThankYouLinks, thank_you::install(&document));

        let boot_latency_ms =
            u64::try_from(boot_started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        DIAGNOSTICS.with(|state| {
            let mut state = state.borrow_mut();
            state.phase = "ready".to_string();
            info!(
                page = %state.page_path,
                active = state.active.len(),
                skipped = state.skipped.len(),
                boot_latency_ms,
                "site behaviors ready"
            );
        });
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{carousel_go_to, install_site_behaviors, set_drawer_open, site_diagnostics_json};

#[cfg(not(target_arch = "wasm32"))]
pub fn site_diagnostics_json() -> String {
    "{\"phase\":\"native\",\"detail\":\"site diagnostics only available on wasm\"}".to_string()
}
