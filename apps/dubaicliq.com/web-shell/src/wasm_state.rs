use dubaicliq_client_core::carousel::{CarouselState, IntervalScheduler};
use dubaicliq_client_core::catalog::ProductRecord;
use dubaicliq_client_core::filter::{FilterState, Filterable};
use dubaicliq_client_core::header::HeaderVisibility;
use dubaicliq_client_core::navigation::NavigationState;
use gloo_timers::callback::Interval;
use web_sys::{Element, HtmlInputElement};

/// A filterable card as it was rendered when the page loaded.
#[derive(Debug, Clone)]
pub(crate) struct CardSnapshot {
    pub(crate) category: String,
    pub(crate) tags: String,
    pub(crate) text: String,
}

impl CardSnapshot {
    pub(crate) fn from_record(record: &ProductRecord) -> Self {
        Self {
            category: record.category.clone(),
            tags: record.tags_attribute(),
            text: record.rendered_text(),
        }
    }
}

impl Filterable for CardSnapshot {
    fn category(&self) -> &str {
        &self.category
    }

    fn tags_text(&self) -> String {
        self.tags.clone()
    }

    fn full_text(&self) -> String {
        self.text.clone()
    }
}

pub(crate) struct HeaderController {
    pub(crate) header: Element,
    pub(crate) visibility: HeaderVisibility,
}

/// Toggle controls, overlay and close button. Without all of them the drawer
/// cannot be opened and open/close events are ignored.
pub(crate) struct DrawerChrome {
    pub(crate) toggles: Vec<Element>,
    pub(crate) overlay: Element,
}

pub(crate) struct DrawerController {
    pub(crate) drawer: Element,
    pub(crate) chrome: Option<DrawerChrome>,
    pub(crate) category_buttons: Vec<Element>,
    pub(crate) panels: Vec<Element>,
    pub(crate) mega_panel: Option<Element>,
    pub(crate) state: NavigationState,
}

/// Repeating browser timer; dropping the [`Interval`] cancels it.
pub(crate) struct BrowserIntervalScheduler {
    pub(crate) on_tick: fn(),
}

impl IntervalScheduler for BrowserIntervalScheduler {
    type Handle = Interval;

    fn schedule(&mut self, period_ms: u32) -> Interval {
        Interval::new(period_ms, self.on_tick)
    }

    fn cancel(&mut self, handle: Interval) {
        drop(handle);
    }
}

pub(crate) struct CarouselController {
    pub(crate) track: Option<Element>,
    pub(crate) slides: Vec<Element>,
    pub(crate) dots: Vec<Element>,
    pub(crate) state: CarouselState<BrowserIntervalScheduler>,
}

pub(crate) struct CatalogController {
    pub(crate) cards: Vec<Element>,
    pub(crate) snapshots: Vec<CardSnapshot>,
    pub(crate) pills: Vec<Element>,
    pub(crate) hint: Option<Element>,
    pub(crate) input: Option<HtmlInputElement>,
    pub(crate) state: FilterState,
}

pub(crate) struct HomeSearchController {
    pub(crate) results_root: Element,
    pub(crate) results: Vec<Element>,
    pub(crate) snapshots: Vec<CardSnapshot>,
    pub(crate) hint: Option<Element>,
    pub(crate) input: HtmlInputElement,
    pub(crate) state: FilterState,
}
