//! Behavior core for the Dubaicliq marketing site.
//!
//! Everything here is DOM-free so it can be exercised natively; the WASM web
//! shell owns element lookup and event wiring and reflects these state
//! machines into the page.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod filter;
pub mod header;
pub mod lead;
pub mod links;
pub mod navigation;
pub mod routing;

pub use carousel::{CarouselState, IntervalScheduler};
pub use catalog::{Catalog, CatalogError, ProductRecord};
pub use config::{ConfigError, SiteConfig};
pub use diagnostics::{SiteComponent, SiteDiagnostics};
pub use filter::{FilterFacet, FilterOutcome, FilterState, Filterable};
pub use header::{HeaderUpdate, HeaderVisibility};
pub use lead::{LeadError, LeadFormFields, LeadLookup, LeadRecord, LeadStore};
pub use links::{EnquiryLinks, compose_enquiry_links};
pub use navigation::{FocusTarget, NavigationState};
