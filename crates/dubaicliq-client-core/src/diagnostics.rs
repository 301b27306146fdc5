use serde::Serialize;

/// Components the shell can wire on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteComponent {
    HomeScrollReset,
    HeaderVisibility,
    Drawer,
    MegaMenu,
    Carousel,
    LeadForm,
    SearchRouting,
    CatalogFilter,
    HomeSearch,
    ThankYouLinks,
}

impl SiteComponent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HomeScrollReset => "home_scroll_reset",
            Self::HeaderVisibility => "header_visibility",
            Self::Drawer => "drawer",
            Self::MegaMenu => "mega_menu",
            Self::Carousel => "carousel",
            Self::LeadForm => "lead_form",
            Self::SearchRouting => "search_routing",
            Self::CatalogFilter => "catalog_filter",
            Self::HomeSearch => "home_search",
            Self::ThankYouLinks => "thank_you_links",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteDiagnostics {
    pub phase: String,
    pub page_path: String,
    pub active: Vec<SiteComponent>,
    pub skipped: Vec<SiteComponent>,
    pub config_override: bool,
    pub last_error: Option<String>,
}

impl Default for SiteDiagnostics {
    fn default() -> Self {
        Self {
            phase: "idle".to_string(),
            page_path: "/".to_string(),
            active: Vec::new(),
            skipped: Vec::new(),
            config_override: false,
            last_error: None,
        }
    }
}

impl SiteDiagnostics {
    /// Records whether a component found its elements. Re-recording moves it
    /// between lists rather than duplicating it.
    pub fn record(&mut self, component: SiteComponent, present: bool) {
        self.active.retain(|existing| *existing != component);
        self.skipped.retain(|existing| *existing != component);
        if present {
            self.active.push(component);
        } else {
            self.skipped.push(component);
        }
    }

    #[must_use]
    pub fn is_active(&self, component: SiteComponent) -> bool {
        self.active.contains(&component)
    }

    pub fn set_error(&mut self, message: &str) {
        self.phase = "error".to_string();
        self.last_error = Some(message.to_string());
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            "{\"phase\":\"error\",\"detail\":\"diagnostics serialization failed\"}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_moves_component_between_lists() {
        let mut diagnostics = SiteDiagnostics::default();
        diagnostics.record(SiteComponent::Carousel, false);
        diagnostics.record(SiteComponent::Carousel, true);
        diagnostics.record(SiteComponent::Carousel, true);
        assert_eq!(diagnostics.active, vec![SiteComponent::Carousel]);
        assert!(diagnostics.skipped.is_empty());
        assert!(diagnostics.is_active(SiteComponent::Carousel));
    }

    #[test]
    fn serializes_component_names_in_snake_case() {
        let mut diagnostics = SiteDiagnostics::default();
        diagnostics.record(SiteComponent::ThankYouLinks, true);
        diagnostics.record(SiteComponent::LeadForm, false);
        let value: serde_json::Value =
            serde_json::from_str(&diagnostics.to_json()).expect("diagnostics json");
        assert_eq!(value["active"][0], SiteComponent::ThankYouLinks.as_str());
        assert_eq!(value["skipped"][0], "lead_form");
        assert_eq!(value["phase"], "idle");
    }

    #[test]
    fn set_error_switches_phase() {
        let mut diagnostics = SiteDiagnostics::default();
        diagnostics.set_error("window is unavailable");
        assert_eq!(diagnostics.phase, "error");
        assert_eq!(diagnostics.last_error.as_deref(), Some("window is unavailable"));
    }
}
