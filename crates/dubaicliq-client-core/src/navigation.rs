//! Drawer (hamburger) and mega-menu category state.

use tracing::debug;

/// Where keyboard focus goes after the drawer opens or closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// The control of the named category, i.e. the first declared one.
    Category(String),
    PrimaryToggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerChange {
    pub open: bool,
    pub focus: Option<FocusTarget>,
    /// Opening always rewinds the mega panel to the default category and the
    /// top of its scroll range.
    pub reset_panel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    ToggleClicked,
    AllCategoriesClicked,
    CloseClicked,
    OverlayClicked,
    EscapePressed,
    PanelLinkClicked,
    CategoryClicked(String),
    CategoryHovered { key: String, hover_capable: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationEffect {
    pub drawer: Option<DrawerChange>,
    pub active_category_changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    categories: Vec<String>,
    drawer_open: bool,
    active_category: Option<String>,
}

impl NavigationState {
    /// `categories` is the declared order of the category buttons. Blank keys
    /// are dropped; with no keys the mega-menu has nothing to select.
    #[must_use]
    pub fn new(categories: Vec<String>) -> Self {
        let categories: Vec<String> = categories
            .into_iter()
            .filter(|key| !key.is_empty())
            .collect();
        let active_category = categories.first().cloned();
        Self {
            categories,
            drawer_open: false,
            active_category,
        }
    }

    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    #[must_use]
    pub fn default_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.active_category.as_deref() == Some(key)
    }

    pub fn set_open(&mut self, open: bool) -> DrawerChange {
        self.drawer_open = open;
        debug!(open, "drawer state changed");
        if open {
            self.reset_to_default();
            DrawerChange {
                open,
                focus: self.default_category().map(|key| FocusTarget::Category(key.to_string())),
                reset_panel: true,
            }
        } else {
            DrawerChange {
                open,
                focus: Some(FocusTarget::PrimaryToggle),
                reset_panel: false,
            }
        }
    }

    pub fn toggle(&mut self) -> DrawerChange {
        self.set_open(!self.drawer_open)
    }

    /// Unknown keys are ignored. Returns whether `key` was accepted.
    pub fn set_active_category(&mut self, key: &str) -> bool {
        if !self.categories.iter().any(|category| category == key) {
            debug!(key, "ignoring unknown drawer category");
            return false;
        }
        self.active_category = Some(key.to_string());
        true
    }

    pub fn reset_to_default(&mut self) {
        self.active_category = self.categories.first().cloned();
    }

    pub fn handle(&mut self, event: NavigationEvent) -> NavigationEffect {
        match event {
            NavigationEvent::ToggleClicked => NavigationEffect {
                drawer: Some(self.toggle()),
                active_category_changed: true,
            },
            NavigationEvent::AllCategoriesClicked => NavigationEffect {
                drawer: Some(self.set_open(true)),
                active_category_changed: true,
            },
            NavigationEvent::CloseClicked
            | NavigationEvent::OverlayClicked
            | NavigationEvent::EscapePressed
            | NavigationEvent::PanelLinkClicked => NavigationEffect {
                drawer: Some(self.set_open(false)),
                active_category_changed: false,
            },
            NavigationEvent::CategoryClicked(key) => NavigationEffect {
                drawer: None,
                active_category_changed: self.set_active_category(&key),
            },
            NavigationEvent::CategoryHovered { key, hover_capable } => {
                // Touch devices report hover on tap and would pin the category.
                let changed = hover_capable && self.set_active_category(&key);
                NavigationEffect {
                    drawer: None,
                    active_category_changed: changed,
                }
            }
        }
    }
}
