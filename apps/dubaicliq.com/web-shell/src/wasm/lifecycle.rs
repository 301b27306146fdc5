use super::*;

use dubaicliq_client_core::routing::{is_home_path, url_without_hash};

/// Applies `window.__DUBAICLIQ_CONFIG__` when the page defines it. Returns
/// whether an override was applied; on error the defaults stay in place.
pub(super) fn load_site_config() -> Result<bool, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| "failed to read site config global".to_string())?;
    if value.is_undefined() || value.is_null() {
        return Ok(false);
    }

    let raw = match value.as_string() {
        Some(raw) => raw,
        None => js_sys::JSON::stringify(&value)
            .map_err(|_| "site config global is not serializable".to_string())?
            .into(),
    };
    let config = SiteConfig::from_json(&raw).map_err(|error| error.to_string())?;
    CONFIG.with(|slot| *slot.borrow_mut() = config);
    Ok(true)
}

pub(super) fn current_pathname() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default()
}

pub(super) fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// On the home page a leftover `#fragment` is stripped from the address bar
/// and the page returns to the top once it has loaded.
pub(super) fn install_home_scroll_reset() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_default();
    if !is_home_path(&pathname) {
        return false;
    }

    let target = window.clone();
    listen(&target, "load", move |_event| {
        let location = window.location();
        let has_hash = location.hash().is_ok_and(|hash| !hash.is_empty());
        if has_hash {
            let search = location.search().unwrap_or_default();
            let url = url_without_hash(&location.pathname().unwrap_or_default(), &search);
            let replaced = window
                .history()
                .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
            if replaced.is_err() {
                warn!(url, "failed to strip location hash");
            }
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
    });
    true
}

pub(super) fn record_component(component: SiteComponent, present: bool) {
    if present {
        info!(component = component.as_str(), "behavior installed");
    } else {
        debug!(component = component.as_str(), "behavior skipped; elements absent");
    }
    DIAGNOSTICS.with(|state| state.borrow_mut().record(component, present));
}

pub(super) fn set_boot_error(message: &str) {
    DIAGNOSTICS.with(|state| state.borrow_mut().set_error(message));
    web_sys::console::error_1(&JsValue::from_str(&format!(
        "dubaicliq web shell failed to boot: {message}"
    )));
}
