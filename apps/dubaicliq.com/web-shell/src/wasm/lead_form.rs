use super::*;

use dubaicliq_client_core::lead::{LeadFormFields, LeadStore, submit_lead};

/// The browser's session-scoped storage, keyed by the configured lead key.
pub(super) struct SessionLeadStore {
    key: String,
}

impl SessionLeadStore {
    pub(super) fn from_config() -> Self {
        Self {
            key: CONFIG.with(|config| config.borrow().lead_storage_key.clone()),
        }
    }

    fn storage() -> Result<web_sys::Storage, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        window
            .session_storage()
            .map_err(|_| "failed to access session storage".to_string())?
            .ok_or_else(|| "session storage is unavailable".to_string())
    }
}

impl LeadStore for SessionLeadStore {
    type Error = String;

    fn load_raw_lead(&self) -> Result<Option<String>, String> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|_| "failed to read stored lead".to_string())
    }

    fn persist_raw_lead(&self, raw: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|_| "failed to persist lead".to_string())
    }
}

pub(super) fn install(document: &web_sys::Document) -> bool {
    let Some(form) = qs(document, LEAD_FORM_SELECTOR)
        .and_then(|form| form.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return false;
    };
    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        on_submit(&form);
    });
    true
}

fn on_submit(form: &web_sys::HtmlFormElement) {
    let Ok(form_data) = web_sys::FormData::new_with_form(form) else {
        warn!("failed to read lead form data");
        return;
    };
    let fields = LeadFormFields::from_lookup(|name| form_data.get(name).as_string());
    let config = CONFIG.with(|config| config.borrow().clone());
    match submit_lead(
        &SessionLeadStore::from_config(),
        fields,
        &config,
        chrono::Utc::now(),
    ) {
        Ok(submission) => {
            info!(redirect_to = %submission.redirect_to, "lead captured");
            navigate_to(&submission.redirect_to);
        }
        Err(error) => {
            warn!(%error, "lead submission failed");
        }
    }
}
