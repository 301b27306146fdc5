use super::*;

use dubaicliq_client_core::lead::lookup_lead;
use dubaicliq_client_core::links::links_for_lookup;

use super::lead_form::SessionLeadStore;

pub(super) fn install(document: &web_sys::Document) -> bool {
    let (Some(whatsapp), Some(email)) = (
        qs(document, SEND_WHATSAPP_SELECTOR),
        qs(document, SEND_EMAIL_SELECTOR),
    ) else {
        return false;
    };

    let config = CONFIG.with(|config| config.borrow().clone());
    let Some(links) = links_for_lookup(lookup_lead(&SessionLeadStore::from_config()), &config)
    else {
        return true;
    };

    if whatsapp.set_attribute("href", &links.whatsapp_href).is_err()
        || email.set_attribute("href", &links.mailto_href).is_err()
    {
        warn!("failed to populate enquiry links");
    }
    if let Some(preview) = qs(document, LEAD_PREVIEW_SELECTOR) {
        preview.set_text_content(Some(&links.preview));
    }
    debug!(subject = %links.subject, "enquiry links populated");
    true
}
