//! Thank-you page: WhatsApp and email deep links built from the stored lead.

use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::lead::{LeadLookup, LeadRecord};
use crate::routing::encode_component;

const GREETING: &str = "Hi Dubaicliq, I'd like to enquire about an AV project.";
const DEFAULT_SUBJECT_PROJECT: &str = "AV Project";
const EMPTY_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryLinks {
    pub message: String,
    pub subject: String,
    pub whatsapp_href: String,
    pub mailto_href: String,
    pub preview: String,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}

#[must_use]
pub fn enquiry_message(lead: &LeadRecord) -> String {
    let name = lead.name.trim();
    let email = lead.email.trim();
    let project = lead.project.trim();
    let message = lead.message.trim();
    [
        GREETING.to_string(),
        String::new(),
        format!("Name: {}", or_placeholder(name, EMPTY_PLACEHOLDER)),
        format!("Email: {}", or_placeholder(email, EMPTY_PLACEHOLDER)),
        format!("Project: {}", or_placeholder(project, EMPTY_PLACEHOLDER)),
        String::new(),
        "Message:".to_string(),
        or_placeholder(message, EMPTY_PLACEHOLDER).to_string(),
    ]
    .join("\n")
}

#[must_use]
pub fn compose_enquiry_links(lead: &LeadRecord, config: &SiteConfig) -> EnquiryLinks {
    let message = enquiry_message(lead);
    let project = lead.project.trim();
    let subject = format!(
        "Website enquiry - {}",
        or_placeholder(project, DEFAULT_SUBJECT_PROJECT)
    );
    let encoded_message = encode_component(&message);
    let whatsapp_href = format!(
        "{}/{}?text={encoded_message}",
        config.whatsapp_base_url(),
        config.contact_phone
    );
    let mailto_href = format!(
        "mailto:{}?subject={}&body={encoded_message}",
        config.contact_email,
        encode_component(&subject)
    );
    let preview = format!(
        "Preview: {} \u{2022} {} \u{2022} {}",
        or_placeholder(lead.name.trim(), "Name"),
        or_placeholder(project, "Project"),
        or_placeholder(lead.email.trim(), "Email"),
    );
    EnquiryLinks {
        message,
        subject,
        whatsapp_href,
        mailto_href,
        preview,
    }
}

/// Skip policy for the thank-you page: anything but a decoded lead leaves the
/// links untouched.
#[must_use]
pub fn links_for_lookup(lookup: LeadLookup, config: &SiteConfig) -> Option<EnquiryLinks> {
    match lookup {
        LeadLookup::Found(lead) => Some(compose_enquiry_links(&lead, config)),
        LeadLookup::Missing => {
            debug!("no stored lead; enquiry links left unpopulated");
            None
        }
        LeadLookup::Unavailable(reason) => {
            warn!(%reason, "lead storage unavailable; enquiry links left unpopulated");
            None
        }
        LeadLookup::Malformed(error) => {
            warn!(%error, "stored lead is malformed; enquiry links left unpopulated");
            None
        }
    }
}
