use serde::Deserialize;

pub const DEFAULT_CONTACT_PHONE: &str = "971509876683";
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@dubaicliq.com";
pub const DEFAULT_WHATSAPP_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_LEAD_STORAGE_KEY: &str = "dubaicliq_lead";
pub const DEFAULT_CONFIRMATION_PAGE: &str = "thank-you.html";
pub const DEFAULT_PRODUCTS_PAGE: &str = "products.html";
pub const DEFAULT_LEAD_SOURCE: &str = "website";
pub const DEFAULT_CAROUSEL_PERIOD_MS: u32 = 6_500;
pub const DEFAULT_HEADER_TOP_OFFSET_PX: f64 = 20.0;
pub const DEFAULT_HEADER_JITTER_PX: f64 = 6.0;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("carousel period must be greater than zero")]
    ZeroCarouselPeriod,
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

/// Page-wide settings. Every field falls back to the site's fixed literals so
/// a partial override only replaces what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub contact_phone: String,
    pub contact_email: String,
    pub whatsapp_base_url: String,
    pub lead_storage_key: String,
    pub confirmation_page: String,
    pub products_page: String,
    pub default_lead_source: String,
    pub carousel_period_ms: u32,
    pub header_top_offset_px: f64,
    pub header_jitter_px: f64,
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            whatsapp_base_url: DEFAULT_WHATSAPP_BASE_URL.to_string(),
            lead_storage_key: DEFAULT_LEAD_STORAGE_KEY.to_string(),
            confirmation_page: DEFAULT_CONFIRMATION_PAGE.to_string(),
            products_page: DEFAULT_PRODUCTS_PAGE.to_string(),
            default_lead_source: DEFAULT_LEAD_SOURCE.to_string(),
            carousel_period_ms: DEFAULT_CAROUSEL_PERIOD_MS,
            header_top_offset_px: DEFAULT_HEADER_TOP_OFFSET_PX,
            header_jitter_px: DEFAULT_HEADER_JITTER_PX,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel_period_ms == 0 {
            return Err(ConfigError::ZeroCarouselPeriod);
        }
        let required = [
            ("contactPhone", &self.contact_phone),
            ("contactEmail", &self.contact_email),
            ("whatsappBaseUrl", &self.whatsapp_base_url),
            ("leadStorageKey", &self.lead_storage_key),
            ("confirmationPage", &self.confirmation_page),
            ("productsPage", &self.products_page),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn whatsapp_base_url(&self) -> &str {
        self.whatsapp_base_url.trim_end_matches('/')
    }
}
