//! Lead capture record and its session-scoped persistence.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::config::SiteConfig;

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("failed to serialize lead: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored lead is malformed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("lead storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub project: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub created_at: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Raw values read from the form's named controls; `None` when a control is
/// missing from the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadFormFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub project: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
}

impl LeadFormFields {
    /// Builds fields from a lookup by control name.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            name: lookup("name"),
            email: lookup("email"),
            project: lookup("project"),
            message: lookup("message"),
            source: lookup("source"),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|value| value.trim().to_string()).unwrap_or_default()
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-03-01T09:30:00.000Z`.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl LeadRecord {
    /// No validation beyond trimming: empty fields are accepted as-is.
    #[must_use]
    pub fn from_form(
        fields: LeadFormFields,
        default_source: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let source = fields
            .source
            .filter(|source| !source.is_empty())
            .unwrap_or_else(|| default_source.to_string());
        Self {
            name: trimmed(fields.name),
            email: trimmed(fields.email),
            project: trimmed(fields.project),
            message: trimmed(fields.message),
            source,
            created_at: iso_timestamp(created_at),
        }
    }

    pub fn to_json(&self) -> Result<String, LeadError> {
        serde_json::to_string(self).map_err(LeadError::Encode)
    }

    pub fn from_json(raw: &str) -> Result<Self, LeadError> {
        serde_json::from_str(raw).map_err(LeadError::Decode)
    }
}

/// Session-scoped key-value slot holding the serialized lead.
pub trait LeadStore {
    type Error: Display;

    fn load_raw_lead(&self) -> Result<Option<String>, Self::Error>;
    fn persist_raw_lead(&self, raw: &str) -> Result<(), Self::Error>;
}

/// Outcome of reading the persisted lead. Only `Found` populates anything.
#[derive(Debug)]
pub enum LeadLookup {
    Missing,
    Unavailable(String),
    Malformed(LeadError),
    Found(LeadRecord),
}

impl LeadLookup {
    #[must_use]
    pub fn into_record(self) -> Option<LeadRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Missing | Self::Unavailable(_) | Self::Malformed(_) => None,
        }
    }
}

pub fn lookup_lead<S: LeadStore>(store: &S) -> LeadLookup {
    let raw = match store.load_raw_lead() {
        Ok(Some(raw)) => raw,
        Ok(None) => return LeadLookup::Missing,
        Err(error) => return LeadLookup::Unavailable(error.to_string()),
    };
    match LeadRecord::from_json(&raw) {
        Ok(record) => LeadLookup::Found(record),
        Err(error) => LeadLookup::Malformed(error),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub record: LeadRecord,
    pub redirect_to: String,
}

/// Captures the form into a record, overwrites the stored lead, and names the
/// confirmation page to navigate to.
pub fn submit_lead<S: LeadStore>(
    store: &S,
    fields: LeadFormFields,
    config: &SiteConfig,
    now: DateTime<Utc>,
) -> Result<LeadSubmission, LeadError> {
    let record = LeadRecord::from_form(fields, &config.default_lead_source, now);
    let raw = record.to_json()?;
    store.persist_raw_lead(&raw).map_err(|error| {
        warn!(%error, "failed to persist lead");
        LeadError::Storage(error.to_string())
    })?;
    debug!(source = %record.source, "lead persisted");
    Ok(LeadSubmission {
        record,
        redirect_to: config.confirmation_page.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl LeadStore for MemoryStore {
        type Error = String;

        fn load_raw_lead(&self) -> Result<Option<String>, String> {
            Ok(self.slot.borrow().clone())
        }

        fn persist_raw_lead(&self, raw: &str) -> Result<(), String> {
            *self.slot.borrow_mut() = Some(raw.to_string());
            Ok(())
        }
    }

    struct FailingStore;

    impl LeadStore for FailingStore {
        type Error = &'static str;

        fn load_raw_lead(&self) -> Result<Option<String>, &'static str> {
            Err("storage disabled")
        }

        fn persist_raw_lead(&self, _raw: &str) -> Result<(), &'static str> {
            Err("quota exceeded")
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 5).single().expect("valid instant")
    }

    fn jane() -> LeadFormFields {
        LeadFormFields {
            name: Some(" Jane ".to_string()),
            email: Some("jane@x.com".to_string()),
            project: Some("Lobby AV".to_string()),
            message: Some("Need a quote\n".to_string()),
            source: None,
        }
    }

    #[test]
    fn submission_persists_trimmed_record_and_redirects() {
        let store = MemoryStore::default();
        let submission =
            submit_lead(&store, jane(), &SiteConfig::default(), now()).expect("submitted");

        assert_eq!(submission.redirect_to, "thank-you.html");
        assert_eq!(submission.record.name, "Jane");
        assert_eq!(submission.record.message, "Need a quote");
        assert_eq!(submission.record.source, "website");
        assert_eq!(submission.record.created_at, "2026-03-01T09:30:05.000Z");

        let stored = lookup_lead(&store).into_record().expect("stored lead");
        assert_eq!(stored, submission.record);
    }

    #[test]
    fn stored_json_uses_camel_case_created_at() {
        let record = LeadRecord::from_form(jane(), "website", now());
        let value: serde_json::Value =
            serde_json::from_str(&record.to_json().expect("json")).expect("value");
        assert_eq!(value["createdAt"], "2026-03-01T09:30:05.000Z");
        assert_eq!(value["project"], "Lobby AV");
    }

    #[test]
    fn later_submission_overwrites_earlier() {
        let store = MemoryStore::default();
        let config = SiteConfig::default();
        submit_lead(&store, jane(), &config, now()).expect("first");
        let second = LeadFormFields {
            name: Some("Omar".to_string()),
            ..LeadFormFields::default()
        };
        submit_lead(&store, second, &config, now()).expect("second");
        let stored = lookup_lead(&store).into_record().expect("stored");
        assert_eq!(stored.name, "Omar");
        assert_eq!(stored.project, "");
    }

    #[test]
    fn missing_fields_default_to_empty_and_source_to_literal() {
        let record = LeadRecord::from_form(
            LeadFormFields {
                source: Some(String::new()),
                ..LeadFormFields::default()
            },
            "website",
            now(),
        );
        assert_eq!(record.name, "");
        assert_eq!(record.email, "");
        assert_eq!(record.source, "website");
    }

    #[test]
    fn explicit_source_is_kept() {
        let fields = LeadFormFields {
            source: Some("landing-page".to_string()),
            ..jane()
        };
        let record = LeadRecord::from_form(fields, "website", now());
        assert_eq!(record.source, "landing-page");
    }

    #[test]
    fn lookup_distinguishes_missing_malformed_and_unavailable() {
        let store = MemoryStore::default();
        assert!(matches!(lookup_lead(&store), LeadLookup::Missing));

        store.persist_raw_lead("{not json").expect("write");
        assert!(matches!(
            lookup_lead(&store),
            LeadLookup::Malformed(LeadError::Decode(_))
        ));

        assert!(matches!(
            lookup_lead(&FailingStore),
            LeadLookup::Unavailable(message) if message == "storage disabled"
        ));
    }

    #[test]
    fn null_and_absent_fields_decode_as_empty() {
        let record =
            LeadRecord::from_json(r#"{"name":null,"project":"Lobby AV"}"#).expect("lead");
        assert_eq!(record.name, "");
        assert_eq!(record.project, "Lobby AV");
        assert_eq!(record.created_at, "");
    }

    #[test]
    fn storage_failure_surfaces_as_error() {
        let error = submit_lead(&FailingStore, jane(), &SiteConfig::default(), now())
            .expect_err("storage failure");
        assert!(matches!(error, LeadError::Storage(message) if message == "quota exceeded"));
    }

    #[test]
    fn from_lookup_reads_each_named_control() {
        let fields = LeadFormFields::from_lookup(|name| match name {
            "name" => Some("Jane".to_string()),
            "project" => Some("Lobby AV".to_string()),
            _ => None,
        });
        assert_eq!(fields.name.as_deref(), Some("Jane"));
        assert_eq!(fields.email, None);
        assert_eq!(fields.project.as_deref(), Some("Lobby AV"));
    }
}
