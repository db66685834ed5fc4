//! # Delivery Dispatch
//!
//! Hands the finished summary to an external application by opening a URI:
//! - Messaging: `https://wa.me/<number>?text=<encoded>`
//! - Mail: `mailto:<address>?subject=<encoded>&body=<encoded>`
//!
//! Opening is a capability ([`UriOpener`]) supplied by the caller. Dispatch
//! is fire-and-forget: there is no retry and no confirmation. The opener's
//! error is returned so the caller can report it.

use crate::record::AssessmentRecord;
use crate::summary::{DateStyle, MAIL_SUBJECT, format_summary, messaging_text};
use crate::types::XconceptError;
use serde::{Deserialize, Serialize};

/// Base URL of the messaging deep link.
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

// =============================================================================
// CONTACTS
// =============================================================================

/// Fixed recipients of the two delivery channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contacts {
    /// Messaging number in international format, digits only.
    pub whatsapp_number: String,
    /// Mail recipient.
    pub email_address: String,
}

impl Default for Contacts {
    fn default() -> Self {
        Self {
            whatsapp_number: "5511999999999".to_string(),
            email_address: "avaliacao@xconcept.com.br".to_string(),
        }
    }
}

// =============================================================================
// CHANNELS & URIS
// =============================================================================

/// Delivery channel offered on the finish step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Messaging,
    Mail,
}

impl Channel {
    /// Action label on the finish step.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Messaging => "Enviar via WhatsApp",
            Channel::Mail => "Enviar por E-mail",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Messaging => f.write_str("messaging"),
            Channel::Mail => f.write_str("mail"),
        }
    }
}

/// Messaging deep link carrying `text`.
#[must_use]
pub fn messaging_uri(contacts: &Contacts, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        MESSAGING_BASE_URL,
        contacts.whatsapp_number,
        urlencoding::encode(text)
    )
}

/// `mailto:` link carrying `subject` and `body`.
#[must_use]
pub fn mail_uri(contacts: &Contacts, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contacts.email_address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Build the delivery URI for `record` on `channel`.
#[must_use]
pub fn delivery_uri(
    channel: Channel,
    record: &AssessmentRecord,
    contacts: &Contacts,
    dates: &DateStyle,
) -> String {
    match channel {
        Channel::Messaging => messaging_uri(contacts, &messaging_text(record, dates)),
        Channel::Mail => mail_uri(contacts, MAIL_SUBJECT, &format_summary(record, dates)),
    }
}

// =============================================================================
// OPENER CAPABILITY
// =============================================================================

/// Something that can open an external resource given its URI.
pub trait UriOpener {
    /// Open `uri`. Returning `Ok` means the request was handed off, not that
    /// the external application did anything with it.
    fn open(&mut self, uri: &str) -> Result<(), XconceptError>;
}

impl<O: UriOpener + ?Sized> UriOpener for &mut O {
    fn open(&mut self, uri: &str) -> Result<(), XconceptError> {
        (**self).open(uri)
    }
}

impl<O: UriOpener + ?Sized> UriOpener for Box<O> {
    fn open(&mut self, uri: &str) -> Result<(), XconceptError> {
        (**self).open(uri)
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Sends a record through either channel using an injected opener.
#[derive(Debug)]
pub struct Dispatcher<O> {
    contacts: Contacts,
    dates: DateStyle,
    opener: O,
}

impl<O: UriOpener> Dispatcher<O> {
    #[must_use]
    pub fn new(contacts: Contacts, dates: DateStyle, opener: O) -> Self {
        Self {
            contacts,
            dates,
            opener,
        }
    }

    #[must_use]
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Date style used when rendering the summary.
    #[must_use]
    pub fn dates(&self) -> &DateStyle {
        &self.dates
    }

    /// Access the opener (tests inspect recorded URIs through this).
    #[must_use]
    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Open the messaging app with greeting + summary. Returns the URI.
    pub fn send_via_messaging(&mut self, record: &AssessmentRecord) -> Result<String, XconceptError> {
        self.send(Channel::Messaging, record)
    }

    /// Open the mail client with subject + summary. Returns the URI.
    pub fn send_via_mail(&mut self, record: &AssessmentRecord) -> Result<String, XconceptError> {
        self.send(Channel::Mail, record)
    }

    /// Build the URI for `channel` and hand it to the opener.
    pub fn send(
        &mut self,
        channel: Channel,
        record: &AssessmentRecord,
    ) -> Result<String, XconceptError> {
        let uri = delivery_uri(channel, record, &self.contacts, &self.dates);
        self.opener.open(&uri)?;
        Ok(uri)
    }
}

// =============================================================================
// TESTS
// =============================================================================
