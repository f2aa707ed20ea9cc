//! Event type and event detail variants.
//!
//! Both enums are closed: adapters pick a variant and fill in the typed fields
//! they can extract. Fields are optional because most reports only carry a
//! subset of them.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumDiscriminants, EnumIter, EnumString};

/// What kind of abuse an event describes.
///
/// The first entry of `Event::event_types` is the primary classification.
/// `EventKind` is the field-less discriminant, used where a type has to be
/// named in configuration (e.g. `--event-type copyright`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, EnumDiscriminants)]
#[serde(tag = "kind")]
#[allow(missing_docs)]
#[strum_discriminants(name(EventKind))]
#[strum_discriminants(derive(Hash, EnumIter, EnumString, Display, AsRefStr))]
#[strum_discriminants(strum(serialize_all = "snake_case", ascii_case_insensitive))]
pub enum EventType {
    /// Unsolicited bulk email.
    Spam,
    /// Credential phishing page or mail.
    Phishing,
    /// Copyright infringement notice.
    Copyright {
        #[serde(skip_serializing_if = "Option::is_none")]
        copyrighted_work: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        owner: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        official_url: Option<String>,
    },
    /// Trademark infringement notice.
    Trademark {
        #[serde(skip_serializing_if = "Option::is_none")]
        trademark: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        owner: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        official_url: Option<String>,
    },
    /// Denial-of-service traffic.
    #[serde(rename = "DDoS")]
    Ddos,
    /// Port or network scanning.
    PortScan,
    /// Brute-force or credential-stuffing login attempts.
    LoginAttack {
        #[serde(skip_serializing_if = "Option::is_none")]
        protocol: Option<String>,
    },
    /// Malware hosting or distribution.
    Malware {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Host participating in a botnet.
    Bot {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Generic malicious activity without a more specific class.
    MaliciousActivity,
    /// Compromised user account.
    CompromisedAccount {
        #[serde(skip_serializing_if = "Option::is_none")]
        username: Option<String>,
    },
    /// Compromised server.
    CompromisedServer,
    /// Compromised website.
    CompromisedWebsite,
    /// Openly reachable service (open resolver, open proxy, ...).
    Open {
        #[serde(skip_serializing_if = "Option::is_none")]
        service: Option<String>,
    },
    /// Host vulnerable to a known CVE.
    #[serde(rename = "CVE")]
    Cve {
        #[serde(skip_serializing_if = "Option::is_none")]
        cve: Option<String>,
    },
    /// Listing on a blocklist.
    Blacklist {
        #[serde(skip_serializing_if = "Option::is_none")]
        list: Option<String>,
    },
    /// Fraud or scam.
    Fraud,
    /// Child sexual abuse material.
    ChildAbuse,
    /// Publication of personal data.
    Doxing,
    /// Violent content.
    Violence,
    /// Extremist propaganda.
    Propaganda,
    /// Attacks against web applications.
    WebHack,
    /// Exploitation attempts.
    Exploit,
    /// Website defacement.
    Defacement,
    /// Report could not be classified.
    Unknown,
}

impl EventType {
    /// Returns the field-less kind of this variant.
    pub fn kind(&self) -> EventKind {
        EventKind::from(self)
    }
}

impl From<EventKind> for EventType {
    /// Builds the variant for `kind` with every typed field left empty.
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Spam => EventType::Spam,
            EventKind::Phishing => EventType::Phishing,
            EventKind::Copyright => EventType::Copyright {
                copyrighted_work: None,
                owner: None,
                official_url: None,
            },
            EventKind::Trademark => EventType::Trademark {
                trademark: None,
                owner: None,
                official_url: None,
            },
            EventKind::Ddos => EventType::Ddos,
            EventKind::PortScan => EventType::PortScan,
            EventKind::LoginAttack => EventType::LoginAttack { protocol: None },
            EventKind::Malware => EventType::Malware { name: None },
            EventKind::Bot => EventType::Bot { name: None },
            EventKind::MaliciousActivity => EventType::MaliciousActivity,
            EventKind::CompromisedAccount => EventType::CompromisedAccount { username: None },
            EventKind::CompromisedServer => EventType::CompromisedServer,
            EventKind::CompromisedWebsite => EventType::CompromisedWebsite,
            EventKind::Open => EventType::Open { service: None },
            EventKind::Cve => EventType::Cve { cve: None },
            EventKind::Blacklist => EventType::Blacklist { list: None },
            EventKind::Fraud => EventType::Fraud,
            EventKind::ChildAbuse => EventType::ChildAbuse,
            EventKind::Doxing => EventType::Doxing,
            EventKind::Violence => EventType::Violence,
            EventKind::Propaganda => EventType::Propaganda,
            EventKind::WebHack => EventType::WebHack,
            EventKind::Exploit => EventType::Exploit,
            EventKind::Defacement => EventType::Defacement,
            EventKind::Unknown => EventType::Unknown,
        }
    }
}

/// Supplementary structured facts attached to an event.
///
/// Details describe *related* identifiers (e.g. the victim of a DDoS), never
/// the reported one: they must not be used to override `Event::ip`,
/// `Event::url` or `Event::port`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
#[allow(missing_docs)]
pub enum EventDetail {
    /// A target of the reported activity.
    Target {
        #[serde(skip_serializing_if = "Option::is_none")]
        ip: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        port: Option<u16>,
        #[serde(skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// Autonomous system the reported address belongs to.
    #[serde(rename = "ASN")]
    Asn {
        asn: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        as_name: Option<String>,
    },
    /// Organisation named in the report.
    Organisation { name: String },
    /// Identifier assigned by the reporting party (ticket, case number).
    #[serde(rename = "ExternalID")]
    ExternalId { id: String },
    /// Raw evidence excerpt (log lines, headers).
    Evidence { data: String },
    /// Transport protocol of the reported traffic.
    TransportProtocol { protocol: String },
    /// Malware sample reference.
    Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sha256: Option<String>,
    },
    /// Email address involved (spam sender, phishing recipient).
    Email { address: String },
}
