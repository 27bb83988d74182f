//! Communication log model definitions

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::domain::EnumDomain;
use super::record::{require, NewRecord, Record};
use crate::storage::Collection;
use crate::Error;

/// Channel an interaction happened on.
///
/// Stored lowercase. Title-case spellings are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[serde(alias = "Call")]
    Call,
    #[serde(alias = "Email")]
    Email,
    #[serde(alias = "SMS", alias = "Sms")]
    Sms,
    #[serde(alias = "WhatsApp", alias = "Whatsapp")]
    Whatsapp,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl EnumDomain for Channel {
    const ALL: &'static [Self] = &[Self::Call, Self::Email, Self::Sms, Self::Whatsapp];

    fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Sms => "SMS",
            Self::Whatsapp => "WhatsApp",
        }
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "whatsapp" => Ok(Self::Whatsapp),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported channel '{}'",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[serde(alias = "Positive")]
    Positive,
    #[serde(alias = "Neutral")]
    Neutral,
    #[serde(alias = "Negative")]
    Negative,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl EnumDomain for Sentiment {
    const ALL: &'static [Self] = &[Self::Positive, Self::Neutral, Self::Negative];

    fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported sentiment '{}'",
                value
            ))),
        }
    }
}

/// A single logged interaction.
///
/// `contact` names a lead or contact by display name. It is a soft
/// reference: deleting the lead or contact leaves it dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationLog {
    pub id: String,
    #[serde(rename = "type")]
    pub channel: Channel,
    pub contact: String,
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub summary: String,
}

impl Record for CommunicationLog {
    type Patch = CommunicationLogPatch;
    const COLLECTION: Collection = Collection::CommunicationLogs;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CommunicationLogPatch) {
        if let Some(channel) = patch.channel {
            self.channel = channel;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(sentiment) = patch.sentiment {
            self.sentiment = sentiment;
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCommunicationLog {
    #[serde(rename = "type")]
    pub channel: Channel,
    pub contact: String,
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    #[serde(default)]
    pub summary: String,
}

impl NewCommunicationLog {
    pub fn new(
        channel: Channel,
        contact: impl Into<String>,
        date: NaiveDate,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            channel,
            contact: contact.into(),
            date,
            sentiment,
            summary: String::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        require(&self.contact, "contact")
    }
}

impl NewRecord for NewCommunicationLog {
    type Record = CommunicationLog;

    // Logs carry no creation timestamp; `date` is the interaction date.
    fn into_record(self, id: String, _created_at: DateTime<Utc>) -> CommunicationLog {
        CommunicationLog {
            id,
            channel: self.channel,
            contact: self.contact,
            date: self.date,
            sentiment: self.sentiment,
            summary: self.summary,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommunicationLogPatch {
    pub channel: Option<Channel>,
    pub contact: Option<String>,
    pub date: Option<NaiveDate>,
    pub sentiment: Option<Sentiment>,
    pub summary: Option<String>,
}
