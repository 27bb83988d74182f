//! Lead model definitions

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::EnumDomain;
use super::record::{require, NewRecord, Record};
use crate::storage::Collection;
use crate::Error;

/// Position of a lead in the sales funnel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeadStage {
    #[default]
    New,
    Contacted,
    Interested,
    Converted,
    Lost,
}

impl LeadStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Interested => "Interested",
            Self::Converted => "Converted",
            Self::Lost => "Lost",
        }
    }
}

impl EnumDomain for LeadStage {
    const ALL: &'static [Self] = &[
        Self::New,
        Self::Contacted,
        Self::Interested,
        Self::Converted,
        Self::Lost,
    ];

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for LeadStage {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "interested" => Ok(Self::Interested),
            "converted" => Ok(Self::Converted),
            "lost" => Ok(Self::Lost),
            _ => Err(Error::InvalidInput(format!(
                "Unsupported lead stage '{}'",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub stage: LeadStage,
    /// Assigned agent, free text
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub ai_summary: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Lead {
    type Patch = LeadPatch;
    const COLLECTION: Collection = Collection::Leads;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: LeadPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(stage) = patch.stage {
            self.stage = stage;
        }
        if let Some(agent) = patch.agent {
            self.agent = agent;
        }
        if let Some(ai_summary) = patch.ai_summary {
            self.ai_summary = ai_summary;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub stage: LeadStage,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub ai_summary: String,
}

impl NewLead {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..Self::default()
        }
    }

    pub fn with_stage(mut self, stage: LeadStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn with_ai_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = summary.into();
        self
    }

    /// Checks the fields the lead form marks as required
    pub fn validate(&self) -> crate::Result<()> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.phone, "phone")?;
        require(&self.agent, "agent")
    }
}

impl NewRecord for NewLead {
    type Record = Lead;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            stage: self.stage,
            agent: self.agent,
            ai_summary: self.ai_summary,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub stage: Option<LeadStage>,
    pub agent: Option<String>,
    pub ai_summary: Option<String>,
}

impl LeadPatch {
    pub fn stage(stage: LeadStage) -> Self {
        Self {
            stage: Some(stage),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_serializes_as_label() {
        let json = serde_json::to_string(&LeadStage::Interested).unwrap();
        assert_eq!(json, "\"Interested\"");
    }

    #[test]
    fn test_unknown_stage_is_rejected() {
        assert!(serde_json::from_str::<LeadStage>("\"Qualified\"").is_err());
        assert!("Qualified".parse::<LeadStage>().is_err());
        assert_eq!("converted".parse::<LeadStage>().unwrap(), LeadStage::Converted);
    }

    #[test]
    fn test_new_lead_defaults_to_new_stage() {
        let lead = NewLead::new("Ravi", "ravi@example.com", "555-0100");
        assert_eq!(lead.stage, LeadStage::New);
    }

    #[test]
    fn test_validate_requires_agent() {
        let lead = NewLead::new("Ravi", "ravi@example.com", "555-0100");
        assert!(matches!(lead.validate(), Err(Error::MissingField("agent"))));
        assert!(lead.with_agent("Kim").validate().is_ok());
    }

    #[test]
    fn test_patch_overrides_only_given_fields() {
        let mut lead = NewLead::new("Ravi", "ravi@example.com", "555-0100")
            .with_agent("Kim")
            .into_record("l1".to_string(), Utc::now());
        lead.apply(LeadPatch::stage(LeadStage::Converted));

        assert_eq!(lead.stage, LeadStage::Converted);
        assert_eq!(lead.agent, "Kim");
        assert_eq!(lead.id, "l1");
    }
}
