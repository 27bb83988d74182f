//! Dashboard KPIs

use serde::Serialize;
use tracing::debug;

use crm_core::model::{Channel, CommunicationLog, Lead, LeadStage, Task, TaskStatus, User};
use crm_core::CrmStore;

use crate::aggregate::{conversion_rate, count_by, sentiment_score};
use crate::distribution::{channel_distribution, stage_distribution, Distribution};

/// Everything the dashboard page shows, computed from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_leads: usize,
    pub converted_leads: usize,
    pub conversion_rate: u32,
    /// Tasks still in the Pending state
    pub pending_follow_ups: usize,
    /// Percentage of positive interactions, one decimal
    pub satisfaction_score: f64,
    pub stage_distribution: Distribution<LeadStage>,
    pub channel_distribution: Distribution<Channel>,
    /// Managers of the current admin's organization; empty for non-admins
    pub managers: Vec<User>,
}

impl DashboardSummary {
    /// Compute the summary from already-loaded collections
    pub fn from_snapshot(
        leads: &[Lead],
        tasks: &[Task],
        logs: &[CommunicationLog],
        managers: Vec<User>,
    ) -> Self {
        Self {
            total_leads: leads.len(),
            converted_leads: count_by(leads, |l| l.stage, LeadStage::Converted),
            conversion_rate: conversion_rate(leads),
            pending_follow_ups: count_by(tasks, |t| t.status, TaskStatus::Pending),
            satisfaction_score: sentiment_score(logs),
            stage_distribution: stage_distribution(leads),
            channel_distribution: channel_distribution(logs),
            managers,
        }
    }

    /// Read a fresh snapshot from `store` and compute the summary
    pub async fn load(store: &CrmStore) -> Self {
        let leads = store.get_all::<Lead>().await;
        let tasks = store.get_all::<Task>().await;
        let logs = store.get_all::<CommunicationLog>().await;

        let managers = match store.current_user().await {
            Some(user) if user.is_admin() => match store.organization_by_admin(&user.id).await {
                Some(org) => store.managers_of_organization(&org.id).await,
                None => Vec::new(),
            },
            _ => Vec::new(),
        };

        debug!(
            "Dashboard snapshot: {} leads, {} tasks, {} logs",
            leads.len(),
            tasks.len(),
            logs.len()
        );
        Self::from_snapshot(&leads, &tasks, &logs, managers)
    }
}
