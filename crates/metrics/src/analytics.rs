//! Analytics page series

use serde::Serialize;

use crm_core::model::{CommunicationLog, Lead, LeadStage, Sentiment, Task, TaskStatus};
use crm_core::CrmStore;

use crate::aggregate::task_completion_rate;
use crate::distribution::{
    channel_breakdown, sentiment_distribution, stage_distribution, status_distribution,
    ChannelStats, Distribution,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub lead_funnel: Distribution<LeadStage>,
    pub channels: Vec<ChannelStats>,
    pub sentiment: Distribution<Sentiment>,
    pub task_status: Distribution<TaskStatus>,
    pub task_completion_rate: u32,
}

impl AnalyticsReport {
    pub fn from_snapshot(leads: &[Lead], tasks: &[Task], logs: &[CommunicationLog]) -> Self {
        Self {
            lead_funnel: stage_distribution(leads),
            channels: channel_breakdown(logs),
            sentiment: sentiment_distribution(logs),
            task_status: status_distribution(tasks),
            task_completion_rate: task_completion_rate(tasks),
        }
    }

    pub async fn load(store: &CrmStore) -> Self {
        let leads = store.get_all::<Lead>().await;
        let tasks = store.get_all::<Task>().await;
        let logs = store.get_all::<CommunicationLog>().await;
        Self::from_snapshot(&leads, &tasks, &logs)
    }
}
