//! Per-category counts over a closed domain
//!
//! A distribution always lists every value of its domain, in domain order,
//! so charts render empty categories instead of dropping them.

use serde::{Serialize, Serializer};

use crm_core::model::{
    Channel, CommunicationLog, EnumDomain, Lead, LeadStage, Sentiment, Task, TaskStatus,
};

/// One bar or slice of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: &'static str,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution<K: EnumDomain> {
    counts: Vec<(K, usize)>,
}

impl<K: EnumDomain> Distribution<K> {
    /// Count occurrences of each key
    pub fn from_keys(keys: impl IntoIterator<Item = K>) -> Self {
        let mut counts: Vec<(K, usize)> = K::ALL.iter().map(|key| (*key, 0)).collect();
        for key in keys {
            if let Some(entry) = counts.iter_mut().find(|(k, _)| *k == key) {
                entry.1 += 1;
            }
        }
        Self { counts }
    }

    pub fn get(&self, key: K) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.counts
            .iter()
            .map(|(key, count)| ChartPoint {
                name: key.label(),
                value: *count,
            })
            .collect()
    }
}

impl<K: EnumDomain> Serialize for Distribution<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.chart_points())
    }
}

pub fn stage_distribution(leads: &[Lead]) -> Distribution<LeadStage> {
    Distribution::from_keys(leads.iter().map(|lead| lead.stage))
}

pub fn channel_distribution(logs: &[CommunicationLog]) -> Distribution<Channel> {
    Distribution::from_keys(logs.iter().map(|log| log.channel))
}

pub fn sentiment_distribution(logs: &[CommunicationLog]) -> Distribution<Sentiment> {
    Distribution::from_keys(logs.iter().map(|log| log.sentiment))
}

pub fn status_distribution(tasks: &[Task]) -> Distribution<TaskStatus> {
    Distribution::from_keys(tasks.iter().map(|task| task.status))
}

/// Interaction volume and positive count for one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel: Channel,
    pub name: &'static str,
    pub count: usize,
    pub positive: usize,
}

/// Per-channel totals and positive counts, one entry per channel
pub fn channel_breakdown(logs: &[CommunicationLog]) -> Vec<ChannelStats> {
    Channel::ALL
        .iter()
        .map(|channel| {
            let on_channel = logs.iter().filter(|log| log.channel == *channel);
            let (count, positive) = on_channel.fold((0, 0), |(count, positive), log| {
                let is_positive = usize::from(log.sentiment == Sentiment::Positive);
                (count + 1, positive + is_positive)
            });
            ChannelStats {
                channel: *channel,
                name: channel.label(),
                count,
                positive,
            }
        })
        .collect()
}
