//! Counts and percentages

use crm_core::model::{CommunicationLog, Lead, LeadStage, Sentiment, Task, TaskStatus};

/// Number of items whose projected field equals `value`
pub fn count_by<T, V, F>(items: &[T], field: F, value: V) -> usize
where
    V: PartialEq,
    F: Fn(&T) -> V,
{
    items.iter().filter(|item| field(*item) == value).count()
}

/// Number of items matching `predicate`
pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(*item)).count()
}

/// `count` as a whole-number percentage of `total`; 0 when `total` is 0
pub fn percentage_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

fn percentage_one_decimal(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Share of leads in the Converted stage
pub fn conversion_rate(leads: &[Lead]) -> u32 {
    percentage_of(count_by(leads, |l| l.stage, LeadStage::Converted), leads.len())
}

/// Share of positive interactions, to one decimal place
pub fn sentiment_score(logs: &[CommunicationLog]) -> f64 {
    percentage_one_decimal(
        count_by(logs, |l| l.sentiment, Sentiment::Positive),
        logs.len(),
    )
}

/// Share of tasks marked Completed
pub fn task_completion_rate(tasks: &[Task]) -> u32 {
    percentage_of(count_by(tasks, |t| t.status, TaskStatus::Completed), tasks.len())
}
