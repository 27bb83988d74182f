//! Derived metrics for the CRM dashboard
//!
//! Pure aggregation over collection snapshots taken from a
//! [`crm_core::CrmStore`]. Nothing here is cached; views recompute on every
//! render.

pub mod aggregate;
pub mod analytics;
pub mod dashboard;
pub mod distribution;

pub use aggregate::{
    conversion_rate, count_by, count_where, percentage_of, sentiment_score, task_completion_rate,
};
pub use analytics::AnalyticsReport;
pub use dashboard::DashboardSummary;
pub use distribution::{
    channel_breakdown, channel_distribution, sentiment_distribution, stage_distribution,
    status_distribution, ChannelStats, ChartPoint, Distribution,
};
