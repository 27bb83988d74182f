//! Sample records for a fresh dashboard

use chrono::NaiveDate;
use tracing::info;

use super::CrmStore;
use crate::model::{
    Channel, CommunicationLog, Contact, Lead, LeadStage, NewCommunicationLog, NewContact, NewLead,
    NewTask, Sentiment, Task, TaskStatus,
};

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap_or_default()
}

impl CrmStore {
    /// Fill an empty store with a handful of sample leads, contacts, logs
    /// and tasks.
    ///
    /// Does nothing (and returns `false`) if any of those collections
    /// already holds data. Users and organizations are never seeded. The
    /// check and the writes happen under one hold of the write lock.
    pub async fn seed_demo_data(&self) -> bool {
        let _guard = self.write_lock.lock().await;
        let has_data = !self.get_all::<Lead>().await.is_empty()
            || !self.get_all::<Contact>().await.is_empty()
            || !self.get_all::<CommunicationLog>().await.is_empty()
            || !self.get_all::<Task>().await.is_empty();
        if has_data {
            return false;
        }

        let leads = [
            NewLead::new("Arjun Mehta", "arjun@example.com", "555-0142")
                .with_stage(LeadStage::Contacted)
                .with_agent("Lena")
                .with_ai_summary("Asked twice about annual pricing."),
            NewLead::new("Sofia Ortiz", "sofia@example.com", "555-0177")
                .with_agent("Marco")
                .with_ai_summary("No reply to the first outreach yet."),
            NewLead::new("Kenji Sato", "kenji@example.com", "555-0193")
                .with_stage(LeadStage::Converted)
                .with_agent("Lena")
                .with_ai_summary("Signed the starter plan."),
        ];
        self.append_all(leads).await;

        let contacts = [
            NewContact::new("Arjun Mehta", "arjun@example.com", "555-0142", "Northwind Traders")
                .with_notes("Prefers morning calls")
                .with_first_interaction("2025-10-02 Call - positive"),
            NewContact::new("Grace Liu", "grace@example.com", "555-0108", "Contoso Ltd")
                .with_notes("Evaluating the premium tier")
                .with_first_interaction("2025-10-07 Email - follow-up"),
        ];
        self.append_all(contacts).await;

        let logs = [
            (Channel::Call, "Arjun Mehta", day(10, 9), Sentiment::Positive, "Walked through pricing."),
            (Channel::Email, "Sofia Ortiz", day(10, 11), Sentiment::Neutral, "Sent the product brochure."),
            (Channel::Whatsapp, "Kenji Sato", day(10, 13), Sentiment::Positive, "Confirmed onboarding slot."),
            (Channel::Sms, "Grace Liu", day(10, 14), Sentiment::Negative, "Asked for more detail on limits."),
        ];
        self.append_all(logs.map(|(channel, contact, date, sentiment, summary)| {
            NewCommunicationLog::new(channel, contact, date, sentiment).with_summary(summary)
        }))
        .await;

        let tasks = [
            ("Call back Arjun Mehta", "Arjun Mehta", day(10, 20), TaskStatus::Pending),
            ("Send proposal to Sofia Ortiz", "Sofia Ortiz", day(10, 18), TaskStatus::InProgress),
            ("Kick-off with Kenji Sato", "Kenji Sato", day(10, 16), TaskStatus::Completed),
        ];
        self.append_all(
            tasks.map(|(task, lead, due, status)| NewTask::new(task, lead, due).with_status(status)),
        )
        .await;

        info!("Seeded demo data");
        true
    }
}
