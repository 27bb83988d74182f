//! Contact history and name-based lookups
//!
//! Tasks and communication logs point at leads and contacts by display
//! name. These lookups follow those soft references as-is; a name whose
//! lead was deleted still matches.

use super::CrmStore;
use crate::model::{CommunicationLog, Contact, Task};

impl CrmStore {
    /// Append a free-text entry to a contact's interaction history.
    ///
    /// Returns the updated contact, or `None` if there is no such contact.
    pub async fn log_contact_interaction(
        &self,
        contact_id: &str,
        entry: impl Into<String>,
    ) -> Option<Contact> {
        let _guard = self.write_lock.lock().await;
        let mut contacts = self.load_for_write::<Contact>().await;

        let updated = contacts
            .iter_mut()
            .find(|contact| contact.id == contact_id)
            .map(|contact| {
                contact.call_history.push(entry.into());
                contact.clone()
            });

        if updated.is_some() {
            self.persist(&contacts).await;
        }
        updated
    }

    /// Tasks whose `lead` equals `lead_name`
    pub async fn tasks_for_lead(&self, lead_name: &str) -> Vec<Task> {
        self.get_all::<Task>()
            .await
            .into_iter()
            .filter(|task| task.lead == lead_name)
            .collect()
    }

    /// Communication logs whose `contact` equals `name`
    pub async fn logs_for_contact(&self, name: &str) -> Vec<CommunicationLog> {
        self.get_all::<CommunicationLog>()
            .await
            .into_iter()
            .filter(|log| log.contact == name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Channel, Lead, NewCommunicationLog, NewContact, NewLead, NewTask, Sentiment,
    };
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
    }

    #[tokio::test]
    async fn test_log_contact_interaction_appends() {
        let store = CrmStore::in_memory();
        let contact = store
            .add(
                NewContact::new("Mia", "mia@example.com", "555-0101", "Globex")
                    .with_first_interaction("2025-10-01 Call - intro"),
            )
            .await;

        let updated = store
            .log_contact_interaction(&contact.id, "2025-10-05 Email - pricing")
            .await
            .unwrap();

        assert_eq!(
            updated.call_history,
            vec!["2025-10-01 Call - intro", "2025-10-05 Email - pricing"]
        );
        assert_eq!(store.find::<Contact>(&contact.id).await, Some(updated));
        assert!(store.log_contact_interaction("missing", "x").await.is_none());
    }

    #[tokio::test]
    async fn test_soft_references_survive_lead_delete() {
        let store = CrmStore::in_memory();
        let lead = store
            .add(NewLead::new("Ravi", "ravi@example.com", "555-0100").with_agent("Kim"))
            .await;
        let task = store.add(NewTask::new("Follow up", "Ravi", date(20))).await;
        store.add(NewTask::new("Other", "Someone else", date(21))).await;
        let log = store
            .add(NewCommunicationLog::new(Channel::Call, "Ravi", date(10), Sentiment::Positive))
            .await;

        store.remove::<Lead>(&lead.id).await;

        assert_eq!(store.tasks_for_lead("Ravi").await, vec![task]);
        assert_eq!(store.logs_for_contact("Ravi").await, vec![log]);
    }
}
