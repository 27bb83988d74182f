use chrono::NaiveDate;
use crm_core::model::{
    Channel, Lead, LeadPatch, LeadStage, NewCommunicationLog, NewLead, NewTask, Sentiment,
    TaskStatus,
};
use crm_core::store::{AdminSetup, ManagerSetup};
use crm_core::CrmStore;
use crm_metrics::{AnalyticsReport, DashboardSummary};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

async fn add_lead(store: &CrmStore, name: &str, stage: LeadStage) -> Lead {
    store
        .add(
            NewLead::new(name, format!("{}@example.com", name.to_lowercase()), "555-0100")
                .with_stage(stage)
                .with_agent("Kim"),
        )
        .await
}

#[tokio::test]
async fn conversion_rate_follows_stage_changes() {
    let store = CrmStore::in_memory();
    add_lead(&store, "A", LeadStage::New).await;
    add_lead(&store, "B", LeadStage::Converted).await;
    add_lead(&store, "C", LeadStage::Converted).await;
    let d = add_lead(&store, "D", LeadStage::Lost).await;

    let summary = DashboardSummary::load(&store).await;
    assert_eq!(summary.total_leads, 4);
    assert_eq!(summary.converted_leads, 2);
    assert_eq!(summary.conversion_rate, 50);

    store
        .update::<Lead>(&d.id, LeadPatch::stage(LeadStage::Converted))
        .await;
    let summary = DashboardSummary::load(&store).await;
    assert_eq!(summary.conversion_rate, 75);
    assert_eq!(summary.stage_distribution.get(LeadStage::Lost), 0);
}

#[tokio::test]
async fn empty_store_yields_zeroed_views_with_all_categories() {
    let store = CrmStore::in_memory();

    let summary = DashboardSummary::load(&store).await;
    assert_eq!(summary.satisfaction_score, 0.0);
    let stages: Vec<(&str, usize)> = summary
        .stage_distribution
        .chart_points()
        .into_iter()
        .map(|p| (p.name, p.value))
        .collect();
    assert_eq!(
        stages,
        vec![
            ("New", 0),
            ("Contacted", 0),
            ("Interested", 0),
            ("Converted", 0),
            ("Lost", 0)
        ]
    );

    let report = AnalyticsReport::load(&store).await;
    assert_eq!(report.task_completion_rate, 0);
    assert_eq!(report.channels.len(), 4);
}

#[tokio::test]
async fn satisfaction_and_follow_ups() {
    let store = CrmStore::in_memory();
    for sentiment in [Sentiment::Positive, Sentiment::Positive, Sentiment::Negative] {
        store
            .add(NewCommunicationLog::new(Channel::Call, "A", date(3), sentiment))
            .await;
    }
    store.add(NewTask::new("t1", "A", date(4))).await;
    store
        .add(NewTask::new("t2", "A", date(5)).with_status(TaskStatus::InProgress))
        .await;
    store
        .add(NewTask::new("t3", "A", date(6)).with_status(TaskStatus::Completed))
        .await;

    let summary = DashboardSummary::load(&store).await;
    assert_eq!(summary.satisfaction_score, 66.7);
    assert_eq!(summary.pending_follow_ups, 1);
    assert_eq!(summary.channel_distribution.get(Channel::Call), 3);

    let report = AnalyticsReport::load(&store).await;
    assert_eq!(report.task_completion_rate, 33);
    assert_eq!(report.channels[0].positive, 2);
    assert_eq!(report.sentiment.get(Sentiment::Negative), 1);
}

#[tokio::test]
async fn admin_dashboard_lists_managers() {
    let store = CrmStore::in_memory();
    let admin = store.register_user("admin@example.com", "Admin", "pw").await;
    let (org, _) = store
        .complete_admin_setup(
            &admin.id,
            AdminSetup {
                org_name: "Acme".to_string(),
                address: "1 Main St".to_string(),
                num_managers: 2,
            },
        )
        .await
        .unwrap();
    let manager = store.register_user("mgr@example.com", "Mgr", "pw").await;
    let manager = store
        .complete_manager_setup(
            &manager.id,
            ManagerSetup {
                admin_email: admin.email.clone(),
                org_id: org.id.clone(),
            },
        )
        .await
        .unwrap();

    // The manager is now the current user and sees no manager list
    assert!(DashboardSummary::load(&store).await.managers.is_empty());

    let admin = store.login("admin@example.com", "pw").await.unwrap();
    store.set_current_user(Some(&admin)).await;
    let summary = DashboardSummary::load(&store).await;
    assert_eq!(summary.managers, vec![manager]);
}

#[tokio::test]
async fn seeded_store_produces_consistent_views() {
    let store = CrmStore::in_memory();
    assert!(store.seed_demo_data().await);

    let summary = DashboardSummary::load(&store).await;
    let report = AnalyticsReport::load(&store).await;

    assert_eq!(summary.total_leads, summary.stage_distribution.total());
    assert_eq!(report.lead_funnel, summary.stage_distribution);
    let channel_total: usize = report.channels.iter().map(|c| c.count).sum();
    assert_eq!(channel_total, summary.channel_distribution.total());

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("conversionRate").is_some());
    assert!(json["stageDistribution"].is_array());
}
